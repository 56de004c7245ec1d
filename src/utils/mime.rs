//! MIME type detection by file extension.
//!
//! One table serves both `data:` URL generation and the HTTP Content-Type
//! header. Unknown or missing extensions fall back to
//! `application/octet-stream`.

use std::path::Path;

/// Fallback for unknown or missing extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

pub const HTML: &str = "text/html; charset=utf-8";
pub const PLAIN: &str = "text/plain; charset=utf-8";

/// Guess a MIME type from the file extension (case-insensitive).
pub fn from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        // Images
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",
        Some("bmp") => "image/bmp",
        Some("tif" | "tiff") => "image/tiff",

        // Web / Text
        Some("html" | "htm") => HTML,
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("txt") => PLAIN,
        Some("md") => "text/markdown; charset=utf-8",

        // Documents
        Some("pdf") => "application/pdf",

        _ => OCTET_STREAM,
    }
}

/// Check if the MIME type represents an image.
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_path() {
        assert_eq!(from_path(&PathBuf::from("logo.png")), "image/png");
        assert_eq!(from_path(&PathBuf::from("photo.jpeg")), "image/jpeg");
        assert_eq!(from_path(&PathBuf::from("icon.svg")), "image/svg+xml");
        assert_eq!(from_path(&PathBuf::from("index.html")), HTML);
        assert_eq!(from_path(&PathBuf::from("notes.txt")), PLAIN);
        assert_eq!(from_path(&PathBuf::from("unknown.xyz")), OCTET_STREAM);
        assert_eq!(from_path(&PathBuf::from("no_extension")), OCTET_STREAM);
    }

    #[test]
    fn test_from_path_case_insensitive() {
        assert_eq!(from_path(&PathBuf::from("LOGO.PNG")), "image/png");
        assert_eq!(from_path(&PathBuf::from("Photo.Jpg")), "image/jpeg");
    }

    #[test]
    fn test_is_image() {
        assert!(is_image("image/png"));
        assert!(is_image("image/svg+xml"));
        assert!(!is_image(HTML));
        assert!(!is_image(OCTET_STREAM));
    }
}
