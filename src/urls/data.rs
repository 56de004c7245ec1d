//! `data:` URL formatting (base64-embedded file content).

use crate::error::{Error, Result};
use crate::utils::mime;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::{fs, path::Path};

/// Encode the file at `path` into a `data:<mime>;base64,<payload>` URL.
///
/// The MIME type comes from the extension table in [`crate::utils::mime`];
/// unknown extensions fall back to `application/octet-stream`. The whole
/// file is read into memory, which is fine for the image sizes this tool
/// targets (no streaming).
pub fn data_url(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let mime = mime::from_path(path);
    let bytes = fs::read(path)?;
    Ok(format!("data:{mime};base64,{}", BASE64.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(name: &str, bytes: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        (dir, path)
    }

    #[test]
    fn test_data_url_round_trip() {
        let bytes = b"\x89PNG\r\n\x1a\nfake image body";
        let (_dir, path) = write_fixture("img.png", bytes);

        let url = data_url(&path).unwrap();
        let payload = url.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(BASE64.decode(payload).unwrap(), bytes);
    }

    #[test]
    fn test_data_url_svg_mime() {
        let (_dir, path) = write_fixture("icon.svg", b"<svg/>");
        let url = data_url(&path).unwrap();
        assert!(url.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_data_url_unknown_extension_fallback() {
        let bytes: Vec<u8> = (0u8..10).collect();
        let (_dir, path) = write_fixture("a.bin", &bytes);

        let url = data_url(&path).unwrap();
        let payload = url
            .strip_prefix("data:application/octet-stream;base64,")
            .unwrap();
        assert_eq!(BASE64.decode(payload).unwrap(), bytes);
    }

    #[test]
    fn test_data_url_missing_file() {
        let err = data_url(Path::new("/no/such/file.png")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_data_url_no_line_wrapping() {
        // 4 KiB of content is enough to trip any line-wrapping encoder.
        let bytes = vec![0xABu8; 4096];
        let (_dir, path) = write_fixture("big.bin", &bytes);

        let url = data_url(&path).unwrap();
        assert!(!url.contains('\n'));
        assert!(!url.contains('\r'));
    }
}
