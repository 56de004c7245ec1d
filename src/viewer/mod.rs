//! Viewer page rendering.
//!
//! Produces one self-contained HTML document embedding the image as a data
//! URL (viewable without the local server running) plus a display block per
//! URL form with a copy-to-clipboard button.
//!
//! Copy buttons carry the full URL in a `data-copy` attribute read back by
//! one event listener, so every interpolated value lands in an attribute or
//! element context and HTML-entity escaping covers all of them. Nothing is
//! spliced into a script string literal.

mod template;

use crate::error::Result;
use crate::urls::UrlSet;
use crate::utils::{html, path::normalize_path};
use std::{
    fs,
    path::{Path, PathBuf},
};
use template::{Template, TemplateVars};

/// Viewer page template, embedded at compile time.
const VIEWER_HTML: Template = Template::new(include_str!("viewer.html"));

/// Characters of the data URL shown before the ellipsis.
const DATA_URL_DISPLAY_LEN: usize = 100;

/// Variables for viewer.html.
struct ViewerVars<'a> {
    image_name: &'a str,
    urls: &'a UrlSet,
}

impl TemplateVars for ViewerVars<'_> {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__IMAGE_NAME__", &html::escape(self.image_name))
            .replace("__DATA_URL_FULL__", &html::escape_attr(&self.urls.data_url))
            .replace(
                "__DATA_URL_DISPLAY__",
                &html::escape(&display_prefix(&self.urls.data_url)),
            )
            .replace("__FILE_URL__", &html::escape_attr(&self.urls.file_url))
            .replace("__WEB_URL__", &html::escape_attr(&self.urls.web_url))
    }
}

/// Display form of a data URL: its first 100 characters plus an ellipsis.
///
/// Only the visible text is truncated; the copy action always receives the
/// full string.
pub fn display_prefix(url: &str) -> String {
    match url.char_indices().nth(DATA_URL_DISPLAY_LEN) {
        Some((idx, _)) => format!("{}...", &url[..idx]),
        None => url.to_string(),
    }
}

/// Render the viewer document for an image named `image_name`.
pub fn render(image_name: &str, urls: &UrlSet) -> String {
    VIEWER_HTML.render(&ViewerVars { image_name, urls })
}

/// Render the viewer for `image_path` and write it to `output`.
///
/// Returns the absolute path of the written file.
pub fn write_viewer(image_path: &Path, urls: &UrlSet, output: &Path) -> Result<PathBuf> {
    let name = image_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image");
    fs::write(output, render(name, urls))?;
    Ok(normalize_path(output))
}
