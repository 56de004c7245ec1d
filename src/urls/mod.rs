//! URL formatters: `file://`, `data:`, and `http://` representations.

mod data;
mod file;
mod web;

pub use data::data_url;
pub use file::file_url;
pub use web::web_url;

use crate::error::Result;
use std::path::Path;

/// The three URL representations of one image, produced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSet {
    pub file_url: String,
    pub data_url: String,
    pub web_url: String,
}

/// Generate all three URL forms for `path`.
///
/// Fails with [`crate::error::Error::NotFound`] when `path` does not exist,
/// because the data URL requires reading the file. Callers that can live
/// with partial results call the individual formatters instead.
pub fn generate_all(path: &Path, base_url: &str) -> Result<UrlSet> {
    Ok(UrlSet {
        file_url: file_url(path),
        data_url: data_url(path)?,
        web_url: web_url(path, base_url, None)?,
    })
}
