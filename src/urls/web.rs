//! Web URL formatting against a server base URL.

use crate::error::{Error, Result};
use crate::utils::path::relative_to;
use std::path::{Component, Path, PathBuf};
use url::Url;

/// Format the HTTP URL under which `path` would be served.
///
/// With a `webroot`, the URL path is `path` relative to that root (ascending
/// `..` segments are resolved by URL-join, not guarded against). Without
/// one, only the file name survives; any directory component is discarded.
/// No existence check.
pub fn web_url(path: &Path, base_url: &str, webroot: Option<&Path>) -> Result<String> {
    let rel = match webroot {
        Some(root) => relative_to(path, root),
        None => path.file_name().map_or_else(PathBuf::new, PathBuf::from),
    };

    let mut base = Url::parse(base_url).map_err(|source| Error::BaseUrl {
        url: base_url.to_string(),
        source,
    })?;

    // A base without a trailing slash would drop its last path segment on
    // join.
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }

    let joined = base
        .join(&rel_url_path(&rel))
        .map_err(|source| Error::BaseUrl {
            url: base_url.to_string(),
            source,
        })?;
    Ok(joined.into())
}

/// Render a relative path as a URL reference with `/` separators.
fn rel_url_path(rel: &Path) -> String {
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(s) => parts.push(s.to_string_lossy().into_owned()),
            Component::ParentDir => parts.push("..".to_string()),
            _ => {}
        }
    }
    parts.join("/")
}
