//! Request URL to filesystem path resolution.

use std::path::{Path, PathBuf};

/// Resolve a request URL to a file under `root`.
///
/// Strips the query string, percent-decodes, and rejects anything that
/// would escape `root`: raw `..` segments early, symlink escapes via the
/// canonicalize-prefix check. Directories fall back to their `index.html`.
pub fn resolve(url: &str, root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);

    if clean.contains("..") {
        return None;
    }

    let local = root.join(&clean);

    let canonical = local.canonicalize().ok()?;
    let root_canonical = root.canonicalize().ok()?;
    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    if canonical.is_file() {
        return Some(canonical);
    }

    if canonical.is_dir() {
        let index = canonical.join("index.html");
        if index.is_file() {
            return Some(index);
        }
    }

    None
}

/// Normalize a request URL: strip query/fragment, decode, trim slashes.
///
/// The query is split off before decoding so an encoded `%3F` in a file
/// name is not mistaken for a query separator.
fn normalize_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    percent_encoding::percent_decode_str(path)
        .decode_utf8()
        .map(|s| s.trim_matches('/').to_string())
        .unwrap_or_default()
}
