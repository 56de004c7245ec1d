//! Error types for the URL formatters, server adapter, and viewer.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the core operations.
///
/// Every variant is fatal to the operation that produced it; there is no
/// retry or partial-result policy. The CLI layer wraps these in `anyhow`
/// context before printing.
#[derive(Debug, Error)]
pub enum Error {
    /// Source file missing where a read is required.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The listener could not bind the requested address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// `start` was called while the server is already running.
    #[error("server already running at {0}")]
    AlreadyRunning(String),

    /// Reading image bytes or writing an output file failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The base URL could not be parsed or joined.
    #[error("invalid base URL `{url}`: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
