//! Errors raised while obtaining a catalog.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by [`CatalogProvider`](crate::CatalogProvider)
/// implementations.
///
/// Variants carry rendered messages rather than source errors so the type
/// stays `Clone` and comparable in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Reading a catalog file failed.
    #[error("failed to read catalog file {path}: {message}")]
    Read {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Description of the I/O failure.
        message: String,
    },
    /// The catalog payload was not a JSON array of products.
    #[error("failed to parse catalog from {origin}: {message}")]
    Parse {
        /// File path or URL the payload came from.
        origin: String,
        /// Description of the decoding failure.
        message: String,
    },
    /// The catalog request timed out.
    #[error("catalog request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The catalog service answered with an error status.
    #[error("catalog request to {url} failed with HTTP {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Description of the failure.
        message: String,
    },
    /// The catalog service could not be reached.
    #[error("catalog request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Description of the failure.
        message: String,
    },
}
