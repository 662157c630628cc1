//! Error types raised while loading keyword vocabularies.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading, parsing or validating a vocabulary file.
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// Reading the vocabulary file failed.
    #[error("failed to read vocabulary file at {path}")]
    Read {
        /// Requested vocabulary path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The vocabulary file was not valid JSON for the expected shape.
    #[error("failed to parse vocabulary file at {path}")]
    Parse {
        /// Requested vocabulary path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A keyword list contained an unusable entry.
    #[error("vocabulary section `{section}` contains an empty keyword")]
    Malformed {
        /// Dotted name of the offending section, e.g. `indicators.tech`.
        section: &'static str,
    },
    /// A reload was requested but the engine was built without a file.
    #[error("no vocabulary file is configured to reload from")]
    NoSource,
}
