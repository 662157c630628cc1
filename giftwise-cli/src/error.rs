//! Error types emitted by the Giftwise CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use giftwise_catalog::CatalogError;
use giftwise_catalog::http::ProviderBuildError;
use giftwise_core::RecommendError;
use giftwise_scorer::VocabularyError;
use thiserror::Error;

/// Errors emitted by the Giftwise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Both a catalog file and a catalog URL were configured.
    #[error("--catalog and --catalog-url cannot be used together")]
    ConflictingCatalogSources,
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the preferences file failed.
    #[error("failed to open preferences at {path:?}: {source}")]
    OpenPreferences {
        /// Preferences path.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Preferences JSON could not be decoded.
    #[error("failed to parse preferences JSON at {path:?}: {source}")]
    ParsePreferences {
        /// Preferences path.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: serde_json::Error,
    },
    /// The vocabulary file named on the command line could not be loaded.
    #[error(transparent)]
    LoadVocabulary(#[from] VocabularyError),
    /// Constructing the HTTP catalog provider failed.
    #[error("failed to build catalog provider for {url:?}: {source}")]
    BuildCatalogProvider {
        /// Catalog endpoint.
        url: String,
        /// Underlying failure.
        #[source]
        source: ProviderBuildError,
    },
    /// Fetching the catalog failed.
    #[error(transparent)]
    FetchCatalog(#[from] CatalogError),
    /// The engine could not produce recommendations.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
    /// Serialising the recommendations failed.
    #[error("failed to serialise recommendations: {0}")]
    SerialiseRecommendations(#[source] serde_json::Error),
    /// Writing the recommendations failed.
    #[error("failed to write recommendations: {0}")]
    WriteOutput(#[source] std::io::Error),
}
