//! Recommend command implementation for the Giftwise CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use giftwise_catalog::http::{DEFAULT_CATALOG_URL, HttpCatalogProvider};
use giftwise_catalog::{CatalogProvider, JsonFileCatalog};
use giftwise_core::{Preferences, Recommendation};
use giftwise_fs::open_utf8_file;
use giftwise_scorer::{Recommender, Vocabulary};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::{
    ARG_CATALOG, ARG_CATALOG_URL, ARG_PAGE, ARG_PAGE_SIZE, ARG_PREFERENCES, ARG_VOCABULARY,
    CliError, ENV_PREFERENCES,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a product catalog for one shopper and print a page of \
                 recommendations as JSON. The catalog is read from a JSON \
                 file or fetched from a Fake Store style endpoint; every \
                 option can also come from configuration files or \
                 GIFTWISE_* environment variables.",
    about = "Recommend gifts for a shopper"
)]
#[ortho_config(prefix = "GIFTWISE")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing the shopper's preferences.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) preferences_path: Option<Utf8PathBuf>,
    /// Read the catalog from a JSON file instead of the network.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Fetch the catalog from this URL (defaults to the Fake Store API).
    #[arg(long = ARG_CATALOG_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) catalog_url: Option<String>,
    /// Replace the built-in keyword tables with a JSON vocabulary file.
    #[arg(long = ARG_VOCABULARY, value_name = "path")]
    #[serde(default)]
    pub(crate) vocabulary: Option<Utf8PathBuf>,
    /// Page to print, 1-based. Overrides the preferences document.
    #[arg(long = ARG_PAGE, value_name = "n", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) page: Option<i64>,
    /// Recommendations per page. Overrides the preferences document.
    #[arg(long = ARG_PAGE_SIZE, value_name = "n", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) page_size: Option<i64>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogSource {
    /// A JSON array of products on disk.
    File(Utf8PathBuf),
    /// A Fake Store style HTTP endpoint.
    Http(String),
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) preferences_path: Utf8PathBuf,
    pub(crate) catalog: CatalogSource,
    pub(crate) vocabulary: Option<Utf8PathBuf>,
    pub(crate) page: Option<i64>,
    pub(crate) page_size: Option<i64>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.preferences_path, ARG_PREFERENCES)?;
        if let CatalogSource::File(path) = &self.catalog {
            Self::require_existing(path, ARG_CATALOG)?;
        }
        if let Some(path) = &self.vocabulary {
            Self::require_existing(path, ARG_VOCABULARY)?;
        }
        Ok(())
    }

    /// Apply command-line paging on top of the preferences document.
    pub(crate) fn apply_paging(&self, mut preferences: Preferences) -> Preferences {
        if let Some(page) = self.page {
            preferences.page = Some(page);
        }
        if let Some(page_size) = self.page_size {
            preferences.page_size = Some(page_size);
        }
        preferences
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match giftwise_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let preferences_path = args.preferences_path.ok_or(CliError::MissingArgument {
            field: ARG_PREFERENCES,
            env: ENV_PREFERENCES,
        })?;
        let catalog = match (args.catalog, args.catalog_url) {
            (Some(_), Some(_)) => return Err(CliError::ConflictingCatalogSources),
            (Some(path), None) => CatalogSource::File(path),
            (None, Some(url)) => CatalogSource::Http(url),
            (None, None) => CatalogSource::Http(DEFAULT_CATALOG_URL.to_owned()),
        };
        Ok(Self {
            preferences_path,
            catalog,
            vocabulary: args.vocabulary,
            page: args.page,
            page_size: args.page_size,
        })
    }
}

/// Builds the catalog provider for the current recommend invocation.
pub(super) trait CatalogProviderBuilder {
    fn build(&self, source: &CatalogSource) -> Result<Box<dyn CatalogProvider>, CliError>;
}

pub(super) struct DefaultCatalogProviderBuilder;

impl CatalogProviderBuilder for DefaultCatalogProviderBuilder {
    fn build(&self, source: &CatalogSource) -> Result<Box<dyn CatalogProvider>, CliError> {
        match source {
            CatalogSource::File(path) => Ok(Box::new(JsonFileCatalog::new(path.clone()))),
            CatalogSource::Http(url) => {
                let provider = HttpCatalogProvider::new(url.clone()).map_err(|source| {
                    CliError::BuildCatalogProvider {
                        url: url.clone(),
                        source,
                    }
                })?;
                Ok(Box::new(provider))
            }
        }
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultCatalogProviderBuilder;
    run_recommend_with(args, &builder, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn CatalogProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let recommendations = execute_recommend(args, builder)?;
    write_recommendations(writer, &recommendations)
}

fn execute_recommend(
    args: RecommendArgs,
    builder: &dyn CatalogProviderBuilder,
) -> Result<Vec<Recommendation>, CliError> {
    let config = resolve_recommend_config(args)?;
    let preferences = config.apply_paging(load_preferences(&config.preferences_path)?);
    let recommender = match &config.vocabulary {
        Some(path) => Recommender::new(Vocabulary::load(path)?),
        None => Recommender::default(),
    };
    let provider = builder.build(&config.catalog)?;
    let catalog = provider.fetch()?;
    log::info!("fetched {} products", catalog.len());
    recommender.prime(catalog);
    Ok(recommender.recommend(&preferences)?)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Preferences arrive either bare or wrapped in a `preferences` member.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PreferencesDocument {
    Wrapped { preferences: Preferences },
    Bare(Preferences),
}

/// Loads JSON-encoded [`Preferences`] from disk.
pub(super) fn load_preferences(path: &Utf8Path) -> Result<Preferences, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPreferences {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let document: PreferencesDocument =
        serde_json::from_reader(reader).map_err(|source| CliError::ParsePreferences {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(match document {
        PreferencesDocument::Wrapped { preferences } | PreferencesDocument::Bare(preferences) => {
            preferences
        }
    })
}

fn write_recommendations(
    writer: &mut dyn Write,
    recommendations: &[Recommendation],
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(recommendations)
        .map_err(CliError::SerialiseRecommendations)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
