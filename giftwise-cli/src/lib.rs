//! Command-line interface for the Giftwise recommendation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;
use recommend::{RecommendArgs, run_recommend};

const ARG_PREFERENCES: &str = "preferences";
const ARG_CATALOG: &str = "catalog";
const ARG_CATALOG_URL: &str = "catalog-url";
const ARG_VOCABULARY: &str = "vocabulary";
const ARG_PAGE: &str = "page";
const ARG_PAGE_SIZE: &str = "page-size";
const ENV_PREFERENCES: &str = "GIFTWISE_CMDS_RECOMMEND_PREFERENCES_PATH";

/// Run the Giftwise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments, configuration, inputs or the
/// recommendation itself fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "giftwise",
    about = "Personalised gift recommendations from a product catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a catalog for a shopper and print one page of recommendations.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
