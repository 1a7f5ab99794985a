//! Command-line interface for the Monastery360 engine.
//!
//! Every subcommand prints JSON on stdout. Options merge from configuration
//! files, `MONASTERY360_*` environment variables and CLI flags, with flags
//! taking precedence.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod layout;
mod recommend;
mod search;
mod sources;

pub use error::CliError;

use layout::{LayoutArgs, run_layout_with};
use recommend::{RecommendArgs, run_recommend_with};
use search::{SearchArgs, run_search_with};

pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_QUERY: &str = "query";
pub(crate) const ARG_WIDTH: &str = "width";
pub(crate) const ARG_ROUTES: &str = "routes";
pub(crate) const ARG_INDEX: &str = "index";
pub(crate) const ENV_RECOMMEND_DATASET: &str = "MONASTERY360_CMDS_RECOMMEND_DATASET";
pub(crate) const ENV_SEARCH_DATASET: &str = "MONASTERY360_CMDS_SEARCH_DATASET";
pub(crate) const ENV_SEARCH_QUERY: &str = "MONASTERY360_CMDS_SEARCH_QUERY";
pub(crate) const ENV_LAYOUT_WIDTH: &str = "MONASTERY360_CMDS_LAYOUT_WIDTH";
pub(crate) const ENV_LAYOUT_ROUTES: &str = "MONASTERY360_CMDS_LAYOUT_ROUTES";

/// Run the Monastery360 CLI with the current process arguments and
/// environment.
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, configuration cannot
/// be resolved or the selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => run_recommend_with(args, writer),
        Command::Search(args) => run_search_with(args, writer),
        Command::Layout(args) => run_layout_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "monastery360",
    about = "Explore the Monastery360 catalogue from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank monasteries from a dataset and print travel recommendations.
    Recommend(RecommendArgs),
    /// Search monasteries, events and packages in a dataset.
    Search(SearchArgs),
    /// Compute the tab bar layout for a route list and width.
    Layout(LayoutArgs),
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
