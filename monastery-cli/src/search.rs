//! Search command implementation for the Monastery360 CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use monastery_core::SearchResults;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::sources::open_dataset;
use crate::{
    ARG_DATASET, ARG_QUERY, CliError, ENV_SEARCH_DATASET, ENV_SEARCH_QUERY, write_json,
};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "search",
    long_about = "Match a case-insensitive query against the text of every \
                 monastery, event and travel package in a dataset. Matches \
                 are listed in dataset order.",
    about = "Search a dataset"
)]
#[ortho_config(prefix = "MONASTERY360")]
pub(crate) struct SearchArgs {
    /// Path to the dataset JSON file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Text to look for; blank matches every record.
    #[arg(long = ARG_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) query: String,
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_SEARCH_DATASET,
        })?;
        let query = args.query.ok_or(CliError::MissingArgument {
            field: ARG_QUERY,
            env: ENV_SEARCH_QUERY,
        })?;
        Ok(Self { dataset, query })
    }
}

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    query: &'a str,
    total: usize,
    #[serde(flatten)]
    results: SearchResults<'a>,
}

pub(crate) fn run_search_with(args: SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let catalog = open_dataset(&config.dataset, ARG_DATASET)?;
    let results = catalog.search(&config.query);
    info!(
        "{} records match {:?} in {}",
        results.len(),
        config.query,
        config.dataset
    );
    let report = SearchReport {
        query: &config.query,
        total: results.len(),
        results,
    };
    write_json(writer, &report)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SearchConfig, CliError> {
    let merged = SearchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SearchConfig::try_from(merged)
}
