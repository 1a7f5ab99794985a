//! Recommend command implementation for the Monastery360 CLI.

use std::io::Write;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use monastery_planner::{DEFAULT_RECOMMENDATION_LIMIT, Ranker, Recommendation, TravelPlanner};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::sources::open_dataset;
use crate::{ARG_DATASET, ARG_LIMIT, ARG_SEED, CliError, ENV_RECOMMEND_DATASET, write_json};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Rank the monasteries in a dataset by rating, review count \
                 and description markers, then print the top entries with \
                 a reason, travel tip, best time and visit duration.",
    about = "Print travel recommendations for a dataset"
)]
#[ortho_config(prefix = "MONASTERY360")]
pub(crate) struct RecommendArgs {
    /// Path to the dataset JSON file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Number of recommendations to print.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Seed for the tip, season and duration picks.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the dataset JSON file.
    pub(crate) dataset: Utf8PathBuf,
    /// Maximum number of recommendations.
    pub(crate) limit: usize,
    /// Optional seed; entropy is used when absent.
    pub(crate) seed: Option<u64>,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_RECOMMEND_DATASET,
        })?;
        Ok(Self {
            dataset,
            limit: args.limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT),
            seed: args.seed,
        })
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let recommendations = execute_recommend(&config)?;
    write_json(writer, &recommendations)
}

/// Load the dataset and produce decorated recommendations.
pub(crate) fn execute_recommend(config: &RecommendConfig) -> Result<Vec<Recommendation>, CliError> {
    let catalog = open_dataset(&config.dataset, ARG_DATASET)?;
    let planner = TravelPlanner::new(Ranker::standard().with_limit(config.limit), Duration::ZERO);
    let recommendations = match config.seed {
        Some(seed) => planner.recommend(&catalog.monasteries, &mut StdRng::seed_from_u64(seed)),
        None => planner.recommend(&catalog.monasteries, &mut rand::thread_rng()),
    };
    info!(
        "recommended {} of {} monasteries from {}",
        recommendations.len(),
        catalog.monasteries.len(),
        config.dataset
    );
    Ok(recommendations)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
