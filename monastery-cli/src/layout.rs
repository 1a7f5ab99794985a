//! Layout command implementation for the Monastery360 CLI.
//!
//! Routes are given as a comma-separated list of `name` or `name:group`
//! entries, for example `home:left,map:left,ar:center,alerts:right`.
//! Entries without a group, or with an unknown one, land in the left group.

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use log::info;
use monastery_tabbar::{
    EventBus, LayoutPlan, NavigationState, TabBar, TabBarFrame, TabBarMetrics, TabRoute,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_INDEX, ARG_ROUTES, ARG_WIDTH, CliError, ENV_LAYOUT_ROUTES, ENV_LAYOUT_WIDTH, write_json,
};

/// CLI arguments for the `layout` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "layout",
    long_about = "Partition routes into left, center and right groups, size \
                 them for the given bar width and report where the focus \
                 indicator rests.",
    about = "Compute a tab bar layout"
)]
#[ortho_config(prefix = "MONASTERY360")]
pub(crate) struct LayoutArgs {
    /// Outer width of the tab bar in pixels.
    #[arg(long = ARG_WIDTH, value_name = "px")]
    #[serde(default)]
    pub(crate) width: Option<f32>,
    /// Comma-separated `name:group` entries in navigation order.
    #[arg(long = ARG_ROUTES, value_name = "list")]
    #[serde(default)]
    pub(crate) routes: Option<String>,
    /// Index of the focused route; clamped to the route list.
    #[arg(long = ARG_INDEX, value_name = "n")]
    #[serde(default)]
    pub(crate) index: Option<usize>,
}

impl LayoutArgs {
    pub(crate) fn into_config(self) -> Result<LayoutConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        LayoutConfig::try_from(merged)
    }
}

/// Resolved `layout` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LayoutConfig {
    pub(crate) width: f32,
    pub(crate) routes: Vec<TabRoute>,
    pub(crate) index: usize,
}

impl TryFrom<LayoutArgs> for LayoutConfig {
    type Error = CliError;

    fn try_from(args: LayoutArgs) -> Result<Self, Self::Error> {
        let width = args.width.ok_or(CliError::MissingArgument {
            field: ARG_WIDTH,
            env: ENV_LAYOUT_WIDTH,
        })?;
        if !width.is_finite() || width < 0.0 {
            return Err(CliError::InvalidWidth { value: width });
        }
        let raw_routes = args.routes.ok_or(CliError::MissingArgument {
            field: ARG_ROUTES,
            env: ENV_LAYOUT_ROUTES,
        })?;
        Ok(Self {
            width,
            routes: parse_routes(&raw_routes)?,
            index: args.index.unwrap_or_default(),
        })
    }
}

/// Parse `name[:group]` entries separated by commas. Blank entries are
/// skipped.
pub(crate) fn parse_routes(raw: &str) -> Result<Vec<TabRoute>, CliError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (name, group) = match entry.split_once(':') {
                Some((name, group)) => (name.trim(), Some(group.trim())),
                None => (entry, None),
            };
            if name.is_empty() {
                return Err(CliError::InvalidRoute {
                    entry: entry.to_owned(),
                });
            }
            Ok(TabRoute::tagged(name, group))
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct LayoutReport<'a> {
    container_width: f32,
    focused: Option<&'a str>,
    indicator: TabBarFrame,
    plan: &'a LayoutPlan,
}

pub(crate) fn run_layout_with(args: LayoutArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let bus = EventBus::new();
    let mut bar = TabBar::new(TabBarMetrics::default(), &bus);
    bar.on_navigation(NavigationState::new(config.routes, config.index));
    bar.on_layout(config.width);
    let indicator = bar.advance(Duration::ZERO);
    info!(
        "laid out {} routes in {} groups at {}px",
        bar.navigation().routes().len(),
        bar.plan().groups.len(),
        config.width
    );
    let report = LayoutReport {
        container_width: config.width,
        focused: bar.navigation().focused().map(|route| route.name.as_str()),
        indicator,
        plan: bar.plan(),
    };
    write_json(writer, &report)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<LayoutConfig, CliError> {
    let merged = LayoutArgs::merge_from_layers(layers).map_err(CliError::from)?;
    LayoutConfig::try_from(merged)
}
