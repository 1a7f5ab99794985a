//! Focused unit tests covering search CLI configuration and output.

use super::helpers::{DatasetWorkspace, output_json};
use super::*;
use crate::search::{SearchArgs, SearchConfig, config_from_layers_for_test, run_search_with};
use camino::Utf8PathBuf;
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::json;

fn search(workspace: &DatasetWorkspace, query: &str) -> serde_json::Value {
    let args = SearchArgs {
        dataset: Some(workspace.dataset().to_path_buf()),
        query: Some(query.to_owned()),
    };
    let mut buffer = Vec::new();
    run_search_with(args, &mut buffer).expect("search succeeds");
    output_json(&buffer)
}

#[rstest]
#[case(None, Some("rumtek"), ARG_DATASET, ENV_SEARCH_DATASET)]
#[case(Some("dataset.json"), None, ARG_QUERY, ENV_SEARCH_QUERY)]
fn converting_without_required_fields_errors(
    #[case] dataset: Option<&str>,
    #[case] query: Option<&str>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = SearchArgs {
        dataset: dataset.map(Utf8PathBuf::from),
        query: query.map(str::to_owned),
    };
    let err = SearchConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn query_can_come_from_environment_layer() {
    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "dataset": "file.json", "query": "from file" }), None);
    composer.push_environment(json!({ "query": "from env" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.dataset, Utf8PathBuf::from("file.json"));
    assert_eq!(config.query, "from env");
}

#[rstest]
fn matches_span_every_record_kind() {
    let workspace = DatasetWorkspace::new();
    let value = search(&workspace, "GANGTOK");
    assert_eq!(value["query"], "GANGTOK");
    assert_eq!(value["total"], 3);
    assert_eq!(value["monasteries"][0]["id"], 1);
    assert_eq!(value["events"][0]["name"], "Losar Festival");
    assert_eq!(value["packages"][0]["name"], "Monastery Circuit");
}

#[rstest]
#[case("rumtek", 1)]
#[case("  ", 5)]
#[case("zanskar", 0)]
fn totals_follow_the_query(#[case] query: &str, #[case] expected: u64) {
    let workspace = DatasetWorkspace::new();
    assert_eq!(search(&workspace, query)["total"], expected);
}
