//! Focused unit tests covering recommend configuration, request loading and
//! output.

use super::helpers::{Workspace, result_ids, stdout_json, write_utf8};
use super::*;
use crate::recommend::{
    RecommendConfig, RequestSource, config_from_layers_for_test, execute_recommend,
    load_recommend_request, run_recommend_with,
};
use agscout_catalog::DEFAULT_CATALOG_PATH;
use agscout_core::RecommendRequest;
use camino::Utf8PathBuf;
use rstest::rstest;

#[rstest]
fn converting_empty_args_uses_defaults() {
    let config = RecommendConfig::try_from(RecommendArgs::default()).expect("config should build");
    assert_eq!(config.catalog, Utf8PathBuf::from(DEFAULT_CATALOG_PATH));
    assert_eq!(
        config.source,
        RequestSource::Inline(RecommendRequest::default())
    );
}

#[rstest]
fn converting_inline_flags_builds_request() {
    let args = RecommendArgs {
        query: Some("pest".to_owned()),
        focus_filter: Some("Biologicals".to_owned()),
        city_filter: Some("All".to_owned()),
        ..RecommendArgs::default()
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(
        config.source,
        RequestSource::Inline(RecommendRequest {
            query: "pest".to_owned(),
            focus_filter: Some("Biologicals".to_owned()),
            city_filter: Some("All".to_owned()),
        })
    );
}

#[rstest]
#[case::query(Some("pest"), None, None, ARG_QUERY)]
#[case::focus(None, Some("Biologicals"), None, ARG_FOCUS_FILTER)]
#[case::city(None, None, Some("Woodland"), ARG_CITY_FILTER)]
fn request_file_conflicts_with_inline_options(
    #[case] query: Option<&str>,
    #[case] focus: Option<&str>,
    #[case] city: Option<&str>,
    #[case] expected_field: &'static str,
) {
    let args = RecommendArgs {
        query: query.map(str::to_owned),
        focus_filter: focus.map(str::to_owned),
        city_filter: city.map(str::to_owned),
        request: Some(Utf8PathBuf::from("request.json")),
        ..RecommendArgs::default()
    };
    let err = RecommendConfig::try_from(args).expect_err("conflicting sources should error");
    match err {
        CliError::ConflictingRequestSources { request, field } => {
            assert_eq!(request, ARG_REQUEST);
            assert_eq!(field, expected_field);
        }
        other => panic!("expected ConflictingRequestSources, found {other:?}"),
    }
}

#[rstest]
fn environment_query_conflicts_with_cli_request_file() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_environment(json!({ "query": "seed" }));
    composer.push_cli(json!({ "request": "request.json" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("layered query should conflict with a request file");
    match err {
        CliError::ConflictingRequestSources { field, .. } => assert_eq!(field, ARG_QUERY),
        other => panic!("expected ConflictingRequestSources, found {other:?}"),
    }
}

#[rstest]
fn request_file_alone_resolves_to_file_source() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "catalog": "from-file/startups.json" }), None);
    composer.push_cli(json!({ "request": "request.json" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(
        config.source,
        RequestSource::File(Utf8PathBuf::from("request.json"))
    );
    assert_eq!(config.catalog, Utf8PathBuf::from("from-file/startups.json"));
}

#[rstest]
fn load_request_decodes_json() {
    let workspace = Workspace::new();
    let path = workspace.request_path();
    write_utf8(&path, br#"{"query": "seed", "city_filter": "Woodland"}"#);

    let request = load_recommend_request(&path).expect("request should decode");
    assert_eq!(
        request,
        RecommendRequest {
            query: "seed".to_owned(),
            focus_filter: None,
            city_filter: Some("Woodland".to_owned()),
        }
    );
}

#[rstest]
#[case::invalid_json(b"{ not valid json".as_slice())]
#[case::missing_query(br#"{"focus_filter": "All"}"#.as_slice())]
fn load_request_rejects_bad_payloads(#[case] payload: &[u8]) {
    let workspace = Workspace::new();
    let path = workspace.request_path();
    write_utf8(&path, payload);

    let err = load_recommend_request(&path).expect_err("bad payload should error");
    match err {
        CliError::ParseRequest { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseRequest, found {other:?}"),
    }
}

#[rstest]
fn load_request_io_error_returns_open_error() {
    let workspace = Workspace::new();
    let path = workspace.request_path();

    let err = load_recommend_request(&path).expect_err("missing request should error");
    match err {
        CliError::OpenRequest { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OpenRequest, found {other:?}"),
    }
}

#[rstest]
fn execute_ranks_the_catalog() {
    let workspace = Workspace::new();
    let config = RecommendConfig {
        source: RequestSource::Inline(RecommendRequest {
            query: "seed".to_owned(),
            ..RecommendRequest::default()
        }),
        catalog: workspace.write_seed_catalog(),
    };

    let response = execute_recommend(&config).expect("recommend should succeed");
    let ids: Vec<&str> = response
        .results
        .iter()
        .map(|result| result.entry().id())
        .collect();
    assert_eq!(ids, ["s8", "s6", "s2"]);
}

#[rstest]
fn execute_with_missing_catalog_returns_no_results() {
    let workspace = Workspace::new();
    let config = RecommendConfig {
        source: RequestSource::Inline(RecommendRequest::default()),
        catalog: workspace.catalog_path(),
    };
    let response = execute_recommend(&config).expect("missing catalog is empty");
    assert!(response.results.is_empty());
}

#[rstest]
fn execute_surfaces_catalog_errors() {
    let workspace = Workspace::new();
    let catalog = workspace.catalog_path();
    write_utf8(&catalog, b"{}");
    let config = RecommendConfig {
        source: RequestSource::Inline(RecommendRequest::default()),
        catalog,
    };
    let err = execute_recommend(&config).expect_err("object is not a catalog");
    assert!(matches!(err, CliError::LoadCatalog(_)), "got {err:?}");
}

#[rstest]
fn run_writes_pretty_json_with_scores() {
    let workspace = Workspace::new();
    let args = RecommendArgs {
        query: Some("pest".to_owned()),
        city_filter: Some("Woodland".to_owned()),
        catalog: Some(workspace.write_seed_catalog()),
        ..RecommendArgs::default()
    };
    let mut stdout = Vec::new();
    run_recommend_with(args, &mut stdout).expect("recommend should succeed");

    assert!(stdout.ends_with(b"\n"));
    let response = stdout_json(&stdout);
    assert_eq!(result_ids(&response), ["s7"]);
    assert_eq!(response["results"][0]["match_score"], 3);
    assert_eq!(response["results"][0]["name"], "AgBiTech");
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "query": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": "from-file/startups.json",
            "query": "from file",
            "focus_filter": "Biologicals",
        }),
        None,
    );
    composer.push_environment(json!({
        "catalog": "from-env/startups.json",
        "city_filter": "Davis",
    }));
    composer.push_cli(json!({ "query": "pest" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.catalog, Utf8PathBuf::from("from-env/startups.json"));
    assert_eq!(
        config.source,
        RequestSource::Inline(RecommendRequest {
            query: "pest".to_owned(),
            focus_filter: Some("Biologicals".to_owned()),
            city_filter: Some("Davis".to_owned()),
        })
    );
}
