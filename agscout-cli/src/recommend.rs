//! Recommend command implementation for the agscout CLI.

use std::io::{BufReader, Write};

use agscout_catalog::{DEFAULT_CATALOG_PATH, load_catalog};
use agscout_core::{Query, RecommendRequest, RecommendResponse};
use agscout_fs::open_utf8_file;
use agscout_ranker::rank;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOG, ARG_CITY_FILTER, ARG_FOCUS_FILTER, ARG_QUERY, ARG_REQUEST, CliError, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the startup catalog against a query. The query comes \
                 either from the --query and filter flags or from a JSON \
                 file holding a RecommendRequest, never both. Query and \
                 filter values from AGSCOUT_* variables or a configuration \
                 file count as inline sources too. Filters match focus and \
                 city case-insensitively; \"All\" disables a filter.",
    about = "Recommend startups for a query"
)]
#[ortho_config(prefix = "AGSCOUT")]
pub(crate) struct RecommendArgs {
    /// Free-text query; omit to match every startup equally.
    #[arg(long = ARG_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Only keep startups with this focus.
    #[arg(long = ARG_FOCUS_FILTER, value_name = "focus")]
    #[serde(default)]
    pub(crate) focus_filter: Option<String>,
    /// Only keep startups in this city.
    #[arg(long = ARG_CITY_FILTER, value_name = "city")]
    #[serde(default)]
    pub(crate) city_filter: Option<String>,
    /// Path to a JSON file containing a RecommendRequest.
    ///
    /// Rejected when a query or filter is set by any layer (flag,
    /// environment or configuration file).
    #[arg(long = ARG_REQUEST, value_name = "path")]
    #[serde(default)]
    pub(crate) request: Option<Utf8PathBuf>,
    /// Path to the catalog JSON file.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Where the recommend request comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RequestSource {
    /// Built from command-line, environment or file configuration.
    Inline(RecommendRequest),
    /// Read from a JSON file.
    File(Utf8PathBuf),
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) source: RequestSource,
    pub(crate) catalog: Utf8PathBuf,
}

/// Runs on the merged layers, so a query or filter from the environment or a
/// configuration file conflicts with a request file just as a flag does.
impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let catalog = args
            .catalog
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG_PATH));
        let source = match args.request {
            Some(path) => {
                let inline = [
                    (ARG_QUERY, args.query.is_some()),
                    (ARG_FOCUS_FILTER, args.focus_filter.is_some()),
                    (ARG_CITY_FILTER, args.city_filter.is_some()),
                ];
                if let Some((field, _)) = inline.into_iter().find(|(_, set)| *set) {
                    return Err(CliError::ConflictingRequestSources {
                        request: ARG_REQUEST,
                        field,
                    });
                }
                RequestSource::File(path)
            }
            None => RequestSource::Inline(RecommendRequest {
                query: args.query.unwrap_or_default(),
                focus_filter: args.focus_filter,
                city_filter: args.city_filter,
            }),
        };
        Ok(Self { source, catalog })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let response = execute_recommend(&config)?;
    write_json(writer, &response)
}

pub(crate) fn execute_recommend(config: &RecommendConfig) -> Result<RecommendResponse, CliError> {
    let request = match &config.source {
        RequestSource::Inline(request) => request.clone(),
        RequestSource::File(path) => load_recommend_request(path)?,
    };
    let catalog = load_catalog(&config.catalog)?;
    let query = Query::from(request);
    let results = rank(catalog.entries(), &query);
    debug!(
        "recommend returned {} of {} startups",
        results.len(),
        catalog.len()
    );
    Ok(RecommendResponse::from(results))
}

/// Loads a JSON-encoded [`RecommendRequest`] from disk.
pub(crate) fn load_recommend_request(path: &Utf8Path) -> Result<RecommendRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
