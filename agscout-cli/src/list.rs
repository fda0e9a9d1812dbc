//! List command implementation for the agscout CLI.

use std::io::Write;

use agscout_catalog::{DEFAULT_CATALOG_PATH, load_catalog};
use agscout_core::CatalogListing;
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_CATALOG, CliError, write_json};

/// CLI arguments for the `list` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List every startup in the catalog")]
#[ortho_config(prefix = "AGSCOUT")]
pub(crate) struct ListArgs {
    /// Path to the catalog JSON file.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl ListArgs {
    fn into_config(self) -> Result<ListConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(ListConfig::from(merged))
    }
}

/// Resolved `list` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListConfig {
    pub(crate) catalog: Utf8PathBuf,
}

impl From<ListArgs> for ListConfig {
    fn from(args: ListArgs) -> Self {
        Self {
            catalog: args
                .catalog
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG_PATH)),
        }
    }
}

pub(crate) fn run_list(args: ListArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_list_with(args, &mut stdout)
}

pub(crate) fn run_list_with(args: ListArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let listing = execute_list(&config)?;
    write_json(writer, &listing)
}

pub(crate) fn execute_list(config: &ListConfig) -> Result<CatalogListing, CliError> {
    let catalog = load_catalog(&config.catalog)?;
    Ok(CatalogListing::from(catalog))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ListConfig, CliError> {
    let merged = ListArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(ListConfig::from(merged))
}
