//! Command-line interface for the agscout startup directory.
//!
//! `agscout recommend` ranks the catalog for a query and prints the
//! response envelope; `agscout list` prints the whole catalog. Both emit
//! pretty JSON on stdout.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod list;
mod recommend;

pub use error::CliError;
use list::{ListArgs, run_list};
use recommend::{RecommendArgs, run_recommend};

const ARG_QUERY: &str = "query";
const ARG_FOCUS_FILTER: &str = "focus-filter";
const ARG_CITY_FILTER: &str = "city-filter";
const ARG_REQUEST: &str = "request";
const ARG_CATALOG: &str = "catalog";

/// Run the agscout CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration layering,
/// input loading or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::List(args) => run_list(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "agscout",
    about = "Search the Yolo County agtech startup directory",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank startups against a free-text query and optional filters.
    Recommend(RecommendArgs),
    /// Print every startup in the catalog.
    List(ListArgs),
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::Serialise)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
