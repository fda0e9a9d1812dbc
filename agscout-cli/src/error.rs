//! Error types emitted by the agscout CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use agscout_catalog::CatalogLoadError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the agscout CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A request file was given together with inline query options.
    #[error("--{request} cannot be combined with --{field}")]
    ConflictingRequestSources {
        request: &'static str,
        field: &'static str,
    },
    /// Opening the recommend request file failed.
    #[error("failed to open recommend request at {path}: {source}")]
    OpenRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Recommend request JSON could not be decoded.
    #[error("failed to parse recommend request JSON at {path}: {source}")]
    ParseRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The catalog could not be loaded.
    #[error(transparent)]
    LoadCatalog(#[from] CatalogLoadError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    Serialise(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
