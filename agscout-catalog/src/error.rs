//! Errors raised while loading a catalog file.

use agscout_core::CatalogError;
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Failures while reading or validating a catalog file.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// Checking what the catalog path points at failed.
    #[error("failed to inspect catalog path {path}: {source}")]
    Inspect {
        /// Catalog location.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The catalog path exists but is not a regular file.
    #[error("catalog path {path} is not a file")]
    NotAFile {
        /// Catalog location.
        path: Utf8PathBuf,
    },
    /// Opening the catalog file failed.
    #[error("failed to open catalog {path}: {source}")]
    Open {
        /// Catalog location.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a JSON array of well-formed entries.
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        /// Catalog location.
        path: Utf8PathBuf,
        /// Error reported by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The entries parsed but break a catalog invariant.
    #[error("invalid catalog {path}: {source}")]
    Invalid {
        /// Catalog location.
        path: Utf8PathBuf,
        /// The violated invariant.
        #[source]
        source: CatalogError,
    },
}

impl CatalogLoadError {
    /// Location of the catalog that failed to load.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        match self {
            Self::Inspect { path, .. }
            | Self::NotAFile { path }
            | Self::Open { path, .. }
            | Self::Parse { path, .. }
            | Self::Invalid { path, .. } => path.as_path(),
        }
    }
}
