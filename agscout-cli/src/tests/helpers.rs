//! Test helpers for writing catalogs and requests into temporary workspaces.

use agscout_core::test_support::seed_catalog;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Temporary directory holding a catalog and optional request file.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn catalog_path(&self) -> Utf8PathBuf {
        self.root.join("startups.json")
    }

    pub(super) fn request_path(&self) -> Utf8PathBuf {
        self.root.join("request.json")
    }

    /// Write the nine seed startups to [`Workspace::catalog_path`].
    pub(super) fn write_seed_catalog(&self) -> Utf8PathBuf {
        let path = self.catalog_path();
        let payload =
            serde_json::to_string_pretty(seed_catalog().entries()).expect("serialize catalog");
        write_utf8(&path, payload.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Decode captured stdout as JSON.
pub(super) fn stdout_json(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("stdout should be JSON")
}

/// Ids of the `results` array in a recommend response.
pub(super) fn result_ids(response: &serde_json::Value) -> Vec<String> {
    response["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|result| result["id"].as_str().expect("result id").to_owned())
        .collect()
}
