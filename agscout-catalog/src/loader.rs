//! Catalog file reading and validation.

use std::io::{BufReader, Read};

use agscout_core::{Catalog, CatalogEntry};
use agscout_fs::{PathProbe, open_utf8_file, probe_path};
use camino::Utf8Path;
use log::{debug, warn};

use crate::CatalogLoadError;

/// Load the catalog stored at `path`.
///
/// A missing file yields an empty catalog and a warning. Anything else that
/// stops the whole file from loading is an error; entries are never skipped.
///
/// # Errors
/// - [`CatalogLoadError::Inspect`] when the path cannot be examined.
/// - [`CatalogLoadError::NotAFile`] when the path is a directory or similar.
/// - [`CatalogLoadError::Open`] when the file cannot be opened.
/// - [`CatalogLoadError::Parse`] when the contents are not a JSON array of
///   entries with every required field.
/// - [`CatalogLoadError::Invalid`] for blank or duplicate ids.
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, CatalogLoadError> {
    let probe = probe_path(path).map_err(|source| CatalogLoadError::Inspect {
        path: path.to_path_buf(),
        source,
    })?;
    match probe {
        PathProbe::Missing => {
            warn!("catalog {path} not found; serving an empty catalog");
            return Ok(Catalog::empty());
        }
        PathProbe::NotFile => {
            return Err(CatalogLoadError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        PathProbe::File => {}
    }

    let file = open_utf8_file(path).map_err(|source| CatalogLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = read_catalog(BufReader::new(file), path)?;
    debug!("loaded {} catalog entries from {path}", catalog.len());
    Ok(catalog)
}

/// Parse and validate a catalog from any reader.
///
/// `path` only labels errors.
///
/// # Errors
/// Returns [`CatalogLoadError::Parse`] or [`CatalogLoadError::Invalid`] as
/// described for [`load_catalog`].
pub fn read_catalog<R: Read>(reader: R, path: &Utf8Path) -> Result<Catalog, CatalogLoadError> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_reader(reader).map_err(|source| CatalogLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Catalog::new(entries).map_err(|source| CatalogLoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}
