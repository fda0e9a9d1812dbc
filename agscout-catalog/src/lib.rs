//! Loading the read-only startup catalog from disk.
//!
//! The catalog is a JSON array of entries. [`load_catalog`] reads it through
//! capability-based file access, validates ids once, and hands back an
//! [`agscout_core::Catalog`] ready for ranking. A missing file is not an
//! error: the directory is simply empty until data is seeded.
//!
//! # Examples
//! ```no_run
//! use agscout_catalog::{DEFAULT_CATALOG_PATH, load_catalog};
//! use camino::Utf8Path;
//!
//! # fn main() -> Result<(), agscout_catalog::CatalogLoadError> {
//! let catalog = load_catalog(Utf8Path::new(DEFAULT_CATALOG_PATH))?;
//! println!("{} startups", catalog.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod error;
mod loader;

pub use error::CatalogLoadError;
pub use loader::{load_catalog, read_catalog};

/// Catalog location used when none is configured.
pub const DEFAULT_CATALOG_PATH: &str = "data/startups.json";
