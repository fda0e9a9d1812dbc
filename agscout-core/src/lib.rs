//! Core domain types for the agscout startup directory.
//!
//! These models keep the catalog honest: entries are validated on
//! construction, catalogs reject duplicate identifiers, and queries carry
//! their filters as explicit states rather than sentinel strings.
//!
//! Ranking itself lives in `agscout-ranker`; this crate only defines the
//! vocabulary and the [`Scorer`] seam it plugs into.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod entry;
pub mod query;
pub mod result;
pub mod scorer;
pub mod wire;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Catalog, CatalogError};
pub use entry::{CatalogEntry, CatalogEntryError, ExtraFields};
pub use query::{ALL_SENTINEL, Filter, Query};
pub use result::ScoredResult;
pub use scorer::Scorer;
pub use wire::{CatalogListing, RecommendRequest, RecommendResponse};
