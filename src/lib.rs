//! Facade crate for the agscout startup directory.
//!
//! This crate re-exports the core domain types and the keyword ranker, and
//! exposes the catalog loader behind the `catalog` feature.

#![forbid(unsafe_code)]

pub use agscout_core::{
    ALL_SENTINEL, Catalog, CatalogEntry, CatalogEntryError, CatalogError, CatalogListing,
    ExtraFields, Filter, Query, RecommendRequest, RecommendResponse, ScoredResult, Scorer,
};

pub use agscout_ranker::{DEFAULT_RESULT_LIMIT, KeywordScorer, RankWeights, Ranker, rank};

#[cfg(feature = "catalog")]
pub use agscout_catalog::{CatalogLoadError, DEFAULT_CATALOG_PATH, load_catalog};
