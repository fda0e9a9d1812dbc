//! Keyword relevance ranking for the agscout startup directory.
//!
//! The crate provides two pieces:
//! - **[`KeywordScorer`]** implements the [`Scorer`](agscout_core::Scorer)
//!   trait with fixed, named weights: a whole-query match in the name, focus
//!   or description, plus a bonus per long query token found in the
//!   description. With no query text every entry scores the same.
//! - **[`Ranker`]** applies the query's categorical filters, scores the
//!   survivors with any scorer, orders them by descending score with a stable
//!   sort and keeps the best few.
//!
//! Ranking is pure: the catalog is only borrowed and every call returns new
//! values, so one ranker can serve concurrent requests without locking.
//!
//! # Examples
//!
//! ```
//! use agscout_core::{CatalogEntry, Query};
//! use agscout_ranker::rank;
//!
//! let catalog = vec![
//!     CatalogEntry::new(
//!         "s1",
//!         "Marrone Bio Innovations",
//!         "Davis",
//!         "Biologicals",
//!         "pest management products",
//!     )
//!     .expect("valid entry"),
//! ];
//!
//! let results = rank(&catalog, &Query::new("pest"));
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].match_score(), 3);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use agscout_core::{CatalogEntry, Query, ScoredResult};

mod keyword;
mod ranker;
mod types;

pub use keyword::KeywordScorer;
pub use ranker::Ranker;
pub use types::{
    DEFAULT_RESULT_LIMIT, DESCRIPTION_MATCH_WEIGHT, EMPTY_QUERY_SCORE, FOCUS_MATCH_WEIGHT,
    MIN_TOKEN_LENGTH, NAME_MATCH_WEIGHT, RankWeights, TOKEN_MATCH_WEIGHT,
};

/// Rank `catalog` for `query` with the default keyword weights and limit.
///
/// Equivalent to `Ranker::default().rank(catalog, query)`.
#[must_use]
pub fn rank(catalog: &[CatalogEntry], query: &Query) -> Vec<ScoredResult> {
    Ranker::default().rank(catalog, query)
}
