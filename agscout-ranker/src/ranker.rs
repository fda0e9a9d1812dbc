//! Filter, score, order and truncate a catalog for one query.
#![forbid(unsafe_code)]

use std::cmp::Reverse;

use agscout_core::{CatalogEntry, Query, ScoredResult, Scorer};
use log::debug;

use crate::{DEFAULT_RESULT_LIMIT, KeywordScorer};

/// Ranks catalog entries with a pluggable [`Scorer`].
///
/// Ranking runs in four stages: entries failing the query's focus or city
/// filter are dropped, the survivors are scored (entries the scorer rejects
/// are dropped too), the rest are ordered by descending score, and the list
/// is cut to [`Ranker::limit`] entries.
///
/// Ordering uses a stable sort, so entries with equal scores keep their
/// relative catalog order.
///
/// # Examples
/// ```
/// use agscout_core::{CatalogEntry, Filter, Query};
/// use agscout_ranker::Ranker;
///
/// # fn main() -> Result<(), agscout_core::CatalogEntryError> {
/// let catalog = vec![
///     CatalogEntry::new("s1", "AgBiTech", "Woodland", "Biologicals", "pest control")?,
///     CatalogEntry::new("s2", "Oobli", "Davis", "Alternative Protein", "sweet proteins")?,
/// ];
/// let query = Query::default().with_city(Filter::Only("davis".into()));
///
/// let results = Ranker::default().rank(&catalog, &query);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].entry().id(), "s2");
/// assert_eq!(results[0].match_score(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ranker<S = KeywordScorer> {
    scorer: S,
    limit: usize,
}

impl Default for Ranker<KeywordScorer> {
    fn default() -> Self {
        Self::new(KeywordScorer::default())
    }
}

impl<S: Scorer> Ranker<S> {
    /// Wrap `scorer` with the default result limit.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self {
            scorer,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Replace the result limit, returning `self` for chaining.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Maximum number of results returned per call.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// The scorer in use.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Rank `catalog` for `query`.
    ///
    /// The catalog is only read; results are fresh copies. An empty catalog
    /// or a query nothing matches yields an empty vector.
    #[must_use]
    pub fn rank(&self, catalog: &[CatalogEntry], query: &Query) -> Vec<ScoredResult> {
        let mut results: Vec<ScoredResult> = catalog
            .iter()
            .filter(|entry| query.admits(entry))
            .filter_map(|entry| {
                self.scorer
                    .score(entry, query)
                    .map(|score| ScoredResult::new(entry.clone(), score))
            })
            .collect();
        let matched = results.len();

        results.sort_by_key(|result| Reverse(result.match_score()));
        results.truncate(self.limit);

        debug!(
            "ranked {matched} of {} entries for query {:?}, returning {}",
            catalog.len(),
            query.text(),
            results.len()
        );
        results
    }
}
