//! Score catalog entries against a query.
//!
//! The `Scorer` trait assigns an integer relevance weight to a
//! [`CatalogEntry`](crate::CatalogEntry) for a given
//! [`Query`](crate::Query). Rankers call it only for entries that already
//! passed the query's categorical filters.

use crate::{CatalogEntry, Query};

/// Calculate a relevance score for a catalog entry.
///
/// Higher scores indicate a better match. Returning `None` means the entry
/// does not match the query at all and must be left out of the results.
/// Implementations must be thread-safe (`Send` + `Sync`) so independent
/// requests can share one scorer.
///
/// # Examples
///
/// ```rust
/// use agscout_core::{CatalogEntry, Query, Scorer};
///
/// struct NameLength;
///
/// impl Scorer for NameLength {
///     fn score(&self, entry: &CatalogEntry, _query: &Query) -> Option<u32> {
///         u32::try_from(entry.name().len()).ok().filter(|len| *len > 0)
///     }
/// }
///
/// let entry = CatalogEntry::new("s1", "Oobli", "Davis", "Alternative Protein", "")
///     .expect("valid entry");
/// assert_eq!(NameLength.score(&entry, &Query::default()), Some(5));
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `entry` according to `query`, or `None` when it
    /// does not match.
    fn score(&self, entry: &CatalogEntry, query: &Query) -> Option<u32>;
}
