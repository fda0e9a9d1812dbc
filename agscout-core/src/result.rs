//! Scored copies of catalog entries.

use serde::Serialize;

use crate::CatalogEntry;

const MATCH_SCORE_KEY: &str = "match_score";

/// A catalog entry annotated with its relevance for one query.
///
/// Serialises as the entry's fields with an extra `match_score` key. A
/// `match_score` carried over from the source record is replaced, never
/// repeated.
///
/// # Examples
/// ```
/// use agscout_core::{CatalogEntry, ScoredResult};
///
/// let entry = CatalogEntry::new("s1", "Oobli", "Davis", "Alternative Protein", "")
///     .expect("valid entry");
/// let result = ScoredResult::new(entry, 3);
/// assert_eq!(result.match_score(), 3);
/// assert_eq!(result.entry().name(), "Oobli");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    entry: CatalogEntry,
    match_score: u32,
}

impl ScoredResult {
    /// Pair an entry with its score.
    #[must_use]
    pub fn new(mut entry: CatalogEntry, match_score: u32) -> Self {
        entry.remove_extra(MATCH_SCORE_KEY);
        Self { entry, match_score }
    }

    /// The scored entry.
    #[must_use]
    pub const fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    /// Relevance weight; higher is better.
    #[must_use]
    pub const fn match_score(&self) -> u32 {
        self.match_score
    }

    /// Discard the score and return the entry.
    #[must_use]
    pub fn into_entry(self) -> CatalogEntry {
        self.entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn stale_source_score_is_replaced() {
        let entry: CatalogEntry = serde_json::from_value(json!({
            "id": "s1",
            "name": "Marrone Bio Innovations",
            "city": "Davis",
            "focus": "Biologicals",
            "description": "pest management products",
            "match_score": 99,
            "founded": 2006
        }))
        .expect("entry should parse");

        let result = ScoredResult::new(entry, 2);
        let encoded = serde_json::to_string(&result).expect("serialise result");

        assert_eq!(encoded.matches("\"match_score\"").count(), 1, "{encoded}");
        let value: serde_json::Value = serde_json::from_str(&encoded).expect("valid JSON");
        assert_eq!(value["match_score"], 2);
        assert_eq!(value["founded"], 2006);
        assert!(!result.entry().extra().contains_key(MATCH_SCORE_KEY));
    }

    #[rstest]
    fn into_entry_returns_the_scored_entry() {
        let entry = CatalogEntry::new("s3", "Joywell Foods", "Davis", "Alternative Protein", "")
            .expect("valid entry");
        let result = ScoredResult::new(entry.clone(), 1);
        assert_eq!(result.into_entry(), entry);
    }
}
