//! Keyword relevance scoring over entry names, focus and descriptions.
//!
//! A non-empty query is matched as a whole against three fields, then split
//! into whitespace tokens that are matched against the description alone.
//! Both passes add to the same score, so overlapping matches accumulate.

#![forbid(unsafe_code)]

use agscout_core::{CatalogEntry, Query, Scorer};

use crate::RankWeights;

/// Case-insensitive substring scorer.
///
/// # Examples
/// ```
/// use agscout_core::{CatalogEntry, Query, Scorer};
/// use agscout_ranker::KeywordScorer;
///
/// let entry = CatalogEntry::new(
///     "s1",
///     "Marrone Bio Innovations",
///     "Davis",
///     "Biologicals",
///     "pest management products",
/// )
/// .expect("valid entry");
///
/// let scorer = KeywordScorer::default();
/// // Whole-text description match only: "pes" is too short to count as a token.
/// assert_eq!(scorer.score(&entry, &Query::new("pes")), Some(2));
/// // Whole-text description match plus the "pest" token.
/// assert_eq!(scorer.score(&entry, &Query::new("pest")), Some(3));
/// assert_eq!(scorer.score(&entry, &Query::new("Marrone")), Some(5));
/// assert_eq!(scorer.score(&entry, &Query::new("xyz123")), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeywordScorer {
    weights: RankWeights,
}

impl KeywordScorer {
    /// Build a scorer with custom weights.
    #[must_use]
    pub const fn new(weights: RankWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> RankWeights {
        self.weights
    }

    /// Score lowered `text` against `entry`; zero means no match.
    fn text_score(&self, entry: &CatalogEntry, text: &str) -> u32 {
        let description = entry.description().to_lowercase();
        let whole_text = [
            (entry.name().to_lowercase(), self.weights.name),
            (entry.focus().to_lowercase(), self.weights.focus),
            (description.clone(), self.weights.description),
        ]
        .into_iter()
        .filter(|(field, _)| field.contains(text))
        .fold(0_u32, |score, (_, weight)| score.saturating_add(weight));

        let token_hits = text
            .split_whitespace()
            .filter(|token| token.chars().count() > self.weights.min_token_length)
            .filter(|token| description.contains(token))
            .count();
        let token_score = u32::try_from(token_hits)
            .map_or(u32::MAX, |hits| hits.saturating_mul(self.weights.token));

        whole_text.saturating_add(token_score)
    }
}

impl Scorer for KeywordScorer {
    fn score(&self, entry: &CatalogEntry, query: &Query) -> Option<u32> {
        if !query.has_text() {
            return Some(self.weights.empty_query);
        }
        let score = self.text_score(entry, &query.normalised_text());
        (score > 0).then_some(score)
    }
}
