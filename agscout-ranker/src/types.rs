//! Tunable weights and limits for keyword ranking.
#![forbid(unsafe_code)]

/// Added when the whole query text appears in an entry's name.
pub const NAME_MATCH_WEIGHT: u32 = 5;
/// Added when the whole query text appears in an entry's focus.
pub const FOCUS_MATCH_WEIGHT: u32 = 3;
/// Added when the whole query text appears in an entry's description.
pub const DESCRIPTION_MATCH_WEIGHT: u32 = 2;
/// Added for each long query token found in an entry's description.
pub const TOKEN_MATCH_WEIGHT: u32 = 1;
/// Score given to every filtered entry when the query has no text.
pub const EMPTY_QUERY_SCORE: u32 = 1;
/// Tokens must be strictly longer than this many characters to count.
pub const MIN_TOKEN_LENGTH: usize = 3;
/// Maximum number of results returned by a default ranker.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Weights applied by [`KeywordScorer`](crate::KeywordScorer).
///
/// # Examples
/// ```
/// use agscout_ranker::{NAME_MATCH_WEIGHT, RankWeights};
///
/// let weights = RankWeights::default();
/// assert_eq!(weights.name, NAME_MATCH_WEIGHT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankWeights {
    /// Whole-text match against the name.
    pub name: u32,
    /// Whole-text match against the focus category.
    pub focus: u32,
    /// Whole-text match against the description.
    pub description: u32,
    /// Per-token match against the description.
    pub token: u32,
    /// Fixed score when there is no query text.
    pub empty_query: u32,
    /// Tokens of this many characters or fewer are ignored.
    pub min_token_length: usize,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            name: NAME_MATCH_WEIGHT,
            focus: FOCUS_MATCH_WEIGHT,
            description: DESCRIPTION_MATCH_WEIGHT,
            token: TOKEN_MATCH_WEIGHT,
            empty_query: EMPTY_QUERY_SCORE,
            min_token_length: MIN_TOKEN_LENGTH,
        }
    }
}
