//! Request and response envelopes exchanged with the request-handling layer.
//!
//! The shapes mirror the JSON the directory frontend already speaks:
//! `{"query": "...", "focus_filter": "All"}` in, `{"results": [...]}` out.

use serde::{Deserialize, Serialize};

use crate::{Catalog, CatalogEntry, Filter, Query, ScoredResult};

/// Body of a recommendation request.
///
/// `query` is required but may be empty. Filters may be absent, empty, or
/// [`ALL_SENTINEL`](crate::ALL_SENTINEL) to mean "no constraint".
///
/// # Examples
/// ```
/// use agscout_core::{Filter, Query, RecommendRequest};
///
/// let request: RecommendRequest =
///     serde_json::from_str(r#"{"query": "Pest", "city_filter": "All"}"#)
///         .expect("valid request");
/// let query = Query::from(request);
/// assert_eq!(query.text(), "Pest");
/// assert_eq!(query.city(), &Filter::Any);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Free-text search string.
    pub query: String,
    /// Optional focus category filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_filter: Option<String>,
    /// Optional city filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_filter: Option<String>,
}

impl From<RecommendRequest> for Query {
    fn from(request: RecommendRequest) -> Self {
        Self::new(request.query)
            .with_focus(Filter::from_wire(request.focus_filter.as_deref()))
            .with_city(Filter::from_wire(request.city_filter.as_deref()))
    }
}

/// Ranked results for one recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RecommendResponse {
    /// Best matches, highest score first.
    pub results: Vec<ScoredResult>,
}

impl From<Vec<ScoredResult>> for RecommendResponse {
    fn from(results: Vec<ScoredResult>) -> Self {
        Self { results }
    }
}

/// The full directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogListing {
    /// Number of entries in the catalog.
    pub total: usize,
    /// Every entry in source order.
    pub startups: Vec<CatalogEntry>,
}

impl From<Catalog> for CatalogListing {
    fn from(catalog: Catalog) -> Self {
        let startups = catalog.into_inner();
        Self {
            total: startups.len(),
            startups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn request_requires_query_field() {
        let err = serde_json::from_value::<RecommendRequest>(json!({ "focus_filter": "All" }))
            .expect_err("query is required");
        assert!(err.to_string().contains("query"));
    }

    #[rstest]
    fn request_maps_filters() {
        let request = RecommendRequest {
            query: String::new(),
            focus_filter: Some("Seed Genetics".into()),
            city_filter: Some(String::new()),
        };
        let query = Query::from(request);
        assert_eq!(query.focus(), &Filter::Only("Seed Genetics".into()));
        assert_eq!(query.city(), &Filter::Any);
        assert!(!query.has_text());
    }

    #[rstest]
    fn response_flattens_entries_with_scores() {
        let entry = CatalogEntry::new(
            "s1",
            "Marrone Bio Innovations",
            "Davis",
            "Biologicals",
            "pest management products",
        )
        .expect("valid entry");
        let response = RecommendResponse::from(vec![ScoredResult::new(entry, 2)]);
        let value = serde_json::to_value(&response).expect("serialise response");
        assert_eq!(
            value,
            json!({
                "results": [{
                    "id": "s1",
                    "name": "Marrone Bio Innovations",
                    "city": "Davis",
                    "focus": "Biologicals",
                    "description": "pest management products",
                    "match_score": 2
                }]
            })
        );
    }

    #[rstest]
    fn listing_counts_entries() {
        let listing = CatalogListing::from(Catalog::empty());
        let value = serde_json::to_value(&listing).expect("serialise listing");
        assert_eq!(value, json!({ "total": 0, "startups": [] }));
    }
}
