//! Search queries: free text plus optional categorical filters.
//!
//! Filters are an explicit enum so a category that happens to be named
//! `"All"` cannot be confused with "no constraint". The wire sentinel is only
//! interpreted by [`Filter::from_wire`].
//!
//! # Examples
//! ```
//! use agscout_core::{Filter, Query};
//!
//! let query = Query::new("pest").with_focus(Filter::from_wire(Some("All")));
//! assert_eq!(query.focus(), &Filter::Any);
//! assert_eq!(query.text(), "pest");
//! ```

use crate::CatalogEntry;

/// Wire value meaning "do not filter on this field".
///
/// Matched case-sensitively: `"all"` is treated as a real category.
pub const ALL_SENTINEL: &str = "All";

/// A categorical constraint on one entry field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every value is admitted.
    #[default]
    Any,
    /// Only values equal to this one, ignoring case, are admitted.
    Only(String),
}

impl Filter {
    /// Interpret an optional wire value.
    ///
    /// Absent values, empty strings and [`ALL_SENTINEL`] all become
    /// [`Filter::Any`].
    ///
    /// # Examples
    /// ```
    /// use agscout_core::Filter;
    ///
    /// assert_eq!(Filter::from_wire(None), Filter::Any);
    /// assert_eq!(Filter::from_wire(Some("")), Filter::Any);
    /// assert_eq!(Filter::from_wire(Some("All")), Filter::Any);
    /// assert_eq!(Filter::from_wire(Some("Davis")), Filter::Only("Davis".into()));
    /// ```
    #[must_use]
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            None | Some("" | ALL_SENTINEL) => Self::Any,
            Some(other) => Self::Only(other.to_owned()),
        }
    }

    /// Report whether `value` satisfies the filter.
    #[must_use]
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(expected) => expected.to_lowercase() == value.to_lowercase(),
        }
    }
}

/// A caller's search request.
///
/// Text matching is case-insensitive; an empty text means "rank by filters
/// alone".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    text: String,
    focus: Filter,
    city: Filter,
}

impl Query {
    /// Construct a query with no filters.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the focus filter while returning `self` for chaining.
    #[must_use]
    pub fn with_focus(mut self, focus: Filter) -> Self {
        self.focus = focus;
        self
    }

    /// Set the city filter while returning `self` for chaining.
    #[must_use]
    pub fn with_city(mut self, city: Filter) -> Self {
        self.city = city;
        self
    }

    /// The raw query text as supplied.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased query text used for matching.
    #[must_use]
    pub fn normalised_text(&self) -> String {
        self.text.to_lowercase()
    }

    /// Report whether the query carries any text at all.
    ///
    /// Whitespace counts as text.
    #[must_use]
    pub const fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Focus filter.
    #[must_use]
    pub const fn focus(&self) -> &Filter {
        &self.focus
    }

    /// City filter.
    #[must_use]
    pub const fn city(&self) -> &Filter {
        &self.city
    }

    /// Report whether `entry` passes both categorical filters.
    #[must_use]
    pub fn admits(&self, entry: &CatalogEntry) -> bool {
        self.focus.admits(entry.focus()) && self.city.admits(entry.city())
    }
}
