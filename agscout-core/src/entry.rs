//! Directory entries describing a single startup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fields present in the source catalog beyond the ones the ranker reads.
///
/// They are carried through untouched so responses echo the original record.
pub type ExtraFields = BTreeMap<String, serde_json::Value>;

const NAMED_FIELDS: [&str; 5] = ["id", "name", "city", "focus", "description"];

/// A startup listed in the directory.
///
/// Entries are immutable once built. Ranking produces a
/// [`ScoredResult`](crate::ScoredResult) copy rather than annotating the entry.
///
/// # Examples
/// ```
/// use agscout_core::CatalogEntry;
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
/// assert_eq!(entry.id(), "s1");
/// assert_eq!(entry.focus(), "Biologicals");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    id: String,
    name: String,
    city: String,
    focus: String,
    description: String,
    #[serde(flatten)]
    extra: ExtraFields,
}

/// Errors returned by [`CatalogEntry::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogEntryError {
    /// The identifier was empty or whitespace.
    #[error("catalog entry id must not be blank")]
    BlankId,
}

impl CatalogEntry {
    /// Validate and construct a [`CatalogEntry`] without extra fields.
    ///
    /// # Errors
    /// Returns [`CatalogEntryError::BlankId`] when `id` is empty or whitespace.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        focus: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, CatalogEntryError> {
        let entry = Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            focus: focus.into(),
            description: description.into(),
            extra: ExtraFields::new(),
        };
        if entry.has_blank_id() {
            return Err(CatalogEntryError::BlankId);
        }
        Ok(entry)
    }

    /// Attach additional source fields, returning `self` for chaining.
    ///
    /// Keys that shadow a named field are dropped.
    #[must_use]
    pub fn with_extra(mut self, mut extra: ExtraFields) -> Self {
        extra.retain(|key, _| !NAMED_FIELDS.contains(&key.as_str()));
        self.extra = extra;
        self
    }

    /// Unique identifier within a catalog.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name of the startup.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// City the startup operates from.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Focus category, e.g. `"Biologicals"`.
    #[must_use]
    pub fn focus(&self) -> &str {
        &self.focus
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Source fields outside the ranked set.
    #[must_use]
    pub const fn extra(&self) -> &ExtraFields {
        &self.extra
    }

    pub(crate) fn has_blank_id(&self) -> bool {
        self.id.trim().is_empty()
    }

    pub(crate) fn remove_extra(&mut self, key: &str) {
        self.extra.remove(key);
    }
}
