//! Validated, ordered collections of catalog entries.
//!
//! A [`Catalog`] guarantees that every identifier is non-blank and unique.
//! Construction fails as a whole on the first violation so data-quality
//! problems surface instead of being skipped.

use std::collections::HashSet;

use thiserror::Error;

use crate::CatalogEntry;

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// An entry carried an empty or whitespace identifier.
    #[error("catalog entry at position {index} has a blank id")]
    BlankId {
        /// Zero-based position of the offending entry.
        index: usize,
    },
    /// Two entries share an identifier.
    #[error("catalog id {id:?} appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
}

/// An immutable snapshot of the directory in source order.
///
/// # Examples
/// ```
/// use agscout_core::{Catalog, CatalogEntry};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let entry = CatalogEntry::new("s1", "Oobli", "Davis", "Alternative Protein", "")?;
/// let catalog = Catalog::new(vec![entry])?;
/// assert_eq!(catalog.len(), 1);
/// assert!(Catalog::empty().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Validate and construct a catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when an id is blank or repeated.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.has_blank_id() {
                return Err(CatalogError::BlankId { index });
            }
            if !seen.insert(entry.id()) {
                return Err(CatalogError::DuplicateId {
                    id: entry.id().to_owned(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// A catalog with no entries.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Borrow the entries in source order.
    #[must_use]
    pub const fn entries(&self) -> &[CatalogEntry] {
        self.entries.as_slice()
    }

    /// Find an entry by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Return the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the catalog has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the catalog and return the underlying entries.
    #[must_use]
    pub fn into_inner(self) -> Vec<CatalogEntry> {
        self.entries
    }
}

impl AsRef<[CatalogEntry]> for Catalog {
    fn as_ref(&self) -> &[CatalogEntry] {
        self.entries()
    }
}
