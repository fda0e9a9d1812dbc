//! Test-only fixtures and scorers shared by unit and behaviour tests.

use std::collections::HashMap;

use crate::{Catalog, CatalogEntry, Query, Scorer};

/// Build an entry, panicking on invalid input.
///
/// # Panics
/// Panics when `id` is blank.
#[must_use]
pub fn entry(id: &str, name: &str, city: &str, focus: &str, description: &str) -> CatalogEntry {
    CatalogEntry::new(id, name, city, focus, description)
        .unwrap_or_else(|err| panic!("fixture entry {id:?} is invalid: {err}"))
}

/// The hand-curated Yolo County seed entries, in file order.
///
/// # Panics
/// Panics if the fixture data contains duplicate ids.
#[must_use]
pub fn seed_catalog() -> Catalog {
    let entries = vec![
        entry(
            "s1",
            "Marrone Bio Innovations",
            "Davis",
            "Biologicals",
            "Develops environmentally responsible pest management and plant health products.",
        ),
        entry(
            "s2",
            "Arcadia Biosciences",
            "Davis",
            "Seed Genetics",
            "Focuses on crop innovation to improve quality and nutritional value of food crops.",
        ),
        entry(
            "s3",
            "Joywell Foods",
            "Davis",
            "Alternative Protein",
            "Produces sweet proteins from plants as healthy sugar substitutes.",
        ),
        entry(
            "s4",
            "Sierra Energy",
            "Davis",
            "Environmental",
            "Develops FastOx gasification technology to convert waste into clean energy.",
        ),
        entry(
            "s5",
            "Biome Makers",
            "West Sacramento",
            "Soil Health",
            "Provides soil microbiome analytics for sustainable agriculture.",
        ),
        entry(
            "s6",
            "HM.CLAUSE",
            "Davis",
            "Seed Genetics",
            "Global vegetable seed company with major R&D facilities in Davis.",
        ),
        entry(
            "s7",
            "AgBiTech",
            "Woodland",
            "Biologicals",
            "Produces biological pest control solutions focusing on baculoviruses.",
        ),
        entry(
            "s8",
            "Syngenta Seeds",
            "Woodland",
            "Seed Genetics",
            "Major agricultural science and technology company operating an R&D site in Woodland.",
        ),
        entry(
            "s9",
            "Bayer Crop Science",
            "West Sacramento",
            "Crop Protection",
            "Operates a massive Biologics facility identifying beneficial microbes.",
        ),
    ];
    Catalog::new(entries).unwrap_or_else(|err| panic!("seed catalog is invalid: {err}"))
}

/// Scorer returning a fixed score per entry id.
///
/// Ids without a score do not match. Useful for exercising ranking and
/// truncation independently of keyword weights.
#[derive(Debug, Clone, Default)]
pub struct LookupScorer {
    scores: HashMap<String, u32>,
}

impl LookupScorer {
    /// Build a scorer from `(id, score)` pairs.
    pub fn new<I, S>(scores: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            scores: scores
                .into_iter()
                .map(|(id, score)| (id.into(), score))
                .collect(),
        }
    }
}

impl Scorer for LookupScorer {
    fn score(&self, entry: &CatalogEntry, _query: &Query) -> Option<u32> {
        self.scores.get(entry.id()).copied().filter(|score| *score > 0)
    }
}
