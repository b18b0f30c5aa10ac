//! Weighted search documents.
//!
//! A [`WeightedDocument`] is the derived, per-zone view of a content item
//! that ranked matching and scoring operate over. It is regenerated whole
//! on every content write, never patched incrementally, and has no
//! lifecycle of its own.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A relevance zone of a content item.
///
/// Zones carry fixed descending weights: a term hit in the title always
/// outscores the same hit in the excerpt, which outscores a hit in the
/// body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Title text (weight tier A).
    Title,
    /// Excerpt text (weight tier B).
    Excerpt,
    /// Normalized body text (weight tier C).
    Body,
}

impl Zone {
    /// All zones in descending weight order.
    pub const ALL: [Zone; 3] = [Zone::Title, Zone::Excerpt, Zone::Body];

    /// The fixed relevance weight of this zone.
    pub fn weight(&self) -> f32 {
        match self {
            Zone::Title => 1.0,
            Zone::Excerpt => 0.4,
            Zone::Body => 0.2,
        }
    }
}

/// Per-zone term frequencies for one content item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedDocument {
    title_terms: AHashMap<String, u32>,
    excerpt_terms: AHashMap<String, u32>,
    body_terms: AHashMap<String, u32>,
}

impl WeightedDocument {
    /// Create an empty weighted document.
    pub fn new() -> Self {
        WeightedDocument::default()
    }

    /// Record one occurrence of a term in a zone.
    pub fn record(&mut self, zone: Zone, term: String) {
        *self.zone_terms_mut(zone).entry(term).or_insert(0) += 1;
    }

    /// Term frequency of `term` in `zone`.
    pub fn frequency(&self, zone: Zone, term: &str) -> u32 {
        self.zone_terms(zone).get(term).copied().unwrap_or(0)
    }

    /// Whether the term occurs in any zone.
    pub fn contains_term(&self, term: &str) -> bool {
        Zone::ALL.iter().any(|zone| self.frequency(*zone, term) > 0)
    }

    /// Whether every term in the slice occurs in at least one zone.
    ///
    /// An empty slice matches nothing; the planner never builds a ranked
    /// plan from an empty term set.
    pub fn contains_all_terms(&self, terms: &[String]) -> bool {
        !terms.is_empty() && terms.iter().all(|term| self.contains_term(term))
    }

    fn zone_terms(&self, zone: Zone) -> &AHashMap<String, u32> {
        match zone {
            Zone::Title => &self.title_terms,
            Zone::Excerpt => &self.excerpt_terms,
            Zone::Body => &self.body_terms,
        }
    }

    fn zone_terms_mut(&mut self, zone: Zone) -> &mut AHashMap<String, u32> {
        match zone {
            Zone::Title => &mut self.title_terms,
            Zone::Excerpt => &mut self.excerpt_terms,
            Zone::Body => &mut self.body_terms,
        }
    }
}
