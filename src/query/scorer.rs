//! Relevance scoring for ranked matches.
//!
//! The score is a weighted term-frequency sum: for each query term, each
//! zone contributes `zone weight × term frequency in that zone`. Because
//! zone weights descend strictly (title > excerpt > body) and the title is
//! indexed twice, a single title hit always outscores a single excerpt or
//! body hit for the same query.
//!
//! Fallback matches never reach this scorer; they carry the neutral
//! constant from [`crate::query::plan::NEUTRAL_SCORE`].

use crate::document::weighted::{WeightedDocument, Zone};

/// Scores weighted documents against an analyzed term set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneScorer;

impl ZoneScorer {
    /// Create a new scorer.
    pub fn new() -> Self {
        ZoneScorer
    }

    /// Relevance of `document` for `terms`.
    ///
    /// Callers are expected to have established the match (all terms
    /// present); scoring a non-matching document just yields the partial
    /// sum and is harmless.
    pub fn score(&self, document: &WeightedDocument, terms: &[String]) -> f32 {
        terms
            .iter()
            .map(|term| {
                Zone::ALL
                    .iter()
                    .map(|zone| zone.weight() * document.frequency(*zone, term) as f32)
                    .sum::<f32>()
            })
            .sum()
    }
}
