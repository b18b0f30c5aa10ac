//! Query plans.
//!
//! Planning produces a tagged [`QueryPlan`]: the ranked branch carries the
//! analyzed term set, the fallback branch carries a lowercased substring
//! needle with relevance pinned to a neutral zero. Both branches feed the
//! same filtering and pagination stages, which stay branch-agnostic.

use crate::document::content::ContentItem;
use crate::document::weighted::WeightedDocument;

/// Neutral relevance score assigned to every fallback match.
pub const NEUTRAL_SCORE: f32 = 0.0;

/// A ranked-match plan: every term must match the weighted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPlan {
    /// Analyzed query terms, AND semantics.
    pub terms: Vec<String>,
}

impl RankedPlan {
    /// Whether the document matches all terms of this plan.
    pub fn matches(&self, document: &WeightedDocument) -> bool {
        document.contains_all_terms(&self.terms)
    }
}

/// A fallback plan: case-insensitive substring match over title and
/// excerpt. Bodies are never substring-scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPlan {
    /// Lowercased trimmed query text.
    pub needle: String,
}

impl FallbackPlan {
    /// Whether the item's title or excerpt contains the needle.
    pub fn matches(&self, item: &ContentItem) -> bool {
        item.title.to_lowercase().contains(&self.needle)
            || item
                .excerpt
                .as_deref()
                .is_some_and(|excerpt| excerpt.to_lowercase().contains(&self.needle))
    }
}

/// The outcome of the planning step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan {
    /// Empty or whitespace-only query: return an empty page, touch nothing.
    Empty,
    /// Ranked term matching with relevance scoring.
    Ranked(RankedPlan),
    /// Substring matching with neutral relevance.
    Fallback(FallbackPlan),
}
