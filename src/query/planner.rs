//! Query planning.
//!
//! The planner decides which match branch a request takes:
//!
//! - empty or whitespace-only text plans to [`QueryPlan::Empty`];
//! - text that analyzes to at least one term plans to ranked matching;
//! - text that analyzes to nothing (stop words only) plans directly to the
//!   substring fallback; that emptiness is expected input, not an error.
//!
//! The later error-recovery transition (ranked execution failing over to
//! the fallback) belongs to the searcher; the planner is a pure function
//! of the query text.

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::query::plan::{FallbackPlan, QueryPlan, RankedPlan};

/// Plans raw query text into a [`QueryPlan`].
#[derive(Debug, Clone)]
pub struct QueryPlanner {
    analyzer: Analyzer,
}

impl QueryPlanner {
    /// Create a planner using the fixed English analyzer.
    pub fn new() -> Self {
        QueryPlanner {
            analyzer: Analyzer::english(),
        }
    }

    /// Create a planner with a specific analyzer. Must be the same
    /// configuration the index was built with.
    pub fn with_analyzer(analyzer: Analyzer) -> Self {
        QueryPlanner { analyzer }
    }

    /// Tokenize the query with the index's language rules.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        self.analyzer.terms(text)
    }

    /// Plan the given raw query text.
    pub fn plan(&self, text: &str) -> Result<QueryPlan> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(QueryPlan::Empty);
        }

        let terms = self.tokenize(trimmed)?;
        if terms.is_empty() {
            return Ok(QueryPlan::Fallback(FallbackPlan {
                needle: trimmed.to_lowercase(),
            }));
        }

        Ok(QueryPlan::Ranked(RankedPlan { terms }))
    }

    /// The fallback plan for this query text, regardless of term yield.
    ///
    /// Used by the searcher when ranked execution fails and the request
    /// must be re-run as a substring match with identical filters.
    pub fn fallback_plan(&self, text: &str) -> FallbackPlan {
        FallbackPlan {
            needle: text.trim().to_lowercase(),
        }
    }
}

impl Default for QueryPlanner {
    fn default() -> Self {
        QueryPlanner::new()
    }
}
