//! Structured filter composition.
//!
//! Author and recency filters combine with logical AND, with each other and
//! with whichever text-match predicate the planner chose. There is no OR
//! composition between filters. Both query branches (ranked and fallback)
//! apply the identical [`FilterSet`].

use chrono::{DateTime, Utc};

use crate::document::content::ContentItem;
use crate::query::request::{RecencyWindow, SearchRequest};

/// The structured filters of one request, with "now" pinned at evaluation
/// time so every candidate sees the same recency cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSet {
    author_handle: Option<String>,
    recency_cutoff: Option<DateTime<Utc>>,
}

impl FilterSet {
    /// Build the filter set for a request, resolving the recency window
    /// against `now`.
    pub fn from_request(request: &SearchRequest, now: DateTime<Utc>) -> Self {
        FilterSet {
            author_handle: request.author_handle.clone(),
            recency_cutoff: request.recency.map(|window| window.cutoff(now)),
        }
    }

    /// An unrestricted filter set.
    pub fn unrestricted() -> Self {
        FilterSet {
            author_handle: None,
            recency_cutoff: None,
        }
    }

    /// Whether the item passes every active filter.
    ///
    /// The author predicate compares handles exactly, case-sensitive as
    /// stored. The recency predicate is `published_at >= cutoff`; an item
    /// without a publication timestamp never passes an active recency
    /// filter.
    pub fn matches(&self, item: &ContentItem, author_handle: Option<&str>) -> bool {
        if let Some(wanted) = self.author_handle.as_deref() {
            match author_handle {
                Some(handle) if handle == wanted => {}
                _ => return false,
            }
        }

        if let Some(cutoff) = self.recency_cutoff {
            match item.published_at {
                Some(published_at) if published_at >= cutoff => {}
                _ => return false,
            }
        }

        true
    }

}
