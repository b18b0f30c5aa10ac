//! Search request model.
//!
//! A [`SearchRequest`] is immutable per request: raw query text, optional
//! author handle filter, optional recency window, optional pagination
//! cursor, and a page size that defaults to 10 and clamps to 50.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default number of results per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Hard ceiling on results per page; larger requests are clamped.
pub const MAX_PAGE_SIZE: usize = 50;

/// A named recency window mapping to a cutoff instant at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecencyWindow {
    /// Last 7 days.
    Week,
    /// Last 30 days.
    Month,
    /// Last 365 days.
    Year,
}

impl RecencyWindow {
    /// The cutoff instant for this window, computed from `now`.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let days = match self {
            RecencyWindow::Week => 7,
            RecencyWindow::Month => 30,
            RecencyWindow::Year => 365,
        };
        now - Duration::days(days)
    }
}

/// A single search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Raw free-text query.
    pub text: String,

    /// Exact author handle to restrict to, if any.
    pub author_handle: Option<String>,

    /// Recency window to restrict to, if any.
    pub recency: Option<RecencyWindow>,

    /// Opaque pagination cursor from a previous page, if any.
    pub cursor: Option<String>,

    /// Requested page size; `None` means the default.
    pub page_size: Option<usize>,
}

impl SearchRequest {
    /// Create a request with just query text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        SearchRequest {
            text: text.into(),
            author_handle: None,
            recency: None,
            cursor: None,
            page_size: None,
        }
    }

    /// Restrict to one author handle.
    pub fn with_author<S: Into<String>>(mut self, handle: S) -> Self {
        self.author_handle = Some(handle.into());
        self
    }

    /// Restrict to a recency window.
    pub fn with_recency(mut self, window: RecencyWindow) -> Self {
        self.recency = Some(window);
        self
    }

    /// Resume from a cursor.
    pub fn with_cursor<S: Into<String>>(mut self, cursor: S) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Request a specific page size (clamped on evaluation).
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// The effective page size: default 10, clamped to [1, 50].
    pub fn effective_page_size(&self) -> usize {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_default_and_clamp() {
        assert_eq!(SearchRequest::new("q").effective_page_size(), 10);
        assert_eq!(SearchRequest::new("q").with_page_size(0).effective_page_size(), 1);
        assert_eq!(SearchRequest::new("q").with_page_size(25).effective_page_size(), 25);
        assert_eq!(SearchRequest::new("q").with_page_size(500).effective_page_size(), 50);
    }

    #[test]
    fn test_recency_cutoffs() {
        let now = Utc::now();
        assert_eq!(RecencyWindow::Week.cutoff(now), now - Duration::days(7));
        assert_eq!(RecencyWindow::Month.cutoff(now), now - Duration::days(30));
        assert_eq!(RecencyWindow::Year.cutoff(now), now - Duration::days(365));
    }

    #[test]
    fn test_recency_serde_names() {
        // Wire names match the platform's date presets.
        assert_eq!(serde_json::to_string(&RecencyWindow::Week).unwrap(), "\"week\"");
        assert_eq!(serde_json::to_string(&RecencyWindow::Month).unwrap(), "\"month\"");
        assert_eq!(serde_json::to_string(&RecencyWindow::Year).unwrap(), "\"year\"");
    }
}
