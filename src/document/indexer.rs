//! Document indexing: building a weighted document from raw content.
//!
//! [`DocumentIndexer::index`] runs synchronously inside the same write that
//! creates or updates an item. If it fails, the caller must treat the whole
//! content write as failed; a published item without a search document is
//! an inconsistent state, not a degraded mode.
//!
//! # Examples
//!
//! ```
//! use gazette::document::indexer::DocumentIndexer;
//! use gazette::document::weighted::Zone;
//!
//! let indexer = DocumentIndexer::new();
//! let doc = indexer.index("Ocean Currents", Some("A tidal primer"), "Deep *salt* loops.").unwrap();
//!
//! // Title terms are double-counted relative to a single occurrence.
//! assert_eq!(doc.frequency(Zone::Title, "ocean"), 2);
//! assert_eq!(doc.frequency(Zone::Excerpt, "tidal"), 1);
//! assert_eq!(doc.frequency(Zone::Body, "salt"), 1);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::{CharFilter, MarkdownStripFilter};
use crate::document::weighted::{WeightedDocument, Zone};
use crate::error::Result;

/// Builds weighted search documents from (title, excerpt, body) triples.
///
/// Zone contents:
/// - Title: the title concatenated twice, doubling its term frequencies on
///   top of the title zone's weight tier.
/// - Excerpt: the excerpt, or empty.
/// - Body: the markdown-stripped body.
#[derive(Debug, Clone)]
pub struct DocumentIndexer {
    analyzer: Analyzer,
    normalizer: Arc<MarkdownStripFilter>,
}

impl DocumentIndexer {
    /// Create an indexer with the fixed English analyzer.
    pub fn new() -> Self {
        DocumentIndexer::with_analyzer(Analyzer::english())
    }

    /// Create an indexer with a specific analyzer. The query planner must
    /// use the same configuration for index and query terms to agree.
    pub fn with_analyzer(analyzer: Analyzer) -> Self {
        DocumentIndexer {
            analyzer,
            normalizer: Arc::new(MarkdownStripFilter::new()),
        }
    }

    /// The analyzer this indexer runs; the query planner must use the same
    /// one for index and query terms to agree.
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Normalize raw markdown to plain text.
    pub fn normalize(&self, markdown: &str) -> String {
        self.normalizer.filter(markdown)
    }

    /// Build the weighted document for one content item.
    pub fn index(
        &self,
        title: &str,
        excerpt: Option<&str>,
        body: &str,
    ) -> Result<WeightedDocument> {
        let mut doc = WeightedDocument::new();

        // Double weight for the title: index it twice.
        let doubled_title = format!("{title} {title}");
        self.index_zone(&mut doc, Zone::Title, &doubled_title)?;
        self.index_zone(&mut doc, Zone::Excerpt, excerpt.unwrap_or(""))?;

        let plain_body = self.normalize(body);
        self.index_zone(&mut doc, Zone::Body, &plain_body)?;

        Ok(doc)
    }

    fn index_zone(&self, doc: &mut WeightedDocument, zone: Zone, text: &str) -> Result<()> {
        for term in self.analyzer.terms(text)? {
            doc.record(zone, term);
        }
        Ok(())
    }
}

impl Default for DocumentIndexer {
    fn default() -> Self {
        DocumentIndexer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_builds_all_zones() {
        let indexer = DocumentIndexer::new();
        let doc = indexer
            .index("Ocean Currents", Some("A short primer"), "Salt water moves in loops.")
            .unwrap();

        assert_eq!(doc.frequency(Zone::Title, "ocean"), 2);
        assert_eq!(doc.frequency(Zone::Title, "current"), 2);
        assert_eq!(doc.frequency(Zone::Excerpt, "short"), 1);
        assert_eq!(doc.frequency(Zone::Body, "salt"), 1);
        assert_eq!(doc.frequency(Zone::Body, "loop"), 1);
    }

    #[test]
    fn test_index_missing_excerpt() {
        let indexer = DocumentIndexer::new();
        let doc = indexer.index("Title", None, "body").unwrap();
        assert_eq!(doc.frequency(Zone::Excerpt, "title"), 0);
        assert!(doc.contains_term("body"));
    }

    #[test]
    fn test_index_strips_markdown_from_body() {
        let indexer = DocumentIndexer::new();
        let doc = indexer
            .index("Title", None, "```\nlet secret = 42;\n```\nPlain prose outside")
            .unwrap();

        assert!(!doc.contains_term("secret"));
        assert!(doc.contains_term("plain"));
        assert!(doc.contains_term("prose"));
    }

}
