//! Content store collaborator interface.
//!
//! The search engine does not own content. It reads published items (and
//! their derived weighted documents) through the [`ContentStore`] trait and
//! joins author display data through the same seam. The two read shapes
//! exist because the two query branches have different costs: the ranked
//! path needs weighted documents, while the substring fallback only scans
//! title and excerpt and must never pull bodies.

use uuid::Uuid;

use crate::document::content::{AuthorSummary, ContentItem};
use crate::document::weighted::WeightedDocument;
use crate::error::Result;

pub mod memory;

pub use memory::MemoryContentStore;

/// Read-side collaborator providing published content and author data.
pub trait ContentStore: Send + Sync {
    /// All published items paired with their weighted documents.
    ///
    /// Used by the ranked branch. An error here is an execution failure
    /// that the planner recovers from by falling back to substring match.
    fn published_documents(&self) -> Result<Vec<(ContentItem, WeightedDocument)>>;

    /// All published items without documents.
    ///
    /// Used by the fallback branch, which substring-scans title and
    /// excerpt only.
    fn published_summaries(&self) -> Result<Vec<ContentItem>>;

    /// Look up one author's display summary.
    fn author(&self, id: Uuid) -> Result<Option<AuthorSummary>>;
}
