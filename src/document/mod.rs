//! Content data model and document indexing.

pub mod content;
pub mod indexer;
pub mod weighted;

pub use content::{AuthorSummary, ContentItem};
pub use indexer::DocumentIndexer;
pub use weighted::{WeightedDocument, Zone};
