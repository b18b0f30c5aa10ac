//! Content item and author data model.
//!
//! A [`ContentItem`] is one published (or draft) piece of content. Its
//! identity is a random UUID: globally unique, but carrying no creation
//! order. Anything that needs a stable ordering must sort on real columns
//! (publication timestamp, relevance score) and only use the identity as a
//! final tie-break.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single content item owned by an author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Opaque identity. Random, not sortable by creation order.
    pub id: Uuid,

    /// Title text, always present.
    pub title: String,

    /// Optional short excerpt shown in listings.
    pub excerpt: Option<String>,

    /// Raw markdown body.
    pub body: String,

    /// Whether the item is visible to readers.
    pub published: bool,

    /// Publication timestamp; `None` until the item is published.
    pub published_at: Option<DateTime<Utc>>,

    /// Identity of the owning author.
    pub author_id: Uuid,
}

impl ContentItem {
    /// The excerpt, or an empty string when absent.
    pub fn excerpt_or_empty(&self) -> &str {
        self.excerpt.as_deref().unwrap_or("")
    }
}

/// Minimal author projection joined into search results for display.
///
/// Never mutated by the search subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    /// Author identity.
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Unique handle, as stored (case-sensitive).
    pub handle: String,

    /// Avatar image reference, if any.
    pub avatar: Option<String>,
}
