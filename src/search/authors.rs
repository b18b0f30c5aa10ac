//! Author aggregate for the search filter control.
//!
//! Read-only: counts of published items per author, joined with the author
//! directory, sorted by count descending. Used only to populate a filter
//! selector; there is no pagination and the result is capped.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::storage::ContentStore;

/// Default cap on the number of authors returned.
pub const DEFAULT_AUTHOR_LIMIT: usize = 50;

/// One author with their published item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorWithCount {
    /// Unique handle.
    pub handle: String,

    /// Display name.
    pub name: String,

    /// Avatar image reference, if any.
    pub avatar: Option<String>,

    /// Number of published items.
    pub count: u64,
}

/// Count published items per author.
///
/// Sorted by count descending, then handle ascending so equal counts
/// render stably. Authors missing from the directory are skipped (inner
/// join). `limit` of `None` applies the default cap.
pub fn authors_with_published_counts(
    store: &dyn ContentStore,
    limit: Option<usize>,
) -> Result<Vec<AuthorWithCount>> {
    let limit = limit.unwrap_or(DEFAULT_AUTHOR_LIMIT);

    let mut counts: AHashMap<Uuid, u64> = AHashMap::new();
    for item in store.published_summaries()? {
        *counts.entry(item.author_id).or_insert(0) += 1;
    }

    let mut authors = Vec::with_capacity(counts.len());
    for (author_id, count) in counts {
        if let Some(summary) = store.author(author_id)? {
            authors.push(AuthorWithCount {
                handle: summary.handle,
                name: summary.name,
                avatar: summary.avatar,
                count,
            });
        }
    }

    authors.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.handle.cmp(&b.handle)));
    authors.truncate(limit);
    Ok(authors)
}
