//! Keyset pagination over scored hits.
//!
//! The paginator sorts candidates with the composite display comparator,
//! drops everything at or before the cursor position, fetches one row more
//! than the page size to detect a further page, and emits the next cursor
//! as the composite key of the last retained row.

use serde::{Deserialize, Serialize};

use crate::document::content::{AuthorSummary, ContentItem};
use crate::error::Result;
use crate::search::cursor::SortKey;

/// A matched item with its relevance score and joined author.
#[derive(Debug, Clone)]
pub struct ScoredHit {
    /// The matched content item.
    pub item: ContentItem,

    /// The item's author, joined for display.
    pub author: AuthorSummary,

    /// Relevance score (neutral zero under fallback matching).
    pub score: f32,
}

impl ScoredHit {
    /// The composite sort key of this hit.
    pub fn sort_key(&self) -> SortKey {
        SortKey {
            score: self.score,
            published_at: self.item.published_at,
            id: self.item.id,
        }
    }
}

/// One result row of a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEntry {
    /// The matched content item.
    pub item: ContentItem,

    /// The item's author.
    pub author: AuthorSummary,
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Result rows in display order.
    pub items: Vec<PageEntry>,

    /// Whether more pages exist past this one.
    pub has_more: bool,

    /// Opaque cursor for the next page; `None` on the last page.
    pub next_cursor: Option<String>,
}

impl Page {
    /// The empty page: no items, no further pages.
    pub fn empty() -> Self {
        Page {
            items: Vec::new(),
            has_more: false,
            next_cursor: None,
        }
    }
}

/// Paginate scored hits.
///
/// Sorts by the composite display order, applies the strictly-after cursor
/// predicate under that same order, then over-fetches by one row: if more
/// than `page_size` rows remain, the page truncates and carries a cursor
/// encoding the last retained row's full sort key.
pub fn paginate(
    mut hits: Vec<ScoredHit>,
    cursor: Option<&SortKey>,
    page_size: usize,
) -> Result<Page> {
    hits.sort_by(|a, b| a.sort_key().display_cmp(&b.sort_key()));

    if let Some(cursor) = cursor {
        hits.retain(|hit| hit.sort_key().sorts_after(cursor));
    }

    // Fetch page_size + 1 to learn whether a further page exists.
    hits.truncate(page_size + 1);
    let has_more = hits.len() > page_size;
    hits.truncate(page_size);

    let next_cursor = if has_more {
        match hits.last() {
            Some(last) => Some(last.sort_key().encode()?),
            None => None,
        }
    } else {
        None
    };

    Ok(Page {
        items: hits
            .into_iter()
            .map(|hit| PageEntry {
                item: hit.item,
                author: hit.author,
            })
            .collect(),
        has_more,
        next_cursor,
    })
}
