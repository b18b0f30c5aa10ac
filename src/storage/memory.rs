//! In-memory content store implementation.
//!
//! Backs the CLI and the test suites. The write path runs the document
//! indexer synchronously: a content write either lands with its freshly
//! built weighted document or not at all.
//!
//! Fault injection toggles let tests simulate a store whose ranked read
//! shape fails while the summary shape still works (and vice versa), which
//! is exactly the situation the query planner's recovery ladder exists for.

use std::sync::atomic::{AtomicBool, Ordering};

use ahash::AHashMap;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::document::content::{AuthorSummary, ContentItem};
use crate::document::indexer::DocumentIndexer;
use crate::document::weighted::WeightedDocument;
use crate::error::{GazetteError, Result};
use crate::storage::ContentStore;

/// One stored row: the item and its derived search document.
#[derive(Debug, Clone)]
struct StoredItem {
    item: ContentItem,
    document: WeightedDocument,
}

/// An in-memory content store.
#[derive(Debug)]
pub struct MemoryContentStore {
    items: RwLock<AHashMap<Uuid, StoredItem>>,
    authors: RwLock<AHashMap<Uuid, AuthorSummary>>,
    indexer: DocumentIndexer,
    fail_documents: AtomicBool,
    fail_summaries: AtomicBool,
}

impl MemoryContentStore {
    /// Create an empty store with the default indexer.
    pub fn new() -> Self {
        MemoryContentStore::with_indexer(DocumentIndexer::new())
    }

    /// Create an empty store with a custom indexer.
    pub fn with_indexer(indexer: DocumentIndexer) -> Self {
        MemoryContentStore {
            items: RwLock::new(AHashMap::new()),
            authors: RwLock::new(AHashMap::new()),
            indexer,
            fail_documents: AtomicBool::new(false),
            fail_summaries: AtomicBool::new(false),
        }
    }

    /// Register or replace an author.
    pub fn put_author(&self, author: AuthorSummary) {
        self.authors.write().insert(author.id, author);
    }

    /// Write a content item, indexing it synchronously.
    ///
    /// If indexing fails the store is left untouched and the error
    /// propagates: the enclosing content write must abort rather than
    /// leave a published item without a search document.
    pub fn put_item(&self, item: ContentItem) -> Result<()> {
        let document = self
            .indexer
            .index(&item.title, item.excerpt.as_deref(), &item.body)?;

        self.items
            .write()
            .insert(item.id, StoredItem { item, document });
        Ok(())
    }

    /// Rewrite an existing item's content, reindexing it in the same
    /// write.
    ///
    /// The search document is recomputed from the new content before the
    /// row is touched; if indexing fails, the stored item keeps its old
    /// content and old document.
    pub fn update_content(
        &self,
        id: Uuid,
        title: &str,
        excerpt: Option<&str>,
        body: &str,
    ) -> Result<()> {
        let document = self.indexer.index(title, excerpt, body)?;

        let mut items = self.items.write();
        let stored = items
            .get_mut(&id)
            .ok_or_else(|| GazetteError::store(format!("no item with id {id}")))?;

        stored.item.title = title.to_string();
        stored.item.excerpt = excerpt.map(str::to_string);
        stored.item.body = body.to_string();
        stored.document = document;
        Ok(())
    }

    /// Remove an item. Its search document goes with it.
    pub fn remove_item(&self, id: Uuid) -> bool {
        self.items.write().remove(&id).is_some()
    }

    /// Number of stored items, published or not.
    pub fn item_count(&self) -> usize {
        self.items.read().len()
    }

    /// Make `published_documents` fail until cleared. Test hook for the
    /// ranked branch's error-recovery transition.
    pub fn set_fail_documents(&self, fail: bool) {
        self.fail_documents.store(fail, Ordering::SeqCst);
    }

    /// Make `published_summaries` fail until cleared. Test hook for the
    /// fallback branch's empty-page degradation.
    pub fn set_fail_summaries(&self, fail: bool) {
        self.fail_summaries.store(fail, Ordering::SeqCst);
    }
}

impl Default for MemoryContentStore {
    fn default() -> Self {
        MemoryContentStore::new()
    }
}

impl ContentStore for MemoryContentStore {
    fn published_documents(&self) -> Result<Vec<(ContentItem, WeightedDocument)>> {
        if self.fail_documents.load(Ordering::SeqCst) {
            return Err(GazetteError::store("document read failure (injected)"));
        }

        Ok(self
            .items
            .read()
            .values()
            .filter(|stored| stored.item.published)
            .map(|stored| (stored.item.clone(), stored.document.clone()))
            .collect())
    }

    fn published_summaries(&self) -> Result<Vec<ContentItem>> {
        if self.fail_summaries.load(Ordering::SeqCst) {
            return Err(GazetteError::store("summary read failure (injected)"));
        }

        Ok(self
            .items
            .read()
            .values()
            .filter(|stored| stored.item.published)
            .map(|stored| stored.item.clone())
            .collect())
    }

    fn author(&self, id: Uuid) -> Result<Option<AuthorSummary>> {
        Ok(self.authors.read().get(&id).cloned())
    }
}
