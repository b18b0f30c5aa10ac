//! Integration tests for the search engine: planning, fallback recovery,
//! filters, ranking, and the author aggregate.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use gazette::analysis::analyzer::Analyzer;
use gazette::analysis::token::TokenStream;
use gazette::analysis::token_filter::Filter;
use gazette::document::content::{AuthorSummary, ContentItem};
use gazette::document::indexer::DocumentIndexer;
use gazette::document::weighted::WeightedDocument;
use gazette::error::{GazetteError, Result};
use gazette::query::request::{RecencyWindow, SearchRequest};
use gazette::search::authors::authors_with_published_counts;
use gazette::search::searcher::SearchEngine;
use gazette::storage::memory::MemoryContentStore;
use gazette::storage::ContentStore;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap()
}

fn author(byte: u8, handle: &str, name: &str) -> AuthorSummary {
    AuthorSummary {
        id: Uuid::from_bytes([byte; 16]),
        name: name.to_string(),
        handle: handle.to_string(),
        avatar: None,
    }
}

fn item(
    byte: u8,
    author: &AuthorSummary,
    title: &str,
    excerpt: Option<&str>,
    body: &str,
    days_before_now: i64,
) -> ContentItem {
    ContentItem {
        id: Uuid::from_bytes([byte; 16]),
        title: title.to_string(),
        excerpt: excerpt.map(str::to_string),
        body: body.to_string(),
        published: true,
        published_at: Some(fixed_now() - chrono::Duration::days(days_before_now)),
        author_id: author.id,
    }
}

/// Store + two authors, pre-registered.
fn store_with_authors() -> (MemoryContentStore, AuthorSummary, AuthorSummary) {
    let store = MemoryContentStore::new();
    let ada = author(1, "ada", "Ada Lovelace");
    let grace = author(2, "grace", "Grace Hopper");
    store.put_author(ada.clone());
    store.put_author(grace.clone());
    (store, ada, grace)
}

fn titles(page: &gazette::search::paginator::Page) -> Vec<String> {
    page.items.iter().map(|e| e.item.title.clone()).collect()
}

#[test]
fn test_empty_query_returns_empty_page_without_store_access() -> Result<()> {
    let (inner, ada, _) = store_with_authors();
    inner.put_item(item(10, &ada, "Ocean Currents", None, "salt water", 1))?;

    let store = Arc::new(CountingStore::new(inner));
    let engine = SearchEngine::new(store.clone());

    for text in ["", "   ", "\t\n"] {
        let page = engine.search_at(&SearchRequest::new(text), fixed_now())?;
        assert!(page.items.is_empty());
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }

    assert_eq!(store.reads(), 0, "empty query must not touch the store");
    Ok(())
}

#[test]
fn test_stop_word_query_takes_fallback_branch() -> Result<()> {
    let (store, ada, _) = store_with_authors();
    // Title contains the literal phrase; body terms are indexed but the
    // fallback never scans bodies.
    store.put_item(item(10, &ada, "The Where and When", None, "irrelevant", 2))?;
    store.put_item(item(11, &ada, "Ocean Currents", None, "the where the where", 1))?;

    let engine = SearchEngine::new(Arc::new(store));
    let page = engine.search_at(&SearchRequest::new("the where"), fixed_now())?;

    // Ranked matching would have found nothing (both words are stop
    // words); the substring fallback finds the title phrase only.
    assert_eq!(titles(&page), vec!["The Where and When".to_string()]);
    Ok(())
}

#[test]
fn test_title_match_outranks_body_match() -> Result<()> {
    let (store, ada, _) = store_with_authors();
    store.put_item(item(10, &ada, "Harbor Lights", None, "no match terms here", 1))?;
    store.put_item(item(11, &ada, "Evening Walk", None, "we passed the harbor at dusk", 1))?;

    let engine = SearchEngine::new(Arc::new(store));
    let page = engine.search_at(&SearchRequest::new("harbor"), fixed_now())?;

    assert_eq!(
        titles(&page),
        vec!["Harbor Lights".to_string(), "Evening Walk".to_string()]
    );
    Ok(())
}

#[test]
fn test_title_zone_outranks_excerpt_zone_for_equal_frequency() -> Result<()> {
    let (store, ada, _) = store_with_authors();
    // A: single occurrence in the title, published earlier.
    store.put_item(item(10, &ada, "Ocean Currents", None, "tides and salt", 5))?;
    // B: single occurrence in the excerpt, published later.
    store.put_item(item(
        11,
        &ada,
        "Tide Pools",
        Some("Notes on ocean life"),
        "small worlds",
        1,
    ))?;

    let engine = SearchEngine::new(Arc::new(store));
    let page = engine.search_at(&SearchRequest::new("ocean"), fixed_now())?;

    // Equal single-occurrence matches: the title zone wins even though B
    // is newer.
    assert_eq!(
        titles(&page),
        vec!["Ocean Currents".to_string(), "Tide Pools".to_string()]
    );
    Ok(())
}

#[test]
fn test_multi_term_query_requires_all_terms() -> Result<()> {
    let (store, ada, _) = store_with_authors();
    store.put_item(item(10, &ada, "Ocean Currents", None, "salt", 1))?;
    store.put_item(item(11, &ada, "Ocean Weather", None, "wind", 1))?;

    let engine = SearchEngine::new(Arc::new(store));
    let page = engine.search_at(&SearchRequest::new("ocean current"), fixed_now())?;

    assert_eq!(titles(&page), vec!["Ocean Currents".to_string()]);
    Ok(())
}

#[test]
fn test_unpublished_items_never_match() -> Result<()> {
    let (store, ada, _) = store_with_authors();
    let mut draft = item(10, &ada, "Ocean Draft", None, "ocean ocean", 1);
    draft.published = false;
    draft.published_at = None;
    store.put_item(draft)?;

    let engine = SearchEngine::new(Arc::new(store));
    let page = engine.search_at(&SearchRequest::new("ocean"), fixed_now())?;
    assert!(page.items.is_empty());

    // The fallback branch must exclude drafts too.
    let page = engine.search_at(&SearchRequest::new("the where"), fixed_now())?;
    assert!(page.items.is_empty());
    Ok(())
}

#[test]
fn test_filter_conjunction_and_superset_on_removal() -> Result<()> {
    let (store, ada, grace) = store_with_authors();
    store.put_item(item(10, &ada, "Ocean One", None, "x", 2))?;
    store.put_item(item(11, &ada, "Ocean Two", None, "x", 60))?;
    store.put_item(item(12, &grace, "Ocean Three", None, "x", 2))?;
    store.put_item(item(13, &grace, "Ocean Four", None, "x", 60))?;

    let engine = SearchEngine::new(Arc::new(store));

    let both = engine.search_at(
        &SearchRequest::new("ocean")
            .with_author("ada")
            .with_recency(RecencyWindow::Month),
        fixed_now(),
    )?;
    assert_eq!(titles(&both), vec!["Ocean One".to_string()]);

    let author_only = engine.search_at(
        &SearchRequest::new("ocean").with_author("ada"),
        fixed_now(),
    )?;
    let recency_only = engine.search_at(
        &SearchRequest::new("ocean").with_recency(RecencyWindow::Month),
        fixed_now(),
    )?;

    // Dropping either filter only ever adds items.
    for title in titles(&both) {
        assert!(titles(&author_only).contains(&title));
        assert!(titles(&recency_only).contains(&title));
    }
    assert_eq!(author_only.items.len(), 2);
    assert_eq!(recency_only.items.len(), 2);
    Ok(())
}

#[test]
fn test_author_filter_is_case_sensitive() -> Result<()> {
    let (store, ada, _) = store_with_authors();
    store.put_item(item(10, &ada, "Ocean One", None, "x", 1))?;

    let engine = SearchEngine::new(Arc::new(store));
    let page = engine.search_at(
        &SearchRequest::new("ocean").with_author("Ada"),
        fixed_now(),
    )?;
    assert!(page.items.is_empty(), "handle comparison is exact as stored");
    Ok(())
}

#[test]
fn test_fallback_score_is_neutral_and_order_is_recency() -> Result<()> {
    let (store, ada, _) = store_with_authors();
    // "the" occurs late in one title and early in the other; position
    // must not matter, only the publication timestamp.
    store.put_item(item(10, &ada, "The Old Sea", None, "x", 20))?;
    store.put_item(item(11, &ada, "Gather The Nets", None, "x", 3))?;

    let engine = SearchEngine::new(Arc::new(store));
    let page = engine.search_at(&SearchRequest::new("the"), fixed_now())?;

    assert_eq!(
        titles(&page),
        vec!["Gather The Nets".to_string(), "The Old Sea".to_string()]
    );
    Ok(())
}

#[test]
fn test_ranked_failure_recovers_via_substring_fallback() -> Result<()> {
    let (store, ada, _) = store_with_authors();
    store.put_item(item(10, &ada, "Ocean Currents", None, "salt water", 2))?;
    store.put_item(item(11, &ada, "Ocean Weather", None, "wind", 1))?;
    // Body-only match: visible to ranked search, invisible to fallback.
    store.put_item(item(12, &ada, "Quiet Cove", None, "the ocean at rest", 1))?;

    store.set_fail_documents(true);
    let engine = SearchEngine::new(Arc::new(store));
    let page = engine.search_at(&SearchRequest::new("ocean"), fixed_now())?;

    // Substring match over title/excerpt, neutral rank, newest first.
    assert_eq!(
        titles(&page),
        vec!["Ocean Weather".to_string(), "Ocean Currents".to_string()]
    );
    Ok(())
}

#[test]
fn test_ranked_failure_fallback_applies_same_filters() -> Result<()> {
    let (store, ada, grace) = store_with_authors();
    store.put_item(item(10, &ada, "Ocean One", None, "x", 2))?;
    store.put_item(item(11, &grace, "Ocean Two", None, "x", 1))?;

    store.set_fail_documents(true);
    let engine = SearchEngine::new(Arc::new(store));
    let page = engine.search_at(
        &SearchRequest::new("ocean").with_author("ada"),
        fixed_now(),
    )?;

    assert_eq!(titles(&page), vec!["Ocean One".to_string()]);
    Ok(())
}

#[test]
fn test_double_failure_returns_empty_page() -> Result<()> {
    let (store, ada, _) = store_with_authors();
    store.put_item(item(10, &ada, "Ocean Currents", None, "x", 1))?;

    store.set_fail_documents(true);
    store.set_fail_summaries(true);
    let engine = SearchEngine::new(Arc::new(store));
    let page = engine.search_at(&SearchRequest::new("ocean"), fixed_now())?;

    assert!(page.items.is_empty());
    assert!(!page.has_more);
    assert!(page.next_cursor.is_none());
    Ok(())
}

#[test]
fn test_malformed_cursor_degrades_to_empty_page() -> Result<()> {
    let (store, ada, _) = store_with_authors();
    store.put_item(item(10, &ada, "Ocean Currents", None, "x", 1))?;

    let engine = SearchEngine::new(Arc::new(store));
    let page = engine.search_at(
        &SearchRequest::new("ocean").with_cursor("!!not-a-cursor!!"),
        fixed_now(),
    )?;

    assert!(page.items.is_empty());
    assert!(!page.has_more);
    Ok(())
}

#[test]
fn test_zero_results_is_a_valid_outcome_not_an_error() -> Result<()> {
    let (store, ada, _) = store_with_authors();
    store.put_item(item(10, &ada, "Ocean Currents", None, "x", 1))?;

    let engine = SearchEngine::new(Arc::new(store));
    let page = engine.search_at(&SearchRequest::new("volcano"), fixed_now())?;

    assert!(page.items.is_empty());
    assert!(!page.has_more);
    Ok(())
}

#[test]
fn test_indexing_failure_aborts_the_write() {
    let analyzer = Analyzer::english().add_filter(Arc::new(FailingFilter));
    let store = MemoryContentStore::with_indexer(DocumentIndexer::with_analyzer(analyzer));
    let ada = author(1, "ada", "Ada Lovelace");
    store.put_author(ada.clone());

    let result = store.put_item(item(10, &ada, "Ocean Currents", None, "x", 1));

    assert!(result.is_err(), "indexing failure must propagate to the write");
    assert_eq!(store.item_count(), 0, "failed write must leave no partial row");
}

#[test]
fn test_authors_with_published_counts() -> Result<()> {
    let (store, ada, grace) = store_with_authors();
    let orphaned = author(3, "ghost", "No Directory Row");
    store.put_item(item(10, &ada, "One", None, "x", 1))?;
    store.put_item(item(11, &ada, "Two", None, "x", 2))?;
    store.put_item(item(12, &ada, "Three", None, "x", 3))?;
    store.put_item(item(13, &grace, "Four", None, "x", 1))?;
    let mut draft = item(14, &grace, "Draft", None, "x", 1);
    draft.published = false;
    draft.published_at = None;
    store.put_item(draft)?;
    // Published item whose author is missing from the directory.
    store.put_item(item(15, &orphaned, "Five", None, "x", 1))?;

    let authors = authors_with_published_counts(&store, None)?;

    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].handle, "ada");
    assert_eq!(authors[0].count, 3);
    assert_eq!(authors[1].handle, "grace");
    assert_eq!(authors[1].count, 1, "drafts are not counted");
    Ok(())
}

#[test]
fn test_authors_aggregate_limit_and_tie_order() -> Result<()> {
    let store = MemoryContentStore::new();
    for (byte, handle) in [(1u8, "zoe"), (2, "abe"), (3, "mia")] {
        let a = author(byte, handle, handle);
        store.put_author(a.clone());
        store.put_item(item(byte + 10, &a, "Post", None, "x", 1))?;
    }

    let authors = authors_with_published_counts(&store, Some(2))?;

    // Equal counts order by handle ascending; the cap applies after.
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].handle, "abe");
    assert_eq!(authors[1].handle, "mia");
    Ok(())
}

/// Token filter that always fails; drives the all-or-nothing write test.
struct FailingFilter;

impl Filter for FailingFilter {
    fn filter(&self, _tokens: TokenStream) -> Result<TokenStream> {
        Err(GazetteError::analysis("injected analysis failure"))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Store wrapper that counts read calls; proves the empty-query short
/// circuit never touches the store.
struct CountingStore {
    inner: MemoryContentStore,
    reads: AtomicUsize,
}

impl CountingStore {
    fn new(inner: MemoryContentStore) -> Self {
        CountingStore {
            inner,
            reads: AtomicUsize::new(0),
        }
    }

    fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ContentStore for CountingStore {
    fn published_documents(&self) -> Result<Vec<(ContentItem, WeightedDocument)>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.published_documents()
    }

    fn published_summaries(&self) -> Result<Vec<ContentItem>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.published_summaries()
    }

    fn author(&self, id: Uuid) -> Result<Option<AuthorSummary>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.author(id)
    }
}
