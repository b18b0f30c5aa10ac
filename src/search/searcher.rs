//! The search engine: planning, execution, recovery, pagination.
//!
//! [`SearchEngine::search`] walks the request through the full pipeline:
//!
//! ```text
//! PLANNING -> RANKED_MATCH | FALLBACK_MATCH -> FILTERED -> PAGINATED -> DONE
//!                  |
//!                  +-- ERROR_RECOVERY --> FALLBACK_MATCH
//! ```
//!
//! A read request never surfaces an internal error: a failing ranked
//! branch re-runs as a substring match with identical filters and cursor,
//! and a failing fallback degrades to an empty page. Both degradations are
//! logged. Zero results is a valid outcome of either branch, not an error.

use std::sync::Arc;

use ahash::AHashMap;
use chrono::{DateTime, Utc};
use log::{error, warn};
use uuid::Uuid;

use crate::document::content::AuthorSummary;
use crate::error::Result;
use crate::query::filter::FilterSet;
use crate::query::plan::{FallbackPlan, QueryPlan, RankedPlan, NEUTRAL_SCORE};
use crate::query::planner::QueryPlanner;
use crate::query::request::SearchRequest;
use crate::query::scorer::ZoneScorer;
use crate::search::cursor::SortKey;
use crate::search::paginator::{paginate, Page, ScoredHit};
use crate::storage::ContentStore;

/// Stateless search service over a content store.
///
/// Every call re-evaluates against the store's current state; two pages of
/// one pagination walk may observe different totals if content is
/// published in between (best-effort consistency, not snapshot isolation).
pub struct SearchEngine {
    store: Arc<dyn ContentStore>,
    planner: QueryPlanner,
    scorer: ZoneScorer,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("planner", &self.planner)
            .finish()
    }
}

impl SearchEngine {
    /// Create an engine over the given store.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        SearchEngine {
            store,
            planner: QueryPlanner::new(),
            scorer: ZoneScorer::new(),
        }
    }

    /// Execute a search request, resolving the recency window against the
    /// current wall clock.
    pub fn search(&self, request: &SearchRequest) -> Result<Page> {
        self.search_at(request, Utc::now())
    }

    /// Execute a search request with an explicit "now".
    ///
    /// The recency cutoff is computed once from `now` and every candidate
    /// sees the same cutoff.
    pub fn search_at(&self, request: &SearchRequest, now: DateTime<Utc>) -> Result<Page> {
        // Empty text is defined as an empty page; no planning, no store
        // access.
        if request.text.trim().is_empty() {
            return Ok(Page::empty());
        }

        let cursor = match request.cursor.as_deref() {
            Some(token) => match SortKey::decode(token) {
                Ok(key) => Some(key),
                Err(e) => {
                    warn!("undecodable cursor, returning empty page: {e}");
                    return Ok(Page::empty());
                }
            },
            None => None,
        };

        let filters = FilterSet::from_request(request, now);
        let page_size = request.effective_page_size();

        let plan = match self.planner.plan(&request.text) {
            Ok(plan) => plan,
            Err(e) => {
                warn!("query planning failed, using substring fallback: {e}");
                QueryPlan::Fallback(self.planner.fallback_plan(&request.text))
            }
        };

        let page = match plan {
            QueryPlan::Empty => Page::empty(),
            QueryPlan::Ranked(ranked) => {
                let ranked_page = self
                    .execute_ranked(&ranked, &filters)
                    .and_then(|hits| paginate(hits, cursor.as_ref(), page_size));
                match ranked_page {
                    Ok(page) => page,
                    Err(e) => {
                        // ERROR_RECOVERY: re-run as substring match with
                        // the same filters and cursor.
                        warn!("ranked search failed, falling back to substring match: {e}");
                        let fallback = self.planner.fallback_plan(&request.text);
                        self.run_fallback(&fallback, &filters, cursor.as_ref(), page_size)
                    }
                }
            }
            QueryPlan::Fallback(fallback) => {
                self.run_fallback(&fallback, &filters, cursor.as_ref(), page_size)
            }
        };

        Ok(page)
    }

    fn run_fallback(
        &self,
        plan: &FallbackPlan,
        filters: &FilterSet,
        cursor: Option<&SortKey>,
        page_size: usize,
    ) -> Page {
        match self.execute_fallback(plan, filters) {
            Ok(hits) => match paginate(hits, cursor, page_size) {
                Ok(page) => page,
                Err(e) => {
                    error!("fallback pagination failed, returning empty page: {e}");
                    Page::empty()
                }
            },
            Err(e) => {
                error!("fallback search failed, returning empty page: {e}");
                Page::empty()
            }
        }
    }

    /// Ranked branch: all query terms must match the weighted document;
    /// relevance is the weighted zone term-frequency score.
    fn execute_ranked(&self, plan: &RankedPlan, filters: &FilterSet) -> Result<Vec<ScoredHit>> {
        let rows = self.store.published_documents()?;
        let mut authors = AuthorCache::default();
        let mut hits = Vec::new();

        for (item, document) in rows {
            if !plan.matches(&document) {
                continue;
            }
            let Some(author) = authors.resolve(self.store.as_ref(), item.author_id)? else {
                // No author row: the display join is an inner join.
                continue;
            };
            if !filters.matches(&item, Some(&author.handle)) {
                continue;
            }
            let score = self.scorer.score(&document, &plan.terms);
            hits.push(ScoredHit {
                item,
                author,
                score,
            });
        }

        Ok(hits)
    }

    /// Fallback branch: case-insensitive substring match over title and
    /// excerpt only, neutral score for every match.
    fn execute_fallback(
        &self,
        plan: &FallbackPlan,
        filters: &FilterSet,
    ) -> Result<Vec<ScoredHit>> {
        let rows = self.store.published_summaries()?;
        let mut authors = AuthorCache::default();
        let mut hits = Vec::new();

        for item in rows {
            if !plan.matches(&item) {
                continue;
            }
            let Some(author) = authors.resolve(self.store.as_ref(), item.author_id)? else {
                continue;
            };
            if !filters.matches(&item, Some(&author.handle)) {
                continue;
            }
            hits.push(ScoredHit {
                item,
                author,
                score: NEUTRAL_SCORE,
            });
        }

        Ok(hits)
    }
}

/// Per-request author lookup cache so one author's summary is fetched at
/// most once per branch execution.
#[derive(Default)]
struct AuthorCache {
    entries: AHashMap<Uuid, Option<AuthorSummary>>,
}

impl AuthorCache {
    fn resolve(
        &mut self,
        store: &dyn ContentStore,
        author_id: Uuid,
    ) -> Result<Option<AuthorSummary>> {
        if let Some(cached) = self.entries.get(&author_id) {
            return Ok(cached.clone());
        }
        let summary = store.author(author_id)?;
        self.entries.insert(author_id, summary.clone());
        Ok(summary)
    }
}
