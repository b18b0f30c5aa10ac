//! Search execution: the engine, keyset pagination, and the author
//! aggregate.

pub mod authors;
pub mod cursor;
pub mod paginator;
pub mod searcher;

pub use authors::{authors_with_published_counts, AuthorWithCount, DEFAULT_AUTHOR_LIMIT};
pub use cursor::SortKey;
pub use paginator::{Page, PageEntry, ScoredHit};
pub use searcher::SearchEngine;
