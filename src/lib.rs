//! # Gazette
//!
//! Content search and pagination engine for a publishing platform.
//!
//! ## Features
//!
//! - Weighted zone indexing (title > excerpt > body) rebuilt synchronously
//!   on every content write
//! - Fixed English analysis pipeline shared by indexing and querying
//! - Ranked term matching with substring fallback when a query carries no
//!   indexable terms or ranked execution fails
//! - Structured filters (author handle, recency window) AND-composed with
//!   the text predicate
//! - Keyset pagination with an opaque cursor over the full composite sort
//!   order

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod query;
pub mod search;
pub mod storage;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
