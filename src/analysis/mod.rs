//! Text analysis pipeline: char filters, tokenization, token filters.
//!
//! The entry point is [`analyzer::Analyzer::english`], the single fixed
//! configuration shared by the document indexer and the query planner.

pub mod analyzer;
pub mod char_filter;
pub mod stemmer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::Analyzer;
pub use char_filter::{CharFilter, MarkdownStripFilter};
pub use token::{Token, TokenStream};
