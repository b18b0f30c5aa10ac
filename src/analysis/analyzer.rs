//! Analyzers that combine char filters, a tokenizer, and token filters.
//!
//! The whole engine runs on exactly one analyzer configuration,
//! [`Analyzer::english`]: the document indexer uses it to build per-zone
//! terms and the query planner uses it to tokenize free text. Sharing the
//! pipeline is what makes index terms and query terms agree.
//!
//! # Examples
//!
//! ```
//! use gazette::analysis::analyzer::Analyzer;
//!
//! let analyzer = Analyzer::english();
//! let terms = analyzer.terms("The Ocean Currents").unwrap();
//!
//! assert_eq!(terms, vec!["ocean".to_string(), "current".to_string()]);
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, LowercaseFilter, StemFilter, StopFilter};
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::error::Result;

/// A text analysis pipeline: char filters, then a tokenizer, then token
/// filters in the order they were added.
#[derive(Clone)]
pub struct Analyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field("char_filters", &self.char_filters.len())
            .field("filters", &self.filters.len())
            .finish()
    }
}

impl Analyzer {
    /// Create a new analyzer with the given tokenizer and no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Analyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// The fixed English pipeline used by both indexing and querying:
    /// word tokenizer, lowercase, stop words, suffix stemming.
    pub fn english() -> Self {
        Analyzer::new(Arc::new(WordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(StemFilter::new()))
            .with_name("english")
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a token filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the analyzer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the full pipeline over the given text.
    pub fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut filtered_text = text.to_string();
        for char_filter in &self.char_filters {
            filtered_text = char_filter.filter(&filtered_text);
        }

        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    /// Analyze text down to its term strings.
    ///
    /// May legitimately return an empty vector, e.g. for a query that is
    /// entirely stop words. That emptiness is a planning signal, not an
    /// error.
    pub fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}
