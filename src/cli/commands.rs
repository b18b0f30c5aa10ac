//! Command implementations for the Gazette CLI.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cli::args::{AuthorsArgs, Command, GazetteArgs, SearchArgs};
use crate::cli::output::{print_authors, print_page};
use crate::document::content::{AuthorSummary, ContentItem};
use crate::error::Result;
use crate::query::request::SearchRequest;
use crate::search::authors::authors_with_published_counts;
use crate::search::searcher::SearchEngine;
use crate::storage::memory::MemoryContentStore;

/// A content corpus loaded from disk: authors plus items.
#[derive(Debug, Serialize, Deserialize)]
pub struct Corpus {
    /// Author directory.
    pub authors: Vec<AuthorSummary>,

    /// Content items, drafts included.
    pub items: Vec<ContentItem>,
}

/// Execute a CLI command.
pub fn execute_command(args: GazetteArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args.clone(), &args),
        Command::Authors(authors_args) => run_authors(authors_args.clone(), &args),
    }
}

/// Load a corpus file into a fresh in-memory store.
///
/// Every item goes through the synchronous write path, so a corpus row
/// that fails indexing fails the whole load, the same all-or-nothing
/// contract the platform's content writes have.
pub fn load_corpus(path: &Path) -> Result<MemoryContentStore> {
    let file = File::open(path)?;
    let corpus: Corpus = serde_json::from_reader(BufReader::new(file))?;

    let store = MemoryContentStore::new();
    for author in corpus.authors {
        store.put_author(author);
    }
    for item in corpus.items {
        store.put_item(item)?;
    }
    Ok(store)
}

fn run_search(args: SearchArgs, cli_args: &GazetteArgs) -> Result<()> {
    let store = load_corpus(&args.corpus)?;
    if cli_args.verbosity() > 1 {
        println!("Loaded {} items from {}", store.item_count(), args.corpus.display());
    }

    let engine = SearchEngine::new(Arc::new(store));

    let mut request = SearchRequest::new(args.query);
    if let Some(author) = args.author {
        request = request.with_author(author);
    }
    if let Some(window) = args.window {
        request = request.with_recency(window.into());
    }
    if let Some(cursor) = args.cursor {
        request = request.with_cursor(cursor);
    }
    if let Some(page_size) = args.page_size {
        request = request.with_page_size(page_size);
    }

    let page = engine.search(&request)?;
    print_page(&page, cli_args)
}

fn run_authors(args: AuthorsArgs, cli_args: &GazetteArgs) -> Result<()> {
    let store = load_corpus(&args.corpus)?;
    let authors = authors_with_published_counts(&store, args.limit)?;
    print_authors(&authors, cli_args)
}
