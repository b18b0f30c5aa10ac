//! Output formatting for CLI commands.

use crate::cli::args::{GazetteArgs, OutputFormat};
use crate::error::Result;
use crate::search::authors::AuthorWithCount;
use crate::search::paginator::Page;

/// Print one result page in the requested format.
pub fn print_page(page: &Page, args: &GazetteArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(page)?);
        }
        OutputFormat::Human => {
            if page.items.is_empty() {
                println!("No results.");
            }
            for (i, entry) in page.items.iter().enumerate() {
                let date = entry
                    .item
                    .published_at
                    .map(|ts| ts.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "unpublished".to_string());
                println!("{:>3}. {} by @{} ({date})", i + 1, entry.item.title, entry.author.handle);
                if let Some(excerpt) = &entry.item.excerpt {
                    println!("     {excerpt}");
                }
            }
            if page.has_more {
                if let Some(cursor) = &page.next_cursor {
                    println!("\nMore results available; resume with --cursor {cursor}");
                }
            }
        }
    }
    Ok(())
}

/// Print the author aggregate in the requested format.
pub fn print_authors(authors: &[AuthorWithCount], args: &GazetteArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(authors)?);
        }
        OutputFormat::Human => {
            if authors.is_empty() {
                println!("No authors with published items.");
            }
            for author in authors {
                println!("{:>5}  @{}  {}", author.count, author.handle, author.name);
            }
        }
    }
    Ok(())
}
