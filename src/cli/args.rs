//! Command line argument parsing for the Gazette CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::query::request::RecencyWindow;

/// Gazette - content search for a publishing platform
#[derive(Parser, Debug, Clone)]
#[command(name = "gazette")]
#[command(about = "Content search and pagination engine for a publishing platform")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GazetteArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GazetteArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a content corpus
    #[command(name = "search")]
    Search(SearchArgs),

    /// List authors with published item counts
    #[command(name = "authors")]
    Authors(AuthorsArgs),
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the JSON corpus file
    #[arg(short, long)]
    pub corpus: PathBuf,

    /// Free-text query
    pub query: String,

    /// Restrict to one author handle (exact match)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Restrict to a recency window
    #[arg(short = 'w', long = "window")]
    pub window: Option<WindowArg>,

    /// Resume from a cursor returned by a previous page
    #[arg(long)]
    pub cursor: Option<String>,

    /// Page size (default 10, max 50)
    #[arg(short = 'n', long = "page-size")]
    pub page_size: Option<usize>,
}

/// Arguments for the authors command
#[derive(Parser, Debug, Clone)]
pub struct AuthorsArgs {
    /// Path to the JSON corpus file
    #[arg(short, long)]
    pub corpus: PathBuf,

    /// Maximum number of authors to list
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Recency window names accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum WindowArg {
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// Last 365 days
    Year,
}

impl From<WindowArg> for RecencyWindow {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::Week => RecencyWindow::Week,
            WindowArg::Month => RecencyWindow::Month,
            WindowArg::Year => RecencyWindow::Year,
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}
