//! Character filters applied to raw text before tokenization.
//!
//! The one filter that matters for a publishing platform is
//! [`MarkdownStripFilter`]: article bodies are authored in markdown, and
//! formatting tokens (backticks, heading markers, link targets) must never
//! pollute the index. The filter is a pure function of its input and is
//! idempotent on already-plain text.
//!
//! # Examples
//!
//! ```
//! use gazette::analysis::char_filter::{CharFilter, MarkdownStripFilter};
//!
//! let filter = MarkdownStripFilter::new();
//! let plain = filter.filter("# Title\n\nSome **bold** text with [a link](https://example.com).");
//! assert_eq!(plain, "Title Some bold text with a link.");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Trait for filters that rewrite raw text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Rewrite the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// A markdown-stripping rule: a pattern and its replacement.
struct StripRule {
    pattern: Regex,
    replacement: &'static str,
}

/// Ordered stripping rules. Fenced code blocks must go before inline code,
/// and images before links, or the earlier syntax would be half-eaten by
/// the later pattern.
static STRIP_RULES: LazyLock<Vec<StripRule>> = LazyLock::new(|| {
    let rules: &[(&str, &str)] = &[
        // Fenced code blocks
        (r"```[\s\S]*?```", ""),
        // Inline code spans
        (r"`[^`]+`", ""),
        // Image embeds
        (r"!\[.*?\]\(.*?\)", ""),
        // Links, retaining the link text
        (r"\[([^\]]+)\]\([^)]+\)", "$1"),
        // Heading markers
        (r"(?m)^#{1,6}\s+", ""),
        // Emphasis markers
        (r"[*_]{1,3}([^*_]+)[*_]{1,3}", "$1"),
        // Blockquote markers
        (r"(?m)^>\s+", ""),
        // Horizontal-rule lines
        (r"(?m)^[-*_]{3,}\s*$", ""),
        // Bulleted list markers
        (r"(?m)^\s*[-*+]\s+", ""),
        // Numbered list markers
        (r"(?m)^\s*\d+\.\s+", ""),
    ];

    rules
        .iter()
        .map(|(pattern, replacement)| StripRule {
            // Patterns are fixed literals above; compilation cannot fail.
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        })
        .collect()
});

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// A char filter that strips markdown syntax, leaving plain text.
///
/// Removes, in order: fenced code blocks, inline code spans, image embeds,
/// link syntax (retaining link text), heading markers, emphasis markers,
/// blockquote markers, horizontal-rule lines, and list-item markers. All
/// whitespace runs collapse to single spaces and the result is trimmed.
#[derive(Clone, Debug, Default)]
pub struct MarkdownStripFilter;

impl MarkdownStripFilter {
    /// Create a new markdown strip filter.
    pub fn new() -> Self {
        MarkdownStripFilter
    }
}

impl CharFilter for MarkdownStripFilter {
    fn filter(&self, input: &str) -> String {
        let mut text = input.to_string();

        for rule in STRIP_RULES.iter() {
            text = rule
                .pattern
                .replace_all(&text, rule.replacement)
                .into_owned();
        }

        WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
    }

    fn name(&self) -> &'static str {
        "markdown_strip"
    }
}
