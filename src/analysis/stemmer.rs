//! Stemming for reducing words to their root forms.
//!
//! The index and the query tokenizer share one fixed English stemmer so
//! that "current" and "currents" land on the same term. The algorithm is a
//! suffix-stripping stemmer: aggressive enough to conflate plural and
//! inflected forms, cheap enough to run inline with every content write.

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Common English suffixes, stripped longest-first.
const ENGLISH_SUFFIXES: &[&str] = &[
    "ation", "tion", "sion", "ment", "ness", "able", "ible", "ies", "ied", "ing", "est", "ful",
    "ed", "er", "ly", "es", "s",
];

/// A fixed-language English suffix stemmer.
///
/// Words of three characters or fewer pass through unchanged, and a suffix
/// is only stripped when at least three characters of stem remain. Both
/// guards keep short words like "the" or "was" intact for the stop filter
/// to judge.
#[derive(Debug, Clone, Default)]
pub struct EnglishStemmer;

impl EnglishStemmer {
    /// Create a new English stemmer.
    pub fn new() -> Self {
        EnglishStemmer
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, word: &str) -> String {
        if word.chars().count() <= 3 {
            return word.to_string();
        }

        for suffix in ENGLISH_SUFFIXES {
            if word.len() > suffix.len() + 2 && word.ends_with(suffix) {
                return word[..word.len() - suffix.len()].to_string();
            }
        }

        word.to_string()
    }

    fn name(&self) -> &'static str {
        "english"
    }
}
