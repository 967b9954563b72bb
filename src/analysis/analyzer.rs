//! Analyzer implementations combining tokenization and normalization.
//!
//! An analyzer is the complete text processing step used by the vectorizer:
//! it tokenizes and then normalizes the resulting terms. The same analyzer
//! instance is used for training patterns and incoming messages, so both
//! sides of the pipeline see identical terms.
//!
//! # Examples
//!
//! ```
//! use retort::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new();
//! let terms = analyzer.analyze("Hello World").unwrap();
//!
//! assert_eq!(terms, vec!["hello", "world"]);
//! ```

use std::sync::Arc;

use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::error::Result;

/// Trait for analyzers that transform raw text into normalized terms.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a sequence of normalized terms.
    fn analyze(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// The default analyzer: Unicode word tokenization plus lowercase folding.
///
/// Case folding makes classification case-insensitive, which matters for a
/// corpus of short chat patterns where "Hi" and "hi" must train the same
/// term.
pub struct StandardAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with the default tokenizer.
    pub fn new() -> Self {
        StandardAnalyzer {
            tokenizer: Arc::new(UnicodeWordTokenizer::new()),
        }
    }

    /// Create a standard analyzer with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        StandardAnalyzer { tokenizer }
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<String>> {
        let terms = self
            .tokenizer
            .tokenize(text)?
            .into_iter()
            .map(|term| term.to_lowercase())
            .collect();

        Ok(terms)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
