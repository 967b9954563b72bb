//! Tokenizer implementations for text analysis.
//!
//! The tokenizer splits text using Unicode word boundary rules (UAX #29),
//! which handles international text correctly and drops non-word segments
//! like punctuation and whitespace.
//!
//! # Examples
//!
//! ```
//! use retort::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens = tokenizer.tokenize("Hello, world!").unwrap();
//!
//! assert_eq!(tokens, vec!["Hello", "world"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;

/// Trait for tokenizers that convert text into terms.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a sequence of terms.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Uses the Unicode Text Segmentation algorithm (UAX #29) to identify word
/// boundaries, keeping only segments that contain at least one alphanumeric
/// character. Punctuation-only and whitespace segments are discarded.
///
/// # Examples
///
/// ```
/// use retort::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
///
/// let tokenizer = UnicodeWordTokenizer::new();
/// let tokens = tokenizer.tokenize("café résumé").unwrap();
/// assert_eq!(tokens, vec!["café", "résumé"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text
            .split_word_bounds()
            .filter(|word| word.chars().any(|c| c.is_alphanumeric()))
            .map(|word| word.to_string())
            .collect();

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
