//! Text analysis pipeline for pattern and message text.
//!
//! Analysis turns raw text into the normalized terms that feed the TF-IDF
//! vectorizer. The pipeline is deliberately small: a tokenizer that splits
//! on Unicode word boundaries, wrapped by an analyzer that folds case.
//!
//! ```text
//! Raw Text → Tokenizer → lowercase fold → terms
//! ```

pub mod analyzer;
pub mod tokenizer;

pub use analyzer::{Analyzer, StandardAnalyzer};
pub use tokenizer::{Tokenizer, UnicodeWordTokenizer};
