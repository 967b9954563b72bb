//! The labeled training corpus.
//!
//! The corpus is an ordered collection of [`CorpusRow`] entries, each pairing
//! an example `pattern` with its `intent` label and one candidate `response`.
//! It is loaded once at startup, is read-only for the lifetime of the
//! process, and backs both model training and per-request response lookup.
//!
//! Duplicate `(pattern, intent)` rows are retained on purpose: a row that
//! appears N times contributes N times to the class priors and makes its
//! response N times more likely to be drawn.

pub mod loader;

use serde::{Deserialize, Serialize};

/// A single labeled corpus entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRow {
    /// Example input text used for training.
    pub pattern: String,
    /// Intent category label.
    pub intent: String,
    /// Candidate response text for this intent.
    pub response: String,
}

/// A supervised-learning sample: pattern text paired with its intent label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Pattern text.
    pub pattern: String,
    /// Intent label.
    pub intent: String,
}

/// The full training corpus, ordered as loaded.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    rows: Vec<CorpusRow>,
}

impl Corpus {
    /// Create a corpus from pre-built rows.
    pub fn from_rows(rows: Vec<CorpusRow>) -> Self {
        Corpus { rows }
    }

    /// All rows in load order.
    pub fn rows(&self) -> &[CorpusRow] {
        &self.rows
    }

    /// Number of rows in the corpus.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the corpus has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The ordered `(pattern, intent)` projection used for model training.
    pub fn training_set(&self) -> Vec<TrainingSample> {
        self.rows
            .iter()
            .map(|row| TrainingSample {
                pattern: row.pattern.clone(),
                intent: row.intent.clone(),
            })
            .collect()
    }

    /// Collect the responses of every row whose intent matches.
    ///
    /// Recomputed per call; duplicates are kept so they weight the draw.
    pub fn responses_for(&self, intent: &str) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.intent == intent)
            .map(|row| row.response.as_str())
            .collect()
    }
}
