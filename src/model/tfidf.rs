//! TF-IDF vectorizer for text feature extraction.
//!
//! Terms common to many training patterns are down-weighted relative to
//! distinguishing terms. The vectorizer is fitted once over the training
//! documents and then applies the same transform, never refit, to every
//! incoming message.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// TF-IDF vectorizer producing fixed-dimension feature vectors.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> feature index, assigned in first-seen order.
    vocabulary: HashMap<String, usize>,
    /// Smoothed inverse document frequency per feature index.
    idf: Vec<f64>,
    /// Analyzer used for both fitting and transforming.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Fit a vectorizer on the training documents.
    pub fn fit(analyzer: Arc<dyn Analyzer>, documents: &[String]) -> Result<Self> {
        let n_documents = documents.len();
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let terms = analyzer.analyze(doc)?;
            let unique_terms: HashSet<_> = terms.into_iter().collect();

            for term in unique_terms {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
                let next_index = vocabulary.len();
                vocabulary.entry(term).or_insert(next_index);
            }
        }

        // Smoothed IDF: ln((N + 1) / (df + 1)) + 1
        let mut idf = vec![0.0; vocabulary.len()];
        for (term, &index) in &vocabulary {
            let df = document_frequency[term];
            idf[index] = ((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
        }

        Ok(TfIdfVectorizer {
            vocabulary,
            idf,
            analyzer,
        })
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// Terms outside the fitted vocabulary are ignored; a document with no
    /// known terms transforms to the zero vector.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let terms = self.analyzer.analyze(document)?;
        let mut features = vec![0.0; self.vocabulary.len()];

        for term in &terms {
            if let Some(&index) = self.vocabulary.get(term) {
                features[index] += 1.0;
            }
        }

        // Term frequency relative to document length
        let doc_length = terms.len() as f64;
        if doc_length > 0.0 {
            for value in &mut features {
                *value /= doc_length;
            }
        }

        for (index, value) in features.iter_mut().enumerate() {
            *value *= self.idf[index];
        }

        Ok(features)
    }

    /// Get the size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
