//! The intent model: TF-IDF features feeding a naive Bayes classifier.
//!
//! [`IntentModel::fit`] is the only constructor, so a model that exists is
//! always fitted; the fit-then-serve startup sequence makes "predict before
//! fit" unrepresentable. The fitted model is immutable and cheap to share.

pub mod naive_bayes;
pub mod tfidf;

use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::corpus::TrainingSample;
use crate::error::{Result, RetortError};
use crate::model::naive_bayes::MultinomialNb;
use crate::model::tfidf::TfIdfVectorizer;

/// A fitted intent classification model.
///
/// Maps an input string to one of the intent labels seen during training.
/// The label table is kept in first-appearance order, which also defines
/// the tie-break order for equally scored intents.
#[derive(Debug)]
pub struct IntentModel {
    vectorizer: TfIdfVectorizer,
    classifier: MultinomialNb,
    labels: Vec<String>,
}

impl IntentModel {
    /// Fit a model on the training set using the default analyzer.
    ///
    /// Fails with a training error when the training set is empty.
    pub fn fit(samples: &[TrainingSample]) -> Result<Self> {
        Self::fit_with_analyzer(samples, Arc::new(StandardAnalyzer::new()))
    }

    /// Fit a model on the training set with a custom analyzer.
    pub fn fit_with_analyzer(
        samples: &[TrainingSample],
        analyzer: Arc<dyn Analyzer>,
    ) -> Result<Self> {
        if samples.is_empty() {
            return Err(RetortError::training("training set is empty"));
        }

        // Assign dense label indices in first-appearance order.
        let mut label_index: HashMap<&str, usize> = HashMap::new();
        let mut labels: Vec<String> = Vec::new();
        let mut y = Vec::with_capacity(samples.len());
        for sample in samples {
            let index = *label_index.entry(sample.intent.as_str()).or_insert_with(|| {
                labels.push(sample.intent.clone());
                labels.len() - 1
            });
            y.push(index);
        }

        let documents: Vec<String> = samples.iter().map(|s| s.pattern.clone()).collect();
        let vectorizer = TfIdfVectorizer::fit(analyzer, &documents)?;

        let mut x = Vec::with_capacity(documents.len());
        for document in &documents {
            x.push(vectorizer.transform(document)?);
        }

        let classifier = MultinomialNb::fit(&x, &y, labels.len())?;

        Ok(IntentModel {
            vectorizer,
            classifier,
            labels,
        })
    }

    /// Predict the intent label for the given text.
    ///
    /// Pure given the fitted model: identical input yields the identical
    /// label. Out-of-vocabulary input transforms to a zero feature vector
    /// and resolves to the intent with the highest prior, which is expected
    /// behavior rather than an error.
    pub fn predict(&self, text: &str) -> Result<&str> {
        let features = self.vectorizer.transform(text)?;
        let class = self.classifier.predict(&features);
        Ok(&self.labels[class])
    }

    /// The intent labels seen during training, in first-appearance order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
