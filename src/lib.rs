//! # Retort
//!
//! An intent-classification chat service. A small labeled corpus of
//! `(pattern, intent, response)` rows is loaded at startup, a TF-IDF +
//! multinomial naive Bayes model is trained over it once, and incoming
//! messages are answered with a randomly chosen pre-authored response for
//! the predicted intent.
//!
//! ## Pipeline
//!
//! ```text
//! Raw message → Analyzer → TF-IDF features → Naive Bayes → intent
//!                                                            ↓
//!                              response ← ResponseSelector ← corpus filter
//! ```

pub mod analysis;
pub mod corpus;
pub mod error;
pub mod model;
pub mod selector;
pub mod service;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
