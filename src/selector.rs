//! Response selection for a predicted intent.
//!
//! Selection is the only place randomness enters the system. The RNG is an
//! injectable collaborator so tests can substitute a seeded generator and
//! assert exact draws; the default constructor seeds freshly from the OS
//! per process.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{RngCore, SeedableRng};

use crate::corpus::Corpus;

/// Returned when no response is configured for a predicted intent.
pub const DEFAULT_FALLBACK: &str = "Sorry, I don't understand that yet.";

/// Picks one response uniformly at random among the rows matching an intent.
pub struct ResponseSelector {
    // Mutex so concurrent request handlers can draw independently.
    rng: Mutex<Box<dyn RngCore + Send>>,
    fallback: String,
}

impl std::fmt::Debug for ResponseSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseSelector")
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSelector {
    /// Create a selector with an OS-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(Box::new(StdRng::from_os_rng()))
    }

    /// Create a selector with an injected RNG (deterministic in tests).
    pub fn with_rng(rng: Box<dyn RngCore + Send>) -> Self {
        ResponseSelector {
            rng: Mutex::new(rng),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }

    /// Replace the fallback phrase.
    pub fn with_fallback<S: Into<String>>(mut self, fallback: S) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// The phrase returned when an intent has no configured responses.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Draw one response for the intent, or the fallback for an empty pool.
    ///
    /// Each call is an independent uniform draw over the matching rows;
    /// duplicate responses weight the draw accordingly. No exhaustion
    /// tracking, so repeats across calls are expected.
    pub fn select(&self, intent: &str, corpus: &Corpus) -> String {
        let candidates = corpus.responses_for(intent);
        let mut rng = self.rng.lock();

        match candidates.choose(&mut **rng) {
            Some(response) => (*response).to_string(),
            None => self.fallback.clone(),
        }
    }
}
