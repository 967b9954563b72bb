//! The inference endpoint.
//!
//! [`ChatService`] owns the fitted model, the loaded corpus, and the
//! response selector, all constructed once at startup and shared read-only
//! across requests. The HTTP surface is a single `POST /chat` route taking
//! `{"message": "..."}` and returning `{"response": "..."}`.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;
use crate::model::IntentModel;
use crate::selector::ResponseSelector;

/// Request body for the chat endpoint.
///
/// An absent `message` field is treated as an empty string, not rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The raw user message.
    #[serde(default)]
    pub message: String,
}

/// Response body for the chat endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    /// The chosen response text.
    pub response: String,
}

/// The trained chat pipeline: predict an intent, pick a response.
#[derive(Debug)]
pub struct ChatService {
    model: IntentModel,
    corpus: Corpus,
    selector: ResponseSelector,
}

impl ChatService {
    /// Create a service from an already-fitted model and loaded corpus.
    pub fn new(model: IntentModel, corpus: Corpus, selector: ResponseSelector) -> Self {
        ChatService {
            model,
            corpus,
            selector,
        }
    }

    /// Answer a raw message. Always returns a string, never an error.
    ///
    /// An empty message goes through the same path as any other: the model
    /// predicts from the empty feature vector and the selector draws from
    /// that intent's pool.
    pub fn handle(&self, message: &str) -> String {
        let intent = match self.model.predict(message) {
            Ok(intent) => intent.to_string(),
            Err(e) => {
                tracing::error!(error = %e, "intent prediction failed");
                return self.selector.fallback().to_string();
            }
        };

        tracing::debug!(%intent, "predicted intent");
        self.selector.select(&intent, &self.corpus)
    }
}

/// Build the HTTP router for the chat endpoint.
pub fn router(service: Arc<ChatService>) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .with_state(service)
}

async fn chat(
    State(service): State<Arc<ChatService>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    Json(ChatResponse {
        response: service.handle(&request.message),
    })
}
