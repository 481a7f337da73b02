//! Flaggy chat route handlers.
//!
//! The widget posts each customer message and renders whatever
//! [`ChatReply`] comes back: an answer, a hand-off to support, or fallback
//! topics.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::chat::{self, ChatReply, DEFAULT_MATCH_LIMIT, IntentMatch};
use crate::error::{AppError, Result};

/// Longest message the widget may send, in characters.
pub const MAX_MESSAGE_CHARS: usize = 1000;
/// Upper bound on the `limit` of a suggestions request.
pub const MAX_SUGGESTIONS: usize = 10;

/// A chat message from the widget.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// A suggestions request from the widget.
#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    pub message: String,
    pub limit: Option<usize>,
}

/// One ranked candidate intent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionView {
    pub intent: &'static str,
    pub topic: &'static str,
    pub score: f64,
    pub matched_keywords: Vec<&'static str>,
}

impl From<IntentMatch> for SuggestionView {
    fn from(found: IntentMatch) -> Self {
        Self {
            intent: found.intent.name,
            topic: found.intent.topic,
            score: found.score,
            matched_keywords: found.matched_keywords,
        }
    }
}

/// Reply to one chat message.
#[instrument(skip_all, fields(message_len = request.message.len()))]
pub async fn reply(Json(request): Json<ChatRequest>) -> Result<Json<ChatReply>> {
    let message = validate_message(&request.message)?;
    Ok(Json(chat::reply(message, &mut rand::rng())))
}

/// Ranked candidate topics for a message.
#[instrument(skip_all, fields(message_len = request.message.len(), limit = request.limit))]
pub async fn suggestions(
    Json(request): Json<SuggestionsRequest>,
) -> Result<Json<Vec<SuggestionView>>> {
    let message = validate_message(&request.message)?;
    let limit = request
        .limit
        .unwrap_or(DEFAULT_MATCH_LIMIT)
        .clamp(1, MAX_SUGGESTIONS);

    let ranked = chat::match_multiple_intents(message, limit)
        .into_iter()
        .map(SuggestionView::from)
        .collect();
    Ok(Json(ranked))
}

/// Reject blank or oversized messages.
fn validate_message(message: &str) -> Result<&str> {
    if message.trim().is_empty() {
        return Err(AppError::BadRequest("message is empty".to_string()));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::BadRequest(format!(
            "message exceeds {MAX_MESSAGE_CHARS} characters"
        )));
    }
    Ok(message)
}
