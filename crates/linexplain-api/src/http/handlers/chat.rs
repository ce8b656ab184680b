//! Chat HTTP handler.
//!
//! Endpoint:
//! - POST /api/chat - Process one chat turn and return the assistant reply

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use linexplain_types::chat::SessionId;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for `POST /api/chat`.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// Response body for `POST /api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/chat - Append the user message, call the model, append and return the reply.
///
/// The body is decoded as JSON whatever its `Content-Type` says.
pub async fn post_chat(
    State(state): State<AppState>,
    payload: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let missing = || AppError::Validation("Missing message or sessionId".to_string());

    let body: ChatRequest = serde_json::from_slice(&payload).map_err(|e| {
        tracing::debug!(error = %e, "Rejected chat body");
        missing()
    })?;

    let message = body.message.filter(|m| !m.is_empty()).ok_or_else(missing)?;
    let session_id = body
        .session_id
        .and_then(|raw| SessionId::parse(raw).ok())
        .ok_or_else(missing)?;

    let outcome = state.chat_service.process_turn(&session_id, &message).await?;

    Ok(Json(ChatResponse {
        response: outcome.response,
    }))
}
