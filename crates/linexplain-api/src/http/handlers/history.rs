//! History HTTP handler.
//!
//! Endpoint (any method):
//! - /api/history?sessionId=<id> - Stored messages of a session, oldest first

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Deserialize;

use linexplain_types::chat::{HistoryEntry, SessionId};
use linexplain_types::error::ChatError;

use crate::http::error::AppError;
use crate::state::AppState;

/// Query parameters for the history endpoint.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// /api/history - Return `[{role, content}, ...]` for a session.
pub async fn get_history(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    let missing = || AppError::Validation("Missing sessionId".to_string());

    let Query(query) = query.map_err(|_| missing())?;
    let session_id = query
        .session_id
        .and_then(|raw| SessionId::parse(raw).ok())
        .ok_or_else(missing)?;

    let history = state.chat_service.history(&session_id).await.map_err(|e| match e {
        ChatError::Validation(msg) => AppError::Validation(msg),
        other => AppError::Dependency(format!("Error fetching history: {other}")),
    })?;

    tracing::debug!(session_id = %session_id, count = history.len(), "History served");

    Ok(Json(history))
}
