//! Application error type mapping to HTTP status codes.
//!
//! Every error renders as a JSON body `{"error": "<message>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use linexplain_types::error::ChatError;

/// Text returned for any failure whose detail is not shown to the caller.
pub const GENERIC_FAILURE: &str = "Failed to process request";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed input.
    Validation(String),
    /// Disallowed HTTP method on a known route.
    MethodNotAllowed,
    /// Unknown `/api/` path.
    NotFound,
    /// Store or provider failure whose message is returned to the caller.
    Dependency(String),
    /// Store or provider failure hidden behind [`GENERIC_FAILURE`].
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::Validation(msg) => AppError::Validation(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::Dependency(msg) => {
                tracing::error!(error = %msg, "Dependency failure");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linexplain_types::error::RepositoryError;
    use linexplain_types::llm::LlmError;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status_codes_and_bodies() {
        let (status, body) = render(AppError::Validation("Missing sessionId".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing sessionId"}));

        let (status, _) = render(AppError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let (status, body) = render(AppError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");

        let err = AppError::Dependency("Error fetching history: boom".into());
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Error fetching history: boom");
    }

    #[tokio::test]
    async fn test_internal_hides_detail() {
        let err = AppError::from(ChatError::from(LlmError::AuthenticationFailed));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": GENERIC_FAILURE}));

        let err = AppError::from(ChatError::from(RepositoryError::Query("locked".into())));
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_chat_validation_stays_validation() {
        let err = AppError::from(ChatError::Validation("empty".into()));
        assert!(matches!(err, AppError::Validation(m) if m == "empty"));
    }
}
