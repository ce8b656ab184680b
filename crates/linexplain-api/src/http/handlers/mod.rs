//! HTTP request handlers for the `/api/` endpoints.

pub mod chat;
pub mod history;

use crate::http::error::AppError;

/// Any method on an unknown `/api/` path.
pub async fn api_not_found() -> AppError {
    AppError::NotFound
}

/// A method other than the ones a known route accepts.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
