use thiserror::Error;

use crate::llm::LlmError;

/// Errors from repository operations (used by trait definitions in linexplain-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),
}

/// Errors raised while serving history or processing a chat turn.
#[derive(Debug, Error)]
pub enum ChatError {
    /// A required input was missing or empty.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("no such table: messages".to_string());
        assert_eq!(err.to_string(), "query error: no such table: messages");
    }

    #[test]
    fn test_chat_error_is_transparent() {
        let err = ChatError::from(LlmError::AuthenticationFailed);
        assert_eq!(err.to_string(), "authentication failed");

        let err = ChatError::from(RepositoryError::Query("disk I/O error".to_string()));
        assert_eq!(err.to_string(), "query error: disk I/O error");
    }
}
