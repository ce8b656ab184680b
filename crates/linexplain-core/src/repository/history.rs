//! HistoryRepository trait definition.
//!
//! The message store is append-only: there are no update or delete
//! operations, and a session exists only as the set of its messages.

use linexplain_types::chat::{Message, NewMessage, SessionId};
use linexplain_types::error::RepositoryError;

/// Repository trait for chat history persistence.
///
/// Implementations live in linexplain-infra (e.g., `SqliteHistoryRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait HistoryRepository: Send + Sync {
    /// Append a message to its session and return the stored row.
    ///
    /// The returned `timestamp` is strictly greater than that of every
    /// message previously appended to the same session.
    fn append(
        &self,
        message: &NewMessage,
    ) -> impl std::future::Future<Output = Result<Message, RepositoryError>> + Send;

    /// All messages of a session, ordered by timestamp ASC (empty if none).
    fn list_by_session(
        &self,
        session_id: &SessionId,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;
}
