//! SQLite history repository implementation.
//!
//! Implements `HistoryRepository` from `linexplain-core` using sqlx with split
//! read/write pools: appends go through the single-connection writer, reads
//! through the reader pool.

use chrono::Utc;
use sqlx::Row;

use linexplain_core::repository::history::HistoryRepository;
use linexplain_types::chat::{Message, MessageRole, NewMessage, SessionId};
use linexplain_types::error::RepositoryError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `HistoryRepository`.
#[derive(Clone)]
pub struct SqliteHistoryRepository {
    pool: DatabasePool,
}

impl SqliteHistoryRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain Message.
struct MessageRow {
    id: i64,
    session_id: String,
    role: String,
    content: String,
    timestamp: i64,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            session_id: row.try_get("session_id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_message(self) -> Result<Message, RepositoryError> {
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;
        let session_id = SessionId::parse(self.session_id).map_err(RepositoryError::Query)?;

        Ok(Message {
            id: self.id,
            session_id,
            role,
            content: self.content,
            timestamp: self.timestamp,
        })
    }
}

impl HistoryRepository for SqliteHistoryRepository {
    async fn append(&self, message: &NewMessage) -> Result<Message, RepositoryError> {
        let now_ms = Utc::now().timestamp_millis();

        // The timestamp is bumped past the session's latest row so ordering
        // stays strict when two inserts land in the same millisecond.
        let row = sqlx::query(
            r#"INSERT INTO messages (session_id, role, content, timestamp)
               VALUES (?, ?, ?, MAX(?, COALESCE(
                   (SELECT MAX(timestamp) FROM messages WHERE session_id = ?), 0) + 1))
               RETURNING id, timestamp"#,
        )
        .bind(message.session_id.as_str())
        .bind(message.role.to_string())
        .bind(&message.content)
        .bind(now_ms)
        .bind(message.session_id.as_str())
        .fetch_one(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        let timestamp: i64 = row
            .try_get("timestamp")
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        tracing::debug!(
            session_id = %message.session_id,
            role = %message.role,
            id,
            timestamp,
            "Message appended"
        );

        Ok(Message {
            id,
            session_id: message.session_id.clone(),
            role: message.role,
            content: message.content.clone(),
            timestamp,
        })
    }

    async fn list_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT id, session_id, role, content, timestamp
               FROM messages
               WHERE session_id = ?
               ORDER BY timestamp ASC, id ASC"#,
        )
        .bind(session_id.as_str())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                MessageRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_message()
            })
            .collect()
    }
}
