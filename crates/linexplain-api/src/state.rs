//! Application state wiring the chat service together.
//!
//! `ChatService` is generic over the history repository; AppState pins it to
//! the SQLite implementation.

use std::sync::Arc;

use anyhow::Context;

use linexplain_core::chat::service::{ChatService, ChatSettings};
use linexplain_core::llm::box_provider::BoxLlmProvider;
use linexplain_infra::llm::create_provider;
use linexplain_infra::sqlite::history::SqliteHistoryRepository;
use linexplain_infra::sqlite::pool::{self, DatabasePool};

use crate::config::ServiceConfig;

/// Concrete type alias for the service generic pinned to the infra implementation.
pub type ConcreteChatService = ChatService<SqliteHistoryRepository>;

/// Shared application state used by the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Wire a state from an open pool and an already-built provider.
    pub fn new(db_pool: DatabasePool, provider: BoxLlmProvider, settings: ChatSettings) -> Self {
        let repo = SqliteHistoryRepository::new(db_pool.clone());
        let chat_service = ChatService::new(repo, provider, settings);

        Self {
            chat_service: Arc::new(chat_service),
            db_pool,
        }
    }

    /// Initialize the application state: connect to the DB, build the provider.
    pub async fn init(database_url: Option<&str>, config: ServiceConfig) -> anyhow::Result<Self> {
        let db_pool = open_database(database_url).await?;

        let provider_type = config.provider.provider_type;
        let provider = create_provider(config.provider)
            .with_context(|| format!("failed to configure {provider_type} provider"))?;

        tracing::info!(
            provider = provider.name(),
            model = %config.chat.model,
            "Inference provider configured"
        );

        Ok(Self::new(db_pool, provider, config.chat))
    }
}

/// Open (and migrate) the database at `database_url`, or at the default location.
pub async fn open_database(database_url: Option<&str>) -> anyhow::Result<DatabasePool> {
    let url = database_url
        .map(str::to_string)
        .unwrap_or_else(pool::default_database_url);

    pool::ensure_parent_dir(&url)
        .await
        .with_context(|| format!("failed to create directory for {url}"))?;

    let db_pool = DatabasePool::new(&url)
        .await
        .with_context(|| format!("failed to open database {url}"))?;

    tracing::debug!(url = %url, "Database ready");
    Ok(db_pool)
}
