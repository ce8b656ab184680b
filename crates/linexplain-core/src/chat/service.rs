//! Chat service serving history and processing chat turns.
//!
//! A turn is strictly sequential: append the user message, reload the full
//! history, call the provider with the system prompt prepended, append the
//! reply. Nothing is rolled back on failure, so the user message stays
//! stored when a later step fails. Concurrent turns on one session are not
//! serialized and may interleave their reads and appends.

use tracing::{Instrument, debug, info, info_span, warn};

use linexplain_observe::genai_attrs;
use linexplain_types::chat::{HistoryEntry, Message, MessageRole, NewMessage, SessionId};
use linexplain_types::error::ChatError;
use linexplain_types::llm::CompletionRequest;

use crate::chat::prompt::{FALLBACK_REPLY, SYSTEM_PROMPT, build_model_input};
use crate::llm::box_provider::BoxLlmProvider;
use crate::repository::history::HistoryRepository;

/// Generation settings applied to every turn.
#[derive(Debug, Clone, Default)]
pub struct ChatSettings {
    /// Model identifier; empty means the provider's default model.
    pub model: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

/// Result of a completed chat turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// The text returned to the caller (completion or fallback).
    pub response: String,
    pub user_message: Message,
    pub assistant_message: Message,
}

/// Orchestrates history reads and chat turns.
///
/// Generic over `HistoryRepository` to maintain clean architecture
/// (linexplain-core never depends on linexplain-infra).
pub struct ChatService<R: HistoryRepository> {
    history_repo: R,
    provider: BoxLlmProvider,
    settings: ChatSettings,
}

impl<R: HistoryRepository> ChatService<R> {
    pub fn new(history_repo: R, provider: BoxLlmProvider, settings: ChatSettings) -> Self {
        Self {
            history_repo,
            provider,
            settings,
        }
    }

    /// The model each turn is sent to.
    pub fn model(&self) -> &str {
        if self.settings.model.is_empty() {
            self.provider.default_model()
        } else {
            &self.settings.model
        }
    }

    /// Stored history of a session as `{role, content}` pairs, oldest first.
    pub async fn history(&self, session_id: &SessionId) -> Result<Vec<HistoryEntry>, ChatError> {
        let messages = self.history_repo.list_by_session(session_id).await?;

        // System rows are never shown to the client.
        Ok(messages
            .into_iter()
            .filter(|m| m.role != MessageRole::System)
            .map(HistoryEntry::from)
            .collect())
    }

    /// Run one chat turn for `session_id` and return the assistant reply.
    pub async fn process_turn(
        &self,
        session_id: &SessionId,
        message: &str,
    ) -> Result<TurnOutcome, ChatError> {
        if message.is_empty() {
            return Err(ChatError::Validation("message must not be empty".to_string()));
        }

        let user_message = self
            .history_repo
            .append(&NewMessage::user(session_id.clone(), message))
            .await?;

        let history = self.history_repo.list_by_session(session_id).await?;
        debug!(session_id = %session_id, history_len = history.len(), "History loaded");

        let request = CompletionRequest {
            model: self.model().to_string(),
            messages: build_model_input(SYSTEM_PROMPT, &history),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.operation.name = genai_attrs::OP_CHAT,
            gen_ai.provider.name = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = ?request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
        );

        let response = self.provider.complete(&request).instrument(span).await?;

        let reply = match response.usable_text() {
            Some(text) => text.to_string(),
            None => {
                warn!(
                    session_id = %session_id,
                    model = %response.model,
                    "Provider returned no text, using fallback reply"
                );
                FALLBACK_REPLY.to_string()
            }
        };

        let assistant_message = self
            .history_repo
            .append(&NewMessage::assistant(session_id.clone(), reply.clone()))
            .await?;

        info!(
            session_id = %session_id,
            input_tokens = response.usage.as_ref().map(|u| u.input_tokens),
            output_tokens = response.usage.as_ref().map(|u| u.output_tokens),
            "Chat turn completed"
        );

        Ok(TurnOutcome {
            response: reply,
            user_message,
            assistant_message,
        })
    }
}
