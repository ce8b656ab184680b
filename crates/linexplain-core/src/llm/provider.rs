//! LlmProvider trait definition.
//!
//! This is the core abstraction that all inference backends implement.

use linexplain_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for hosted inference backends (Workers AI, OpenAI-compatible, etc.).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Wrap an
/// implementation in [`super::box_provider::BoxLlmProvider`] to select it at
/// runtime.
///
/// Implementations live in linexplain-infra (e.g., `WorkersAiProvider`).
pub trait LlmProvider: Send + Sync {
    /// Provider name used in logs and spans (e.g., "workers_ai").
    fn name(&self) -> &str;

    /// The model used when a request leaves `model` empty.
    fn default_model(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
