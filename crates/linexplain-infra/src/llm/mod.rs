//! LLM provider implementations.
//!
//! Contains concrete implementations of the [`LlmProvider`] trait defined in
//! `linexplain-core`: Cloudflare Workers AI (the default) and any
//! OpenAI-compatible endpoint.
//!
//! [`create_provider`] constructs the configured provider from
//! [`ProviderSettings`].
//!
//! [`LlmProvider`]: linexplain_core::llm::provider::LlmProvider

pub mod openai_compat;
pub mod workers_ai;

use std::time::Duration;

use secrecy::SecretString;

use linexplain_core::llm::box_provider::BoxLlmProvider;
use linexplain_types::llm::{LlmError, ProviderType};

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::OpenAiCompatConfig;
use self::workers_ai::WorkersAiProvider;

/// Everything needed to construct a provider.
///
/// Credentials are optional here so that the factory, not the caller, decides
/// which ones the selected provider requires.
pub struct ProviderSettings {
    pub provider_type: ProviderType,
    pub model: String,
    /// Overrides the provider's default API base URL.
    pub base_url: Option<String>,
    /// Cloudflare account id (Workers AI only).
    pub account_id: Option<String>,
    /// Bearer token or API key for the selected provider.
    pub api_key: Option<SecretString>,
    pub request_timeout: Duration,
}

/// Create a [`BoxLlmProvider`] from [`ProviderSettings`].
///
/// # Errors
///
/// Returns [`LlmError::Configuration`] if a credential the selected provider
/// needs is missing, or if the HTTP client cannot be built.
pub fn create_provider(settings: ProviderSettings) -> Result<BoxLlmProvider, LlmError> {
    match settings.provider_type {
        ProviderType::WorkersAi => {
            let account_id = settings
                .account_id
                .filter(|id| !id.is_empty())
                .ok_or_else(|| {
                    LlmError::Configuration("CLOUDFLARE_ACCOUNT_ID is not set".to_string())
                })?;
            let token = settings.api_key.ok_or_else(|| {
                LlmError::Configuration("CLOUDFLARE_API_TOKEN is not set".to_string())
            })?;

            let mut provider = WorkersAiProvider::new(
                account_id,
                token,
                settings.model,
                settings.request_timeout,
            )?;
            if let Some(base_url) = settings.base_url {
                provider = provider.with_base_url(base_url);
            }
            Ok(BoxLlmProvider::new(provider))
        }
        ProviderType::OpenAiCompatible => {
            let key = settings.api_key.ok_or_else(|| {
                LlmError::Configuration("LINEXPLAIN_API_KEY is not set".to_string())
            })?;
            let config = OpenAiCompatConfig::new(settings.base_url.as_deref(), key, settings.model);
            Ok(BoxLlmProvider::new(OpenAiCompatibleProvider::new(config)))
        }
    }
}
