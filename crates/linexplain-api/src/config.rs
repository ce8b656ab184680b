//! Provider and generation settings read from the environment.

use std::time::Duration;

use anyhow::{Context, Result};
use secrecy::SecretString;

use linexplain_core::chat::prompt::DEFAULT_MODEL;
use linexplain_core::chat::service::ChatSettings;
use linexplain_infra::llm::ProviderSettings;
use linexplain_types::llm::ProviderType;

/// Default per-request timeout for provider calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Settings needed to build the chat service.
pub struct ServiceConfig {
    pub provider: ProviderSettings,
    pub chat: ChatSettings,
}

impl ServiceConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider_type = match get("LINEXPLAIN_PROVIDER") {
            Some(raw) => raw
                .parse::<ProviderType>()
                .map_err(anyhow::Error::msg)
                .context("invalid LINEXPLAIN_PROVIDER")?,
            None => ProviderType::WorkersAi,
        };

        let model = get("LINEXPLAIN_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_key = match provider_type {
            ProviderType::WorkersAi => get("CLOUDFLARE_API_TOKEN"),
            ProviderType::OpenAiCompatible => get("LINEXPLAIN_API_KEY"),
        }
        .map(SecretString::from);

        let max_tokens = get("LINEXPLAIN_MAX_TOKENS")
            .map(|v| v.trim().parse::<u32>())
            .transpose()
            .context("invalid LINEXPLAIN_MAX_TOKENS")?;

        let temperature = get("LINEXPLAIN_TEMPERATURE")
            .map(|v| v.trim().parse::<f64>())
            .transpose()
            .context("invalid LINEXPLAIN_TEMPERATURE")?;

        let timeout_secs = get("LINEXPLAIN_REQUEST_TIMEOUT_SECS")
            .map(|v| v.trim().parse::<u64>())
            .transpose()
            .context("invalid LINEXPLAIN_REQUEST_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Ok(Self {
            provider: ProviderSettings {
                provider_type,
                model: model.clone(),
                base_url: get("LINEXPLAIN_PROVIDER_BASE_URL"),
                account_id: get("CLOUDFLARE_ACCOUNT_ID"),
                api_key,
                request_timeout: Duration::from_secs(timeout_secs),
            },
            chat: ChatSettings {
                model,
                max_tokens,
                temperature,
            },
        })
    }
}
