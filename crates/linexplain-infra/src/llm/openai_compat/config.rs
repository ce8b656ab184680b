//! Configuration for the OpenAI-compatible provider.

use secrecy::SecretString;

/// Default base URL when none is configured.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for an OpenAI-compatible chat completions endpoint.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`]. Covers OpenAI
/// itself and any gateway speaking the same protocol (including the Workers
/// AI `/ai/v1` compatibility endpoint).
pub struct OpenAiCompatConfig {
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    /// API key for authentication.
    pub api_key: SecretString,
    /// Model identifier used when a request does not name one.
    pub model: String,
}

impl OpenAiCompatConfig {
    pub fn new(base_url: Option<&str>, api_key: SecretString, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
            api_key,
            model: model.into(),
        }
    }
}
