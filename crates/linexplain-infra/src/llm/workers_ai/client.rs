//! WorkersAiProvider -- concrete [`LlmProvider`] implementation for Cloudflare Workers AI.
//!
//! Sends requests to `{base_url}/accounts/{account_id}/ai/run/{model}` with a
//! bearer token. The token is wrapped in [`secrecy::SecretString`] and is
//! never logged or included in `Debug` output.

use std::time::Duration;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};

use linexplain_core::llm::provider::LlmProvider;
use linexplain_observe::genai_attrs;
use linexplain_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use super::types::{WorkersAiEnvelope, WorkersAiMessage, WorkersAiRequest};

/// Cloudflare Workers AI provider.
///
/// Does NOT derive Debug so the account token cannot leak through
/// formatting.
pub struct WorkersAiProvider {
    client: reqwest::Client,
    account_id: String,
    api_token: SecretString,
    base_url: String,
    model: String,
}

impl WorkersAiProvider {
    /// Public Cloudflare API base.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.cloudflare.com/client/v4";

    /// Create a new Workers AI provider.
    ///
    /// `timeout` bounds each HTTP request end to end.
    pub fn new(
        account_id: String,
        api_token: SecretString,
        model: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            account_id,
            api_token,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model,
        })
    }

    /// Override the base URL (useful for testing or gateways).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, model: &str) -> String {
        format!("{}/accounts/{}/ai/run/{}", self.base_url, self.account_id, model)
    }

    fn to_workers_request(request: &CompletionRequest) -> WorkersAiRequest {
        WorkersAiRequest {
            messages: request
                .messages
                .iter()
                .map(|m| WorkersAiMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            stream: false,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

/// Map a non-2xx status to an [`LlmError`].
///
/// `body` is the raw response text; when it is a Cloudflare error envelope its
/// error list is used as the message.
fn map_status(status: StatusCode, retry_after: Option<u64>, body: &str) -> LlmError {
    match status.as_u16() {
        401 | 403 => LlmError::AuthenticationFailed,
        429 => LlmError::RateLimited {
            retry_after_ms: retry_after.map(|secs| secs.saturating_mul(1000)),
        },
        _ => {
            let detail = serde_json::from_str::<WorkersAiEnvelope>(body)
                .map(|env| env.error_summary())
                .unwrap_or_else(|_| body.to_string());
            LlmError::Provider {
                message: format!("HTTP {status}: {detail}"),
            }
        }
    }
}

/// Turn a decoded envelope into a [`CompletionResponse`].
fn into_completion(
    envelope: WorkersAiEnvelope,
    model: &str,
) -> Result<CompletionResponse, LlmError> {
    if !envelope.success {
        return Err(LlmError::Provider {
            message: envelope.error_summary(),
        });
    }

    let (content, usage) = match envelope.result {
        Some(result) => (
            result.response,
            result.usage.map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            }),
        ),
        None => (None, None),
    };

    Ok(CompletionResponse {
        content,
        model: model.to_string(),
        usage,
    })
}

impl LlmProvider for WorkersAiProvider {
    fn name(&self) -> &str {
        genai_attrs::PROVIDER_WORKERS_AI
    }

    fn default_model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let model = if request.model.is_empty() {
            self.model.as_str()
        } else {
            request.model.as_str()
        };
        let body = Self::to_workers_request(request);

        let response = self
            .client
            .post(self.url(model))
            .bearer_auth(self.api_token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, model, "Workers AI request failed");
            return Err(map_status(status, retry_after, &error_body));
        }

        let envelope: WorkersAiEnvelope = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        into_completion(envelope, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linexplain_types::llm::{Message, MessageRole};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "@cf/meta/llama-3.3-70b-instruct-fp8-fast";

    fn provider(server: &MockServer) -> WorkersAiProvider {
        WorkersAiProvider::new(
            "acct".to_string(),
            SecretString::from("cf-token".to_string()),
            MODEL.to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
        .with_base_url(format!("{}/", server.uri()))
    }

    fn request(model: &str) -> CompletionRequest {
        CompletionRequest {
            model: model.to_string(),
            messages: vec![
                Message {
                    role: MessageRole::System,
                    content: "explain commands".to_string(),
                },
                Message {
                    role: MessageRole::User,
                    content: "ls -la".to_string(),
                },
            ],
            max_tokens: None,
            temperature: None,
        }
    }

    #[tokio::test]
    async fn test_complete_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/accounts/acct/ai/run/{MODEL}")))
            .and(header("authorization", "Bearer cf-token"))
            .and(body_partial_json(serde_json::json!({
                "stream": false,
                "messages": [
                    {"role": "system", "content": "explain commands"},
                    {"role": "user", "content": "ls -la"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": {
                    "response": "**Command:** `ls -la`",
                    "usage": {"prompt_tokens": 40, "completion_tokens": 12, "total_tokens": 52}
                },
                "success": true,
                "errors": [],
                "messages": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resp = provider(&server).complete(&request("")).await.unwrap();
        assert_eq!(resp.content.as_deref(), Some("**Command:** `ls -la`"));
        assert_eq!(resp.model, MODEL);
        assert_eq!(
            resp.usage,
            Some(Usage {
                input_tokens: 40,
                output_tokens: 12
            })
        );
    }

    #[tokio::test]
    async fn test_complete_null_response_is_empty_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": {"response": null},
                "success": true,
                "errors": []
            })))
            .mount(&server)
            .await;

        let resp = provider(&server).complete(&request("")).await.unwrap();
        assert!(resp.content.is_none());
        assert!(resp.usable_text().is_none());
    }

    #[tokio::test]
    async fn test_complete_auth_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "success": false,
                "errors": [{"code": 10000, "message": "Authentication error"}]
            })))
            .mount(&server)
            .await;

        let err = provider(&server).complete(&request("")).await.unwrap_err();
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn test_complete_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "3"))
            .mount(&server)
            .await;

        let err = provider(&server).complete(&request("")).await.unwrap_err();
        assert!(matches!(
            err,
            LlmError::RateLimited {
                retry_after_ms: Some(3000)
            }
        ));
    }

    #[tokio::test]
    async fn test_complete_rate_limited_huge_retry_after_saturates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(429).insert_header("retry-after", "18446744073709552"),
            )
            .mount(&server)
            .await;

        let err = provider(&server).complete(&request("")).await.unwrap_err();
        assert!(matches!(
            err,
            LlmError::RateLimited {
                retry_after_ms: Some(u64::MAX)
            }
        ));
    }

    #[tokio::test]
    async fn test_complete_server_error_carries_envelope_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "success": false,
                "errors": [{"code": 3040, "message": "Capacity temporarily exceeded"}]
            })))
            .mount(&server)
            .await;

        let err = provider(&server).complete(&request("")).await.unwrap_err();
        match err {
            LlmError::Provider { message } => {
                assert!(message.contains("500"));
                assert!(message.contains("3040: Capacity temporarily exceeded"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_complete_unsuccessful_envelope_with_ok_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": null,
                "success": false,
                "errors": [{"code": 5006, "message": "Model not found"}]
            })))
            .mount(&server)
            .await;

        let err = provider(&server).complete(&request("@cf/unknown")).await.unwrap_err();
        assert!(
            matches!(err, LlmError::Provider { message } if message.contains("Model not found"))
        );
    }

    #[tokio::test]
    async fn test_complete_garbage_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = provider(&server).complete(&request("")).await.unwrap_err();
        assert!(matches!(err, LlmError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_request_model_overrides_default() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts/acct/ai/run/@cf/meta/llama-3.1-8b-instruct"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": {"response": "ok"},
                "success": true,
                "errors": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resp = provider(&server)
            .complete(&request("@cf/meta/llama-3.1-8b-instruct"))
            .await
            .unwrap();
        assert_eq!(resp.model, "@cf/meta/llama-3.1-8b-instruct");
    }

    #[test]
    fn test_map_status_other_codes_are_provider_errors() {
        let err = map_status(StatusCode::BAD_GATEWAY, None, "upstream down");
        assert!(matches!(err, LlmError::Provider { message } if message.contains("upstream down")));

        let err = map_status(StatusCode::FORBIDDEN, None, "");
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[test]
    fn test_provider_name() {
        let provider = WorkersAiProvider::new(
            "acct".to_string(),
            SecretString::from("t".to_string()),
            MODEL.to_string(),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(provider.name(), "workers_ai");
        assert_eq!(provider.default_model(), MODEL);
    }
}
