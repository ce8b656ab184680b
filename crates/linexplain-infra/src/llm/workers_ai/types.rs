//! Workers AI REST API types.
//!
//! These are Cloudflare-specific request/response structures for the
//! `/accounts/{account_id}/ai/run/{model}` endpoint. They are NOT the generic
//! LLM types from linexplain-types.

use serde::{Deserialize, Serialize};

/// Request body for a text-generation model run.
#[derive(Debug, Clone, Serialize)]
pub struct WorkersAiRequest {
    pub messages: Vec<WorkersAiMessage>,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// A single role-tagged message.
#[derive(Debug, Clone, Serialize)]
pub struct WorkersAiMessage {
    pub role: String,
    pub content: String,
}

/// Response envelope shared by all Cloudflare v4 API endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkersAiEnvelope {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<WorkersAiApiError>,
    #[serde(default)]
    pub result: Option<WorkersAiResult>,
}

impl WorkersAiEnvelope {
    /// All error messages joined, or a placeholder when the list is empty.
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return "request was not successful".to_string();
        }
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.code, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkersAiApiError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// The `result` object of a text-generation run.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkersAiResult {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub usage: Option<WorkersAiUsage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkersAiUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let req = WorkersAiRequest {
            messages: vec![
                WorkersAiMessage {
                    role: "system".to_string(),
                    content: "explain".to_string(),
                },
                WorkersAiMessage {
                    role: "user".to_string(),
                    content: "ls".to_string(),
                },
            ],
            stream: false,
            max_tokens: None,
            temperature: Some(0.3),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "messages": [
                    {"role": "system", "content": "explain"},
                    {"role": "user", "content": "ls"}
                ],
                "stream": false,
                "temperature": 0.3
            })
        );
    }

    #[test]
    fn test_success_envelope() {
        let json = r#"{
            "result": {
                "response": "**Command:** `ls`",
                "usage": {"prompt_tokens": 210, "completion_tokens": 95, "total_tokens": 305}
            },
            "success": true,
            "errors": [],
            "messages": []
        }"#;
        let env: WorkersAiEnvelope = serde_json::from_str(json).unwrap();
        assert!(env.success);
        let result = env.result.unwrap();
        assert_eq!(result.response.as_deref(), Some("**Command:** `ls`"));
        assert_eq!(result.usage.unwrap().completion_tokens, 95);
    }

    #[test]
    fn test_result_without_response_or_usage() {
        let json = r#"{"result": {}, "success": true, "errors": []}"#;
        let env: WorkersAiEnvelope = serde_json::from_str(json).unwrap();
        let result = env.result.unwrap();
        assert!(result.response.is_none());
        assert!(result.usage.is_none());
    }

    #[test]
    fn test_error_envelope_summary() {
        let json = r#"{
            "result": null,
            "success": false,
            "errors": [{"code": 7000, "message": "No route for that URI"}],
            "messages": []
        }"#;
        let env: WorkersAiEnvelope = serde_json::from_str(json).unwrap();
        assert!(!env.success);
        assert!(env.result.is_none());
        assert_eq!(env.error_summary(), "7000: No route for that URI");

        let bare: WorkersAiEnvelope = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(bare.error_summary(), "request was not successful");
    }
}
