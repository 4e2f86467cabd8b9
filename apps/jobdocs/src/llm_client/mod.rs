/// LLM Client: the single point of entry for chat-completion calls in jobdocs.
///
/// Talks to an Azure OpenAI deployment exposed through an API gateway:
/// `POST <base>/openai/deployments/<model>/chat/completions?api-version=<version>`.
///
/// Calls are not retried. A failed summarization aborts the row being processed.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::errors::AppError;

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Malformed response (status {status}), expected choices[0].message.content: {body}")]
    MalformedResponse { status: u16, body: String },
}

/// Anything that can turn a prompt into generated text.
/// The orchestrator only sees this trait; `LlmClient` is the production backend.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, prompt: &str) -> Result<String, AppError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    api_version: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(LlmError::Http)?;

        Ok(Self {
            client,
            api_key: config.azure_openai_api_key.clone(),
            base_url: config.azure_apim_base_url.clone(),
            model: config.azure_deployment_model.clone(),
            api_version: config.azure_api_version.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.base_url, self.model, self.api_version
        )
    }

    /// Sends a single user message and returns the first choice's content.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_completion(status, &body)
    }
}

#[async_trait]
impl Summarizer for LlmClient {
    async fn summarize(&self, prompt: &str) -> Result<String, AppError> {
        Ok(self.complete(prompt).await?)
    }
}

/// Only a 200 with a non-empty `choices[0].message.content` counts as success.
/// Everything else keeps the raw body for diagnosis.
fn decode_completion(status: u16, body: &str) -> Result<String, LlmError> {
    if status != 200 {
        return Err(LlmError::Api {
            status,
            body: body.to_string(),
        });
    }

    let malformed = || LlmError::MalformedResponse {
        status,
        body: body.to_string(),
    };

    let parsed: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        debug!("LLM response is not valid JSON: {e}");
        malformed()
    })?;

    if let Some(usage) = &parsed.usage {
        debug!(
            "LLM call succeeded: prompt_tokens={:?}, completion_tokens={:?}",
            usage.prompt_tokens, usage.completion_tokens
        );
    }

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(malformed)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            azure_openai_api_key: "key".to_string(),
            azure_apim_base_url: "https://apim.example.net/esotad".to_string(),
            azure_deployment_model: "gpt-4o".to_string(),
            azure_api_version: "2024-07-01-preview".to_string(),
            google_access_token: "token".to_string(),
            spreadsheet_id: "sheet".to_string(),
            sheet_name: "Form Responses 1".to_string(),
            docs_folder_id: "folder".to_string(),
            jd_content_policy: Default::default(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_endpoint_includes_deployment_and_api_version() {
        let client = LlmClient::new(&test_config()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://apim.example.net/esotad/openai/deployments/gpt-4o/chat/completions?api-version=2024-07-01-preview"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatCompletionRequest {
            model: "gpt-4o",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "hello"}]
            })
        );
    }

    #[test]
    fn test_decode_success_returns_first_choice_content() {
        let body = r#"{
            "choices": [{"message": {"role": "assistant", "content": "Drafted JD"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}
        }"#;
        assert_eq!(decode_completion(200, body).unwrap(), "Drafted JD");
    }

    #[test]
    fn test_decode_non_200_keeps_status_and_body() {
        let err = decode_completion(500, "upstream exploded").unwrap_err();
        match err {
            LlmError::Api { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_empty_choices_is_malformed() {
        let err = decode_completion(200, r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse { .. }));
    }

    #[test]
    fn test_decode_missing_content_is_malformed() {
        let err = decode_completion(200, r#"{"choices": [{"message": {"role": "assistant"}}]}"#)
            .unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse { .. }));
    }

    #[test]
    fn test_decode_invalid_json_keeps_status_and_body() {
        let err = decode_completion(200, "<html>gateway</html>").unwrap_err();
        match err {
            LlmError::MalformedResponse { status, body } => {
                assert_eq!(status, 200);
                assert_eq!(body, "<html>gateway</html>");
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_accepts_partial_usage() {
        let body = r#"{"choices":[{"message":{"content":"JD"}}],"usage":{"prompt_tokens":5}}"#;
        assert_eq!(decode_completion(200, body).unwrap(), "JD");
    }
}
