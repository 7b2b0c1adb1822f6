/// LLM Client — the single point of entry for all Ollama calls in the harness.
///
/// ARCHITECTURAL RULE: No other module may talk to the model server directly.
/// All model interactions MUST go through this module.
use anyhow::Result;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const CHAT_ENDPOINT: &str = "/api/chat";
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model server unavailable after {retries} retries")]
    Unavailable { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    /// "json" constrains the model to emit a single JSON object.
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub message: ResponseMessage,
    pub done: bool,
    #[serde(default)]
    pub total_duration: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
}

impl ChatResponse {
    /// Returns the assistant text, or `None` if the model produced nothing.
    pub fn text(&self) -> Option<&str> {
        let content = self.message.content.trim();
        (!content.is_empty()).then_some(content)
    }
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// The single LLM client used by every pipeline step.
/// Wraps the Ollama chat API with retry logic and a structured-output helper.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Calls the model in JSON output mode and deserializes the response
    /// text. The prompt must describe the expected JSON schema. Retries on
    /// connection failures and 5xx errors with exponential backoff.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let response = self.call_inner(prompt, system, Some("json")).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;

        // Some models wrap JSON in markdown fences even in JSON mode
        let text = strip_json_fences(text);

        serde_json::from_str(text).map_err(LlmError::Parse)
    }

    async fn call_inner(
        &self,
        prompt: &str,
        system: &str,
        format: Option<&str>,
    ) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            stream: false,
            format,
        };

        let url = format!("{}{}", self.base_url, CHAT_ENDPOINT);
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self.client.post(&url).json(&request_body).send().await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Model server returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Ollama reports errors as {"error": "..."}
                let message = serde_json::from_str::<OllamaError>(&body)
                    .map(|e| e.error)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let chat_response: ChatResponse = response.json().await?;

            if !chat_response.done {
                warn!("Model response marked not done despite stream=false");
            }

            debug!(
                model = %self.model,
                duration_ns = chat_response.total_duration,
                "LLM call succeeded"
            );

            return Ok(chat_response);
        }

        Err(last_error.unwrap_or(LlmError::Unavailable {
            retries: MAX_RETRIES,
        }))
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    for prefix in ["```json", "```"] {
        if let Some(inner) = text.strip_prefix(prefix) {
            let inner = inner.trim_start();
            return inner.strip_suffix("```").map(str::trim).unwrap_or(inner);
        }
    }
    text
}
