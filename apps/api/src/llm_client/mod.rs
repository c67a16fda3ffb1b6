/// Generation client — the single point of entry for upstream model calls in Compass.
///
/// ARCHITECTURAL RULE: no other module may reach the text-generation endpoint
/// directly. Every model interaction goes through the `TextGenerator` trait,
/// which production code satisfies with `HttpGenerationClient` and tests with
/// a canned double.
///
/// Exactly one upstream exchange per request: no retry loop, no streaming,
/// no session state beyond what the prompt text carries.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
/// The model used for all generation calls in Compass.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-5";

/// Classified upstream failure. Callers branch on the variant: structured
/// content kinds absorb both into fallback content, chat surfaces both as a
/// retry condition.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("upstream rate limit hit")]
    Throttled,

    #[error("transport failure: {0}")]
    Transport(String),
}

/// Options applied to a single generation call.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_tokens: u32,
    /// Hard ceiling on the whole round trip. A hung upstream call fails with
    /// `Transport` instead of blocking the request indefinitely.
    pub deadline: Duration,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 4096,
            deadline: Duration::from_secs(30),
        }
    }
}

/// The text-generation seam. Carried in `AppState` as `Arc<dyn TextGenerator>`
/// so handlers and tests inject their own implementation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one prompt and returns the raw completion text.
    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        opts: &GenerationOptions,
    ) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl MessagesResponse {
    /// Extracts the text content from the first text block.
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

/// Production client for the messages endpoint.
#[derive(Clone)]
pub struct HttpGenerationClient {
    client: Client,
    api_key: String,
}

impl HttpGenerationClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for HttpGenerationClient {
    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        opts: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        let request_body = MessagesRequest {
            model: MODEL,
            max_tokens: opts.max_tokens,
            temperature: opts.temperature,
            system,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let exchange = async {
            let response = self
                .client
                .post(API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", API_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await
                .map_err(|e| GenerationError::Transport(e.to_string()))?;

            let status = response.status();

            if status.as_u16() == 429 {
                return Err(GenerationError::Throttled);
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(GenerationError::Transport(format!(
                    "status {status}: {body}"
                )));
            }

            response
                .json::<MessagesResponse>()
                .await
                .map_err(|e| GenerationError::Transport(e.to_string()))
        };

        let parsed = tokio::time::timeout(opts.deadline, exchange)
            .await
            .map_err(|_| {
                GenerationError::Transport(format!(
                    "deadline of {}s exceeded",
                    opts.deadline.as_secs()
                ))
            })??;

        debug!(
            "generation call succeeded: input_tokens={}, output_tokens={}",
            parsed.usage.input_tokens, parsed.usage.output_tokens
        );

        match parsed.text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(GenerationError::Transport("empty completion".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(blocks: Vec<ContentBlock>) -> MessagesResponse {
        MessagesResponse {
            content: blocks,
            usage: Usage {
                input_tokens: 10,
                output_tokens: 20,
            },
        }
    }

    #[test]
    fn test_text_picks_first_text_block() {
        let response = response_with(vec![
            ContentBlock {
                block_type: "thinking".to_string(),
                text: None,
            },
            ContentBlock {
                block_type: "text".to_string(),
                text: Some("hello".to_string()),
            },
        ]);
        assert_eq!(response.text(), Some("hello"));
    }

    #[test]
    fn test_text_none_when_no_text_block() {
        let response = response_with(vec![ContentBlock {
            block_type: "tool_use".to_string(),
            text: None,
        }]);
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_default_options_carry_a_deadline() {
        let opts = GenerationOptions::default();
        assert!(opts.deadline > Duration::ZERO);
        assert!(opts.max_tokens > 0);
    }
}
