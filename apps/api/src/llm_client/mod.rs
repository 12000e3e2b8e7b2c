//! LLM Client — the single point of entry for all OpenAI calls in the analyzer.
//!
//! No other module may call the chat-completion API directly.
//! Handlers depend on the `ChatCompletions` trait; `LlmClient` is the
//! production implementation.
//!
//! Model: gpt-4o (hardcoded, as is the sampling temperature)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(test)]
pub mod stub;

pub const MODEL: &str = "gpt-4o";
pub const TEMPERATURE: f32 = 0.2;
/// Ceiling on a single outbound call; exceeding it is reported as a transport failure.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },
}

/// Envelope sent to the chat-completion endpoint. Built fresh per request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpstreamChatRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl UpstreamChatRequest {
    /// System instructions first, then the user turn.
    pub fn new(system: &str, user: String) -> Self {
        Self {
            model: MODEL.to_string(),
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user,
                },
            ],
        }
    }
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct UsageEnvelope {
    usage: Option<Usage>,
}

/// Outbound seam for the analysis handler. Returns the raw body of a
/// successful (< 400) response; everything else is an `LlmError`.
#[async_trait]
pub trait ChatCompletions: Send + Sync {
    async fn complete(&self, request: &UpstreamChatRequest) -> Result<String, LlmError>;
}

/// Wraps the OpenAI chat-completion API. One attempt per call, no retry.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, api_url: String) -> Result<Self, LlmError> {
        Self::with_timeout(api_key, api_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        api_key: String,
        api_url: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            api_url,
        })
    }
}

#[async_trait]
impl ChatCompletions for LlmClient {
    async fn complete(&self, request: &UpstreamChatRequest) -> Result<String, LlmError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("OpenAI request failed: {e}");
                LlmError::Http(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() >= 400 {
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        if let Ok(UsageEnvelope { usage: Some(usage) }) = serde_json::from_str(&body) {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(body)
    }
}
