use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{ChatCompletion, ChatMessage, ChatOutput, ChatResponse, ResultFormat};

/// Default public endpoint
const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// Request time budget in seconds. Enforced by the HTTP client; the
/// translator's retry loop applies no timeout of its own.
const DEFAULT_TIMEOUT_SECS: u64 = 420;

/// OpenAI-compatible chat-completions client
///
/// Works against any server speaking the `/v1/chat/completions` protocol.
#[derive(Debug)]
pub struct OpenAiChat {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to the public API)
    endpoint: String,
    /// Temperature for generation
    temperature: Option<f32>,
    /// Top probability mass to consider (nucleus sampling)
    top_p: Option<f32>,
}

/// Chat-completions request body
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    /// The model to use
    model: &'a str,

    /// The messages for the conversation
    messages: &'a [ChatMessage],

    /// Seed for this generation
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Top probability mass to consider (nucleus sampling)
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

impl OpenAiChat {
    /// Create a new client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            temperature: None,
            top_p: None,
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the top_p (nucleus sampling)
    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// URL of the chat-completions resource
    fn api_url(&self) -> String {
        if self.endpoint.is_empty() {
            format!("{}/v1/chat/completions", DEFAULT_ENDPOINT)
        } else {
            format!("{}/v1/chat/completions", self.endpoint.trim_end_matches('/'))
        }
    }

    /// Test the connection with a minimal exchange
    pub async fn test_connection(&self, model: &str) -> Result<(), ProviderError> {
        let messages = [ChatMessage::user("Hello")];
        let response = self.call(model, &messages, 1, ResultFormat::Message).await?;
        if response.is_ok() {
            Ok(())
        } else {
            Err(ProviderError::RequestFailed(format!(
                "Connection test returned status {}",
                response.status_code
            )))
        }
    }
}

#[async_trait]
impl ChatCompletion for OpenAiChat {
    async fn call(
        &self,
        model: &str,
        messages: &[ChatMessage],
        seed: u64,
        _result_format: ResultFormat,
    ) -> Result<ChatResponse, ProviderError> {
        let request = ChatCompletionRequest {
            model,
            messages,
            seed: Some(seed),
            temperature: self.temperature,
            top_p: self.top_p,
        };

        let response = self
            .client
            .post(self.api_url())
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Chat API error ({}): {}", status, error_text);
            return Ok(ChatResponse::with_status(status.as_u16()));
        }

        debug!("Chat API returned {} for model {}", status, model);

        // Unknown fields (id, usage, finish_reason) are ignored; only the
        // choices list matters to the translator.
        let output = response
            .json::<ChatOutput>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(ChatResponse { status_code: status.as_u16(), output })
    }
}
