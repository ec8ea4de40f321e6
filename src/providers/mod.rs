/*!
 * Chat-completion capability for the translator.
 *
 * This module defines the interface every chat backend must implement,
 * together with the message and response types exchanged over it:
 * - `openai_chat`: OpenAI-compatible HTTP client
 * - `mock`: Scripted capability for tests
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::ProviderError;

/// HTTP-style status code of a successful completion
pub const STATUS_OK: u16 = 200;

/// Role of a chat message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn of a chat exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: Role,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Shape requested for the completion payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultFormat {
    /// Structured message objects
    #[default]
    Message,
    /// Plain text completion
    Text,
}

impl ResultFormat {
    /// Wire identifier for the format
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Text => "text",
        }
    }
}

/// One completion candidate in a response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    pub message: ChatMessage,
}

/// Completion payload of a response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatOutput {
    /// Candidate completions, best first
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// Response from a chat-completion capability
///
/// The status code is reported for every well-formed reply, success or
/// not, so callers can apply their own policy to non-OK responses.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// HTTP-style status code
    pub status_code: u16,
    /// Completion payload (empty on non-success responses)
    pub output: ChatOutput,
}

impl ChatResponse {
    /// Build a successful response with a single assistant message
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            status_code: STATUS_OK,
            output: ChatOutput {
                choices: vec![ChatChoice { message: ChatMessage::assistant(content) }],
            },
        }
    }

    /// Build a response carrying only a status code
    pub fn with_status(status_code: u16) -> Self {
        Self { status_code, output: ChatOutput::default() }
    }

    /// Whether the capability reported success
    pub fn is_ok(&self) -> bool {
        self.status_code == STATUS_OK
    }

    /// Content of the first completion candidate, if any
    pub fn first_content(&self) -> Option<&str> {
        self.output.choices.first().map(|c| c.message.content.as_str())
    }
}

/// Common trait for all chat-completion backends
///
/// This trait defines the capability the translator needs from a chat
/// backend, allowing HTTP clients and test doubles to be used
/// interchangeably.
#[async_trait]
pub trait ChatCompletion: Send + Sync + Debug {
    /// Send an ordered message list and receive a completion
    ///
    /// # Arguments
    /// * `model` - Model identifier to complete with
    /// * `messages` - Ordered role/content messages of the exchange
    /// * `seed` - Seed for this generation
    /// * `result_format` - Requested payload shape
    ///
    /// # Returns
    /// * `Result<ChatResponse, ProviderError>` - The response, or a transport error
    async fn call(
        &self,
        model: &str,
        messages: &[ChatMessage],
        seed: u64,
        result_format: ResultFormat,
    ) -> Result<ChatResponse, ProviderError>;
}

pub mod mock;
pub mod openai_chat;
