/*!
 * Mock chat-completion capability for testing.
 *
 * This module provides a scripted capability that simulates different
 * backend behaviors:
 * - `MockChat::working(reply)` - Always succeeds with the given reply
 * - `MockChat::fail_then(n, reply)` - Errors for the first n calls, then succeeds
 * - `MockChat::status(code)` - Returns a well-formed non-OK response
 * - `MockChat::timeout()` - Always raises a timeout error
 * - `MockChat::failing()` - Always raises a request error
 * - `MockChat::empty_choices()` - Succeeds with no completion candidates
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::{ChatCompletion, ChatMessage, ChatResponse, ResultFormat};

/// Behavior mode for the mock capability
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with the given reply
    Working { reply: String },
    /// Errors for the first `failures` calls, then succeeds with the reply
    FailThen { failures: usize, reply: String },
    /// Returns a well-formed response with the given non-OK status
    Status { code: u16 },
    /// Always raises a timeout error
    Timeout,
    /// Always raises a request error
    Failing,
    /// Succeeds with an empty choices list
    EmptyChoices,
}

/// Scripted chat-completion capability for tests
#[derive(Debug)]
pub struct MockChat {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of calls made so far
    call_count: Arc<AtomicUsize>,
    /// Messages of the most recent call
    last_messages: Arc<StdMutex<Vec<ChatMessage>>>,
    /// Model of the most recent call
    last_model: Arc<StdMutex<String>>,
}

impl MockChat {
    /// Create a mock with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            last_messages: Arc::new(StdMutex::new(Vec::new())),
            last_model: Arc::new(StdMutex::new(String::new())),
        }
    }

    /// Mock that always succeeds with the given reply
    pub fn working(reply: impl Into<String>) -> Self {
        Self::new(MockBehavior::Working { reply: reply.into() })
    }

    /// Mock that errors for the first `failures` calls, then succeeds
    pub fn fail_then(failures: usize, reply: impl Into<String>) -> Self {
        Self::new(MockBehavior::FailThen { failures, reply: reply.into() })
    }

    /// Mock that returns a well-formed non-OK response
    pub fn status(code: u16) -> Self {
        Self::new(MockBehavior::Status { code })
    }

    /// Mock that always times out
    pub fn timeout() -> Self {
        Self::new(MockBehavior::Timeout)
    }

    /// Mock that always fails with a request error
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Mock that succeeds with no completion candidates
    pub fn empty_choices() -> Self {
        Self::new(MockBehavior::EmptyChoices)
    }

    /// Handle onto the call counter, usable after the mock is moved
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }

    /// Handle onto the most recent call's messages
    pub fn message_log(&self) -> Arc<StdMutex<Vec<ChatMessage>>> {
        Arc::clone(&self.last_messages)
    }

    /// Handle onto the most recent call's model name
    pub fn model_log(&self) -> Arc<StdMutex<String>> {
        Arc::clone(&self.last_model)
    }
}

#[async_trait]
impl ChatCompletion for MockChat {
    async fn call(
        &self,
        model: &str,
        messages: &[ChatMessage],
        _seed: u64,
        _result_format: ResultFormat,
    ) -> Result<ChatResponse, ProviderError> {
        let call_index = self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().unwrap() = messages.to_vec();
        *self.last_model.lock().unwrap() = model.to_string();

        match &self.behavior {
            MockBehavior::Working { reply } => Ok(ChatResponse::with_content(reply.clone())),
            MockBehavior::FailThen { failures, reply } => {
                if call_index < *failures {
                    Err(ProviderError::RequestFailed(format!(
                        "Scripted failure {} of {}",
                        call_index + 1,
                        failures
                    )))
                } else {
                    Ok(ChatResponse::with_content(reply.clone()))
                }
            }
            MockBehavior::Status { code } => Ok(ChatResponse::with_status(*code)),
            MockBehavior::Timeout => {
                Err(ProviderError::Timeout("Scripted timeout".to_string()))
            }
            MockBehavior::Failing => {
                Err(ProviderError::RequestFailed("Scripted failure".to_string()))
            }
            MockBehavior::EmptyChoices => Ok(ChatResponse::with_status(super::STATUS_OK)),
        }
    }
}
