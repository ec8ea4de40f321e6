/*!
 * Error types for the mangatl library.
 *
 * This module contains custom error types for different parts of the library,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised by a chat-completion capability
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when a request exceeds the capability's time budget
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

impl ProviderError {
    /// Whether this error came from a timeout rather than a hard failure
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error when every request attempt has failed
    #[error("Translation request failed after {attempts} attempts")]
    RequestFailed {
        /// Number of attempts made before giving up
        attempts: u32,
    },

    /// Error from the chat-completion capability
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}
