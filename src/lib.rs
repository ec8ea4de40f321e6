/*!
 * # mangatl - LLM chat translation for manga pipelines
 *
 * A Rust library implementing the chat-completion translator backend of a
 * manga translation pipeline.
 *
 * ## Features
 *
 * - Batch short text fragments into token-bounded chat prompts
 * - Correlate replies to queries with numbered `<|k|>` markers
 * - Bounded retry with non-blocking pauses between attempts
 * - One-shot demonstration exchanges per target language
 * - Configurable prompt templates and sampling parameters
 * - Pluggable chat-completion capability (HTTP client or mock)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `language_utils`: Language code table and lookup
 * - `translation`: Chat-based translation:
 *   - `translation::core`: Translator facade and request retry loop
 *   - `translation::prompts`: Prompt assembly and query batching
 *   - `translation::response`: Reply parsing and alignment
 * - `providers`: Chat-completion capability implementations:
 *   - `providers::openai_chat`: OpenAI-compatible HTTP client
 *   - `providers::mock`: Scripted capability for tests
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::{ChatSample, Config, LlmConfig};
pub use errors::{ProviderError, TranslationError};
pub use language_utils::Language;
pub use providers::{ChatCompletion, ChatMessage, ChatResponse, ResultFormat, Role};
pub use translation::{ChatTranslator, ModelDescriptor};
