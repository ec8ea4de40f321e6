/*!
 * Chat-based translation of extracted manga text.
 *
 * This module contains the translator backend proper, split into several
 * submodules:
 *
 * - `core`: Translator facade, model descriptors, and the request retry loop
 * - `prompts`: Prompt assembly and token-bounded query batching
 * - `response`: Reply parsing and marker alignment
 */

// Re-export main types for easier usage
pub use self::core::{ChatTranslator, ModelDescriptor, RETRY_ATTEMPTS};
pub use self::prompts::{MAX_TOKENS, PromptAssembler, PromptTemplate};
pub use self::response::parse_response;

// Submodules
pub mod core;
pub mod prompts;
pub mod response;
