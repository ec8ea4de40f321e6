use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::language_utils::Language;

/// Translator configuration module
/// This module holds the string-keyed settings the host pipeline supplies
/// to the LLM translator, with typed accessors and namespaced lookup.
/// Default sampling temperature
const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Default nucleus sampling mass
const DEFAULT_TOP_P: f32 = 1.0;

/// Default system message template
pub const DEFAULT_CHAT_SYSTEM_TEMPLATE: &str = "You are a helpful assistant.";

/// Default instruction template prepended to each batch of queries
pub const DEFAULT_PROMPT_TEMPLATE: &str = "Please help me to translate the following text \
from a manga to {to_lang} (if it's already in {to_lang} or looks like gibberish you have \
to output it as it is instead):\n";

/// Host pipeline configuration visible to this backend
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Settings for the LLM translator
    #[serde(default)]
    pub llm: LlmConfig,
}

/// One-shot demonstration exchange for a target language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSample {
    /// Example user turn
    pub user: String,
    /// Example assistant turn
    pub assistant: String,
}

/// String-keyed translator settings
///
/// Keys can be namespaced per model tier (`qwen_turbo.temperature`) or
/// shared (`temperature`). Lookup tries the namespaced key first, then the
/// bare key, then a hardcoded default.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LlmConfig {
    #[serde(flatten)]
    values: HashMap<String, Value>,
}

impl LlmConfig {
    /// Create an empty configuration (all accessors return defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a raw configuration value, replacing any existing one
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Look up `<namespace>.<key>`, falling back to the bare `<key>`
    fn lookup(&self, namespace: &str, key: &str) -> Option<&Value> {
        self.values
            .get(&format!("{}.{}", namespace, key))
            .or_else(|| self.values.get(key))
    }

    /// Instruction template prepended to each batch of queries
    pub fn prompt_template(&self, namespace: &str) -> String {
        self.lookup(namespace, "prompt_template")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PROMPT_TEMPLATE)
            .to_string()
    }

    /// Sampling temperature
    pub fn temperature(&self, namespace: &str) -> f32 {
        self.lookup(namespace, "temperature")
            .and_then(Value::as_f64)
            .map(|v| v as f32)
            .unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// Nucleus sampling mass
    pub fn top_p(&self, namespace: &str) -> f32 {
        self.lookup(namespace, "top_p")
            .and_then(Value::as_f64)
            .map(|v| v as f32)
            .unwrap_or(DEFAULT_TOP_P)
    }

    /// System message template with a `{to_lang}` placeholder
    pub fn chat_system_template(&self, namespace: &str) -> String {
        self.lookup(namespace, "chat_system_template")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_CHAT_SYSTEM_TEMPLATE)
            .to_string()
    }

    /// Demonstration exchange for the target language, if configured
    ///
    /// Samples are stored as a mapping from language code to a two-element
    /// `[user, assistant]` array; anything else is ignored.
    pub fn chat_sample(&self, namespace: &str, to_lang: Language) -> Option<ChatSample> {
        let pair = self
            .lookup(namespace, "chat_sample")?
            .as_object()?
            .get(to_lang.code())?
            .as_array()?;
        if pair.len() != 2 {
            return None;
        }
        Some(ChatSample {
            user: pair[0].as_str()?.to_string(),
            assistant: pair[1].as_str()?.to_string(),
        })
    }
}
