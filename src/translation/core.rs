/*!
 * Core chat translation service.
 *
 * This module contains the translator facade composing prompt assembly,
 * the bounded-retry request executor, and response parsing into a single
 * `translate` operation, parameterized by a model descriptor and a
 * chat-completion capability.
 */

use log::{debug, error, warn};
use rand::Rng;
use std::time::Duration;

use crate::app_config::{Config, LlmConfig};
use crate::errors::TranslationError;
use crate::language_utils::Language;
use crate::providers::{ChatCompletion, ChatMessage, ResultFormat};
use crate::translation::prompts::{PromptAssembler, PromptTemplate};
use crate::translation::response::parse_response;

/// Maximum number of request attempts before giving up
pub const RETRY_ATTEMPTS: u32 = 3;

/// Pause between attempts
const RETRY_PAUSE: Duration = Duration::from_secs(1);

/// Identity of one model tier: provider model name plus config namespace
///
/// Tiers differ only in this data, never in behavior; one translator
/// implementation serves every descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelDescriptor {
    /// Model identifier sent to the capability
    pub model: &'static str,
    /// Namespace prefix for configuration lookups
    pub config_key: &'static str,
}

impl ModelDescriptor {
    /// Turbo tier
    pub const TURBO: Self = Self { model: "qwen-turbo", config_key: "qwen_turbo" };

    /// Plus tier
    pub const PLUS: Self = Self { model: "qwen-plus", config_key: "qwen_plus" };
}

/// Chat-based translator over a chat-completion capability
#[derive(Debug)]
pub struct ChatTranslator<C: ChatCompletion> {
    /// Model tier identity
    descriptor: ModelDescriptor,
    /// Chat-completion capability used for requests
    client: C,
    /// Bound translator configuration
    config: LlmConfig,
    /// Whether user prompts are seeded with the instruction template
    include_template: bool,
    /// Whether batches end with an opening marker for the reply
    return_prompt: bool,
}

impl<C: ChatCompletion> ChatTranslator<C> {
    /// Create a translator for the given model tier
    pub fn new(descriptor: ModelDescriptor, client: C) -> Self {
        Self {
            descriptor,
            client,
            config: LlmConfig::default(),
            include_template: true,
            return_prompt: false,
        }
    }

    /// Create a Turbo-tier translator
    pub fn turbo(client: C) -> Self {
        Self::new(ModelDescriptor::TURBO, client)
    }

    /// Create a Plus-tier translator
    pub fn plus(client: C) -> Self {
        Self::new(ModelDescriptor::PLUS, client)
    }

    /// Bind the host configuration before use
    pub fn parse_args(&mut self, config: &Config) {
        self.config = config.llm.clone();
    }

    /// Enable or disable the instruction template
    pub fn include_template(mut self, include: bool) -> Self {
        self.include_template = include;
        self
    }

    /// Enable or disable the closing reply marker
    pub fn return_prompt(mut self, enabled: bool) -> Self {
        self.return_prompt = enabled;
        self
    }

    /// Model identifier of this tier
    pub fn model(&self) -> &'static str {
        self.descriptor.model
    }

    /// Configured sampling temperature for this tier
    pub fn temperature(&self) -> f32 {
        self.config.temperature(self.descriptor.config_key)
    }

    /// Configured nucleus sampling mass for this tier
    pub fn top_p(&self) -> f32 {
        self.config.top_p(self.descriptor.config_key)
    }

    /// Build the assembler from the configuration bound to this tier
    fn assembler(&self, to_lang: Language) -> PromptAssembler {
        let key = self.descriptor.config_key;
        PromptAssembler::new(
            PromptTemplate::new(self.config.chat_system_template(key)),
            PromptTemplate::new(self.config.prompt_template(key)),
        )
        .chat_sample(self.config.chat_sample(key, to_lang))
        .include_template(self.include_template)
        .return_prompt(self.return_prompt)
    }

    /// Translate an ordered list of queries
    ///
    /// Returns one translation per query in the same order, or an empty
    /// list when the reply could not be aligned with the queries.
    pub async fn translate(
        &self,
        from_lang: Language,
        to_lang: Language,
        queries: &[String],
    ) -> Result<Vec<String>, TranslationError> {
        let messages = self.assembler(to_lang).assemble(to_lang, queries);
        debug!(
            "Assembled {} messages for {} queries ({} -> {})",
            messages.len(),
            queries.len(),
            from_lang,
            to_lang
        );

        let reply = self.perform_request(to_lang, &messages).await?;

        let translations = parse_response(&reply, queries.len());
        debug!("Parsed {} of {} translations", translations.len(), queries.len());
        Ok(translations)
    }

    /// Send the assembled exchange, retrying transport failures
    ///
    /// Capability errors are retried up to `RETRY_ATTEMPTS` times with a
    /// 1-second non-blocking pause between attempts. A well-formed non-OK
    /// response is returned as an empty reply immediately, without retry.
    /// Dropping the returned future between attempts stops the loop.
    async fn perform_request(
        &self,
        to_lang: Language,
        messages: &[ChatMessage],
    ) -> Result<String, TranslationError> {
        let mut attempt = 0;
        while attempt < RETRY_ATTEMPTS {
            let seed = rand::rng().random_range(1..=10_000);
            match self
                .client
                .call(self.descriptor.model, messages, seed, ResultFormat::Message)
                .await
            {
                Ok(response) => {
                    debug!(
                        "{} replied with status {} for {}",
                        self.descriptor.model, response.status_code, to_lang
                    );
                    if !response.is_ok() {
                        return Ok(String::new());
                    }
                    match response.first_content() {
                        Some(content) => return Ok(content.to_string()),
                        None => error!(
                            "Response contained no choices, retrying... Attempt: {}",
                            attempt + 1
                        ),
                    }
                }
                Err(e) if e.is_timeout() => {
                    warn!("Request timeout: {}, retrying... Attempt: {}", e, attempt + 1);
                }
                Err(e) => {
                    error!("An error occurred: {}, retrying... Attempt: {}", e, attempt + 1);
                }
            }
            attempt += 1;
            tokio::time::sleep(RETRY_PAUSE).await;
        }

        Err(TranslationError::RequestFailed { attempts: RETRY_ATTEMPTS })
    }
}
