/*!
 * Prompt assembly for chat-based translation.
 *
 * Turns a target language and an ordered list of text queries into the
 * message list of one chat exchange: a system message, an optional
 * demonstration pair, and one-or-more user messages each holding a batch
 * of numbered queries under the token budget.
 */

use crate::app_config::ChatSample;
use crate::language_utils::Language;
use crate::providers::ChatMessage;

/// Character budget per batch, used as a token-count proxy
pub const MAX_TOKENS: usize = 32768;

/// Template string with a `{to_lang}` placeholder
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// Create a new prompt template
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: template.into() }
    }

    /// Render the template with the target language name substituted
    pub fn render(&self, to_lang: Language) -> String {
        self.template.replace("{to_lang}", to_lang.name())
    }
}

/// Assembles the message list for one translation exchange
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    /// System message template
    system_template: PromptTemplate,
    /// Instruction template seeding each batch
    prompt_template: PromptTemplate,
    /// Demonstration exchange for the target language
    chat_sample: Option<ChatSample>,
    /// Whether batches are seeded with the instruction template
    include_template: bool,
    /// Whether batches end with an opening marker for the reply
    return_prompt: bool,
    /// Character budget per batch
    max_tokens: usize,
}

impl PromptAssembler {
    /// Create an assembler with the given templates
    pub fn new(system_template: PromptTemplate, prompt_template: PromptTemplate) -> Self {
        Self {
            system_template,
            prompt_template,
            chat_sample: None,
            include_template: true,
            return_prompt: false,
            max_tokens: MAX_TOKENS,
        }
    }

    /// Set the demonstration exchange
    pub fn chat_sample(mut self, sample: Option<ChatSample>) -> Self {
        self.chat_sample = sample;
        self
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

    /// Override the character budget per batch
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Assemble the message list for the given queries
    ///
    /// Queries are numbered `<|k|>` with k restarting at 1 for every
    /// batch; a batch is closed when the characters of the remaining
    /// queries exceed the budget. The concatenation of all batches covers
    /// the query list in order.
    pub fn assemble(&self, to_lang: Language, queries: &[String]) -> Vec<ChatMessage> {
        let mut messages = Vec::new();

        messages.push(ChatMessage::system(self.system_template.render(to_lang)));

        if let Some(sample) = &self.chat_sample {
            messages.push(ChatMessage::user(sample.user.clone()));
            messages.push(ChatMessage::assistant(sample.assistant.clone()));
        }

        let template = if self.include_template {
            self.prompt_template.render(to_lang)
        } else {
            String::new()
        };

        let mut prompt = template.clone();
        if self.return_prompt {
            prompt.push_str("\nOriginal:");
        }

        let first_user = messages.len();
        let mut offset = 0usize;
        for (i, query) in queries.iter().enumerate() {
            prompt.push_str(&format!("\n<|{}|>{}", i - offset + 1, query));

            let remaining: usize = queries[i + 1..].iter().map(|q| q.chars().count()).sum();
            if remaining > self.max_tokens {
                if self.return_prompt {
                    prompt.push_str("\n<|1|>");
                }
                messages.push(ChatMessage::user(prompt.trim_start().to_string()));
                prompt = template.clone();
                offset = i + 1;
            }
        }

        // The trailing partial batch; an empty query list still yields one
        // user message so the exchange stays well-formed.
        if !prompt.is_empty() || messages.len() == first_user {
            if self.return_prompt {
                prompt.push_str("\n<|1|>");
            }
            messages.push(ChatMessage::user(prompt.trim_start().to_string()));
        }

        messages
    }
}
