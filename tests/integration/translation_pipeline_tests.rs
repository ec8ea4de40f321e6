/*!
 * End-to-end translation pipeline tests through the mock capability
 */

use serde_json::json;

use mangatl::app_config::Config;
use mangatl::language_utils::Language;
use mangatl::providers::Role;
use mangatl::providers::mock::MockChat;
use mangatl::translation::ChatTranslator;

fn queries(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

/// Test the whole pipeline from queries to aligned translations
#[tokio::test]
async fn test_pipeline_withMarkerReply_shouldReturnAlignedTranslations() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mock = MockChat::working("<|1|>Hello\n<|2|>Thank you");
    let message_log = mock.message_log();
    let translator = ChatTranslator::turbo(mock);

    let result = translator
        .translate(
            Language::Japanese,
            Language::English,
            &queries(&["こんにちは", "ありがとう"]),
        )
        .await
        .unwrap();

    assert_eq!(result, vec!["Hello".to_string(), "Thank you".to_string()]);

    // The whole exchange went out as one request: system message plus a
    // single user message carrying both numbered queries
    let messages = message_log.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[1].role, Role::User);
    assert!(messages[1].content.contains("<|1|>こんにちは"));
    assert!(messages[1].content.contains("<|2|>ありがとう"));
}

/// Test that a misaligned reply produces no translations at all
#[tokio::test]
async fn test_pipeline_withMisalignedReply_shouldReturnNoTranslations() {
    let translator = ChatTranslator::turbo(MockChat::working("<|1|>Only one"));

    let result = translator
        .translate(
            Language::Japanese,
            Language::English,
            &queries(&["こんにちは", "ありがとう"]),
        )
        .await
        .unwrap();

    assert!(result.is_empty());
}

/// Test the line-break fallback end to end
#[tokio::test]
async fn test_pipeline_withMarkerlessReply_shouldFallBackToLines() {
    let translator = ChatTranslator::turbo(MockChat::working("Hello\nThank you"));

    let result = translator
        .translate(
            Language::Japanese,
            Language::English,
            &queries(&["こんにちは", "ありがとう"]),
        )
        .await
        .unwrap();

    assert_eq!(result, vec!["Hello".to_string(), "Thank you".to_string()]);
}

/// Test that bound configuration shapes the outgoing exchange
#[tokio::test]
async fn test_pipeline_withBoundConfig_shouldUseTemplatesAndSample() {
    let config: Config = serde_json::from_value(json!({
        "llm": {
            "chat_system_template": "You translate manga into {to_lang}.",
            "qwen_turbo.prompt_template": "Render the following into {to_lang}:\n",
            "chat_sample": {
                "ENG": ["<|1|>恐怖の奴隷", "<|1|>Slave of fear"],
            },
        }
    }))
    .unwrap();

    let mock = MockChat::working("<|1|>Good morning");
    let message_log = mock.message_log();
    let mut translator = ChatTranslator::turbo(mock);
    translator.parse_args(&config);

    let result = translator
        .translate(Language::Japanese, Language::English, &queries(&["おはよう"]))
        .await
        .unwrap();

    assert_eq!(result, vec!["Good morning".to_string()]);

    let messages = message_log.lock().unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[0].content, "You translate manga into English.");
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "<|1|>恐怖の奴隷");
    assert_eq!(messages[2].role, Role::Assistant);
    assert_eq!(messages[2].content, "<|1|>Slave of fear");
    assert_eq!(messages[3].role, Role::User);
    assert!(messages[3].content.starts_with("Render the following into English:"));
    assert!(messages[3].content.contains("<|1|>おはよう"));
}

/// Test that a sample for another language is not injected
#[tokio::test]
async fn test_pipeline_withSampleForOtherLanguage_shouldSkipSample() {
    let config: Config = serde_json::from_value(json!({
        "llm": {
            "chat_sample": { "DEU": ["<|1|>やあ", "<|1|>Hallo"] },
        }
    }))
    .unwrap();

    let mock = MockChat::working("<|1|>Hello");
    let message_log = mock.message_log();
    let mut translator = ChatTranslator::turbo(mock);
    translator.parse_args(&config);

    translator
        .translate(Language::Japanese, Language::English, &queries(&["やあ"]))
        .await
        .unwrap();

    // System plus one user batch, no demonstration pair
    assert_eq!(message_log.lock().unwrap().len(), 2);
}

/// Test a multi-batch exchange travelling as one request
#[tokio::test]
async fn test_pipeline_withMultipleBatches_shouldParseAgainstFullQueryCount() {
    // Three 20000-character queries: after the first one the remaining
    // text exceeds the batching budget, forcing a second user turn
    let long_queries: Vec<String> =
        (0..3).map(|i| format!("{}", i).repeat(20_000)).collect();

    let mock = MockChat::working("<|1|>zero\n<|2|>one\n<|3|>two");
    let message_log = mock.message_log();
    let translator = ChatTranslator::turbo(mock);

    let result = translator
        .translate(Language::Japanese, Language::English, &long_queries)
        .await
        .unwrap();

    // Alignment is checked against the full original query count
    assert_eq!(result, vec!["zero".to_string(), "one".to_string(), "two".to_string()]);
    assert!(message_log.lock().unwrap().len() > 2);
}
