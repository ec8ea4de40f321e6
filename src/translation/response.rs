/*!
 * Response parsing for chat-based translation.
 *
 * Splits the model's single text reply back into per-query segments using
 * the numbered `<|k|>` markers, with a line-break fallback for models that
 * ignore the markers. Alignment is all-or-nothing: a segment count that
 * does not match the query count discards the whole reply.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex matching the numbered in-text markers
static MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\|\d+\|>").expect("Invalid marker regex"));

/// Split a raw reply into `expected` trimmed segments
///
/// Returns an empty vector when the reply cannot be aligned; callers must
/// treat that as "no translations produced", never as a partial result.
pub fn parse_response(reply: &str, expected: usize) -> Vec<String> {
    let mut segments: Vec<&str> = MARKER_REGEX.split(reply).collect();

    // Empty prefix before the first marker
    if segments.first().is_some_and(|s| s.trim().is_empty()) {
        segments.remove(0);
    }

    // Fallback for models that drop the markers entirely
    if segments.len() <= 1 && expected > 1 {
        segments = reply.split('\n').collect();
    }

    if segments.len() != expected {
        debug!(
            "Reply split into {} segments but {} queries were sent, discarding",
            segments.len(),
            expected
        );
        return Vec::new();
    }

    segments.iter().map(|s| s.trim().to_string()).collect()
}
