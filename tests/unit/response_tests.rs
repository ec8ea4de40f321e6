/*!
 * Tests for reply parsing and marker alignment
 */

use mangatl::translation::parse_response;

/// Test the basic marker round-trip
#[test]
fn test_parse_response_withMatchingMarkers_shouldReturnSegments() {
    let result = parse_response("<|1|>Hello\n<|2|>Thank you", 2);
    assert_eq!(result, vec!["Hello".to_string(), "Thank you".to_string()]);
}

/// Test that surrounding whitespace is trimmed from each segment
#[test]
fn test_parse_response_withPaddedSegments_shouldTrimWhitespace() {
    let result = parse_response("<|1|>  Hello \n<|2|>\tThank you\n", 2);
    assert_eq!(result, vec!["Hello".to_string(), "Thank you".to_string()]);
}

/// Test that a marker count mismatch discards the whole reply
#[test]
fn test_parse_response_withExtraMarker_shouldReturnEmpty() {
    let reply = "<|1|>A\n<|2|>B\n<|3|>C";
    assert!(parse_response(reply, 2).is_empty());
    assert!(parse_response("<|1|>A", 2).is_empty());
}

/// Test that a non-blank prefix before the first marker breaks alignment
#[test]
fn test_parse_response_withChatterBeforeFirstMarker_shouldReturnEmpty() {
    let reply = "Here are your translations:<|1|>Hello";
    assert!(parse_response(reply, 1).is_empty());
}

/// Test that a blank prefix before the first marker is dropped
#[test]
fn test_parse_response_withBlankPrefix_shouldDropPrefix() {
    let result = parse_response("\n  <|1|>Hello\n<|2|>World", 2);
    assert_eq!(result, vec!["Hello".to_string(), "World".to_string()]);
}

/// Test the line-break fallback for replies without markers
#[test]
fn test_parse_response_withNoMarkers_shouldFallBackToLines() {
    let result = parse_response("Hello\nThank you", 2);
    assert_eq!(result, vec!["Hello".to_string(), "Thank you".to_string()]);

    // Fallback still requires an exact line count
    assert!(parse_response("Hello\nThank you\nGoodbye", 2).is_empty());
}

/// Test that a single expected segment never takes the fallback
#[test]
fn test_parse_response_withSingleQuery_shouldReturnWholeReply() {
    let result = parse_response("Hello there", 1);
    assert_eq!(result, vec!["Hello there".to_string()]);

    // A marker-led reply for one query also aligns
    let result = parse_response("<|1|>Hello there", 1);
    assert_eq!(result, vec!["Hello there".to_string()]);

    // The line-break fallback never applies for a single query, so a
    // multi-line reply comes back as one segment
    let result = parse_response("Hello\nthere", 1);
    assert_eq!(result, vec!["Hello\nthere".to_string()]);
}

/// Test empty replies
#[test]
fn test_parse_response_withEmptyReply_shouldReturnEmpty() {
    assert!(parse_response("", 1).is_empty());
    assert!(parse_response("", 2).is_empty());
    assert!(parse_response("   ", 3).is_empty());
}

/// Test markers with multi-digit numbers
#[test]
fn test_parse_response_withManySegments_shouldAlignAllOfThem() {
    let reply: String = (1..=12).map(|k| format!("<|{}|>segment {}\n", k, k)).collect();
    let result = parse_response(&reply, 12);
    assert_eq!(result.len(), 12);
    assert_eq!(result[0], "segment 1");
    assert_eq!(result[11], "segment 12");
}
