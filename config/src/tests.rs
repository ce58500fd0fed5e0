//! # Tests for Config Constants
//!
//! Unit tests verifying the configuration constants and helper functions.

use crate::constants::*;
use std::borrow::Cow;

// =============================================================================
// SYNTAX TESTS
// =============================================================================

#[test]
fn test_parens_are_distinct() {
    assert_ne!(OPEN_PAREN, CLOSE_PAREN);
}

#[test]
fn test_call_delimiters_match_source_parens() {
    assert_eq!(CALL_OPEN, OPEN_PAREN.to_string());
    assert_eq!(CALL_CLOSE, CLOSE_PAREN.to_string());
}

#[test]
fn test_statement_separator_is_newline() {
    assert_eq!(STATEMENT_SEPARATOR, "\n");
}

#[test]
fn test_argument_separator_has_trailing_space() {
    assert_eq!(ARGUMENT_SEPARATOR, ", ");
}

// =============================================================================
// ESCAPE_STRING TESTS
// =============================================================================

#[test]
fn test_escape_string_borrows_plain_values() {
    assert!(matches!(escape_string("foo bar"), Cow::Borrowed("foo bar")));
}

#[test]
fn test_escape_string_quotes() {
    assert_eq!(escape_string("a\"b"), "a\\\"b");
}

#[test]
fn test_escape_string_backslash() {
    assert_eq!(escape_string("a\\b"), "a\\\\b");
}

#[test]
fn test_escape_string_empty() {
    assert_eq!(escape_string(""), "");
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_source_size_reasonable() {
    assert!(MAX_SOURCE_SIZE >= 1024 * 1024);
}

#[test]
fn test_red_zone_fits_in_a_segment() {
    assert!(STACKER_RED_ZONE_BYTES >= 64 * 1024);
    assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
}

// =============================================================================
// WHITESPACE TESTS
// =============================================================================

#[test]
fn test_ascii_whitespace() {
    for c in [' ', '\t', '\n', '\r', '\u{000B}', '\u{000C}'] {
        assert!(is_source_whitespace(c), "{c:?}");
    }
}

#[test]
fn test_byte_order_mark_is_whitespace() {
    assert!(is_source_whitespace('\u{FEFF}'));
    assert!(!'\u{FEFF}'.is_whitespace());
}

#[test]
fn test_next_line_is_not_whitespace() {
    assert!(!is_source_whitespace('\u{0085}'));
}

#[test]
fn test_unicode_spaces() {
    for c in ['\u{00A0}', '\u{2003}', '\u{2028}', '\u{3000}'] {
        assert!(is_source_whitespace(c), "{c:?}");
    }
    assert!(!is_source_whitespace('\u{200B}'));
}
