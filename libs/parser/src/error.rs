//! # Syntax Errors
//!
//! Error types for the two front-end stages: [`LexError`] from the lexer and
//! [`ParseError`] from the parser. Both are fatal to the current compilation.
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::error::ParseError;
//! use tiny_parser::Position;
//!
//! let error = ParseError::unexpected_eof("')'", 3, Position::new(8, 0, 8));
//! assert!(error.to_string().contains("unexpected end of input"));
//! ```

use crate::lexer::Token;
use crate::span::{Position, Span};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// LEX ERROR
// =============================================================================

/// Errors produced while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unknown input character '{character}' at {position}")]
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position: Position,
    },

    /// Input ended inside a string literal.
    #[error("unterminated string literal starting at {position}")]
    UnterminatedString {
        /// Position of the opening quote.
        position: Position,
    },
}

impl LexError {
    /// Position the error points at.
    pub fn position(&self) -> Position {
        match self {
            Self::UnknownCharacter { position, .. } | Self::UnterminatedString { position } => *position,
        }
    }

    /// Source span of the error.
    ///
    /// Covers the offending character for [`LexError::UnknownCharacter`];
    /// for an unterminated string, the opening quote.
    pub fn span(&self) -> Span {
        let start = self.position();
        let width = match self {
            Self::UnknownCharacter { character, .. } => character.len_utf8(),
            Self::UnterminatedString { .. } => 1,
        };
        Span::new(
            start,
            Position::new(start.byte + width, start.line, start.column + 1),
        )
    }
}

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
///
/// `index` is the token cursor at the point of failure; for end-of-input
/// errors it equals the number of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind} at {}", .span.start)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of error.
    pub span: Span,
    /// Token index where parsing failed.
    pub index: usize,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, span: Span, index: usize) -> Self {
        Self { kind, span, index }
    }

    /// Create unexpected token error.
    ///
    /// ## Parameters
    ///
    /// - `found`: Token that was found
    /// - `expected`: Description of expected token
    /// - `index`: Token cursor
    pub fn unexpected_token(found: Token, expected: &str, index: usize) -> Self {
        let span = found.span;
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found,
                expected: expected.to_string(),
            },
            span,
            index,
        )
    }

    /// Create unexpected end-of-input error.
    ///
    /// ## Parameters
    ///
    /// - `expected`: Description of expected token
    /// - `index`: Token cursor (the token count)
    /// - `at`: End-of-input position
    pub fn unexpected_eof(expected: &str, index: usize, at: Position) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            Span::point(at),
            index,
        )
    }

    /// True if the token sequence ran out mid-expression.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ParseErrorKind::UnexpectedEof { .. })
    }
}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ParseErrorKind {
    /// Found a token the grammar does not allow here.
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken {
        /// Token that was found.
        found: Token,
        /// Description of what was expected.
        expected: String,
    },

    /// Token sequence exhausted mid-expression.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
    },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_unknown_character_display() {
        let error = LexError::UnknownCharacter {
            character: '@',
            position: Position::new(7, 0, 7),
        };
        assert_eq!(error.to_string(), "unknown input character '@' at 1:8");
        assert_eq!(error.span(), Span::from_bytes(7, 8));
    }

    #[test]
    fn test_unterminated_string_position() {
        let error = LexError::UnterminatedString {
            position: Position::new(3, 1, 0),
        };
        assert_eq!(error.position().line, 1);
        assert!(error.to_string().contains("unterminated string"));
    }

    #[test]
    fn test_unexpected_token_display() {
        let token = Token::new(TokenKind::Number, Span::from_bytes(1, 2), "2");
        let error = ParseError::unexpected_token(token, "function name", 1);
        let msg = error.to_string();
        assert!(msg.contains("unexpected number '2'"));
        assert!(msg.contains("function name"));
        assert_eq!(error.span.start.byte, 1);
        assert!(!error.is_eof());
    }

    #[test]
    fn test_unexpected_eof_display() {
        let error = ParseError::unexpected_eof("')'", 4, Position::new(8, 0, 8));
        assert!(error.is_eof());
        assert_eq!(error.index, 4);
        assert_eq!(error.to_string(), "unexpected end of input, expected ')' at 1:9");
    }
}
