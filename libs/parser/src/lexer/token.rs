//! # Tokens
//!
//! Token types produced by the lexer.
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::lexer::{Token, TokenKind};
//! use tiny_parser::Span;
//!
//! let token = Token::new(TokenKind::Number, Span::from_bytes(0, 2), "10");
//! assert_eq!(token.kind, TokenKind::Number);
//! assert_eq!(token.text, "10");
//! ```

use crate::span::{Span, Spanned};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
///
/// `text` is the literal characters that produced the token, except for
/// string literals, whose delimiting quotes are excluded. `span` always
/// covers the full lexeme including quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span.
    pub span: Span,
    /// Token text.
    pub text: String,
}

impl Token {
    /// Create a new token.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Token type
    /// - `span`: Source location
    /// - `text`: Token text
    pub fn new(kind: TokenKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            kind if kind.is_paren() => f.write_str(kind.display()),
            TokenKind::String => write!(f, "{} \"{}\"", self.kind.display(), self.text),
            _ => write!(f, "{} '{}'", self.kind.display(), self.text),
        }
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
///
/// The language has no keywords and no operators: just parentheses,
/// literals and names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,

    // Literals
    /// Run of ASCII digits like `42`
    Number,
    /// Quoted string like `"foo"`
    String,

    // Names
    /// Run of ASCII letters like `add`
    Identifier,
}

impl TokenKind {
    /// Check if this is a literal token.
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Number | Self::String)
    }

    /// Check if this is a parenthesis.
    pub const fn is_paren(&self) -> bool {
        matches!(self, Self::LParen | Self::RParen)
    }

    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Number => "number",
            Self::String => "string",
            Self::Identifier => "identifier",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_literal() {
        assert!(TokenKind::Number.is_literal());
        assert!(TokenKind::String.is_literal());
        assert!(!TokenKind::Identifier.is_literal());
        assert!(!TokenKind::LParen.is_literal());
    }

    #[test]
    fn test_token_is_paren() {
        assert!(TokenKind::LParen.is_paren());
        assert!(TokenKind::RParen.is_paren());
        assert!(!TokenKind::Number.is_paren());
    }

    #[test]
    fn test_token_display() {
        let name = Token::new(TokenKind::Identifier, Span::from_bytes(1, 4), "add");
        assert_eq!(name.to_string(), "identifier 'add'");

        let string = Token::new(TokenKind::String, Span::from_bytes(0, 5), "foo");
        assert_eq!(string.to_string(), "string \"foo\"");

        let paren = Token::new(TokenKind::RParen, Span::from_bytes(0, 1), ")");
        assert_eq!(paren.to_string(), "')'");
    }
}
