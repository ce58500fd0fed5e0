//! # Lexer
//!
//! Converts source text into a flat sequence of tokens in one left-to-right
//! pass. Dispatch order per character: whitespace, parenthesis, digit,
//! quote, letter. Anything else is a [`LexError`].
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("(add 2 3)").tokenize().unwrap();
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[1].kind, TokenKind::Identifier);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::error::LexError;
use crate::span::{Position, Span};
use config::constants::{is_source_whitespace, CLOSE_PAREN, OPEN_PAREN, STRING_DELIMITER};
use serde::{Deserialize, Serialize};

// =============================================================================
// OPTIONS
// =============================================================================

/// Lexer behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LexerOptions {
    /// Accept a string literal that runs to end of input instead of failing.
    ///
    /// When set, the token holds everything after the opening quote.
    pub allow_unterminated_strings: bool,
}

// =============================================================================
// LEXER
// =============================================================================

/// Single-pass lexer.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
    options: LexerOptions,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text with default options.
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, LexerOptions::default())
    }

    /// Create a new lexer with explicit options.
    pub fn with_options(source: &'a str, options: LexerOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            options,
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// All tokens in source order (no end-of-input marker), or the first
    /// [`LexError`].
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.cursor.peek() {
            let start = self.cursor.position();

            if is_source_whitespace(c) {
                self.cursor.advance();
            } else if c == OPEN_PAREN || c == CLOSE_PAREN {
                self.cursor.advance();
                let kind = if c == OPEN_PAREN { TokenKind::LParen } else { TokenKind::RParen };
                self.push(kind, start, c.to_string());
            } else if c.is_ascii_digit() {
                self.scan_number(start);
            } else if c == STRING_DELIMITER {
                self.scan_string(start)?;
            } else if c.is_ascii_alphabetic() {
                self.scan_identifier(start);
            } else {
                return Err(LexError::UnknownCharacter {
                    character: c,
                    position: start,
                });
            }
        }

        Ok(self.tokens)
    }

    fn push(&mut self, kind: TokenKind, start: Position, text: String) {
        let span = Span::new(start, self.cursor.position());
        self.tokens.push(Token::new(kind, span, text));
    }

    /// Scan a maximal run of digits. No sign, point or exponent.
    fn scan_number(&mut self, start: Position) {
        self.cursor.advance_while(|c| c.is_ascii_digit());
        let text = self.cursor.slice_from(start).to_string();
        self.push(TokenKind::Number, start, text);
    }

    /// Scan a maximal run of ASCII letters.
    fn scan_identifier(&mut self, start: Position) {
        self.cursor.advance_while(|c| c.is_ascii_alphabetic());
        let text = self.cursor.slice_from(start).to_string();
        self.push(TokenKind::Identifier, start, text);
    }

    /// Scan a string literal. Token text excludes both quotes.
    fn scan_string(&mut self, start: Position) -> Result<(), LexError> {
        self.cursor.advance(); // Opening quote
        let content_start = self.cursor.position();
        self.cursor.advance_while(|c| c != STRING_DELIMITER);
        let text = self.cursor.slice_from(content_start).to_string();

        if self.cursor.advance().is_none() && !self.options.allow_unterminated_strings {
            return Err(LexError::UnterminatedString { position: start });
        }

        self.push(TokenKind::String, start, text);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
