//! # Parser
//!
//! Recursive descent parser producing the source syntax tree.
//! One shared token cursor, never rewound.
//!
//! ## Grammar
//!
//! ```text
//! program = expr*
//! expr    = number | string | "(" identifier expr* ")"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::lexer::Lexer;
//! use tiny_parser::parser::Parser;
//!
//! let tokens = Lexer::new("(add 2 3)").tokenize().unwrap();
//! let program = Parser::new(tokens).parse().unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

mod expressions;

use crate::ast::{NodeId, Program};
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};
use crate::span::{Position, Span};

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser.
pub struct Parser {
    /// Token stream.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Next node id to hand out.
    next_id: u32,
}

impl Parser {
    /// Create a new parser over a token sequence.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            next_id: 0,
        }
    }

    /// Parse the whole token sequence into a [`Program`].
    ///
    /// Parses top-level expressions until the tokens are exhausted; the
    /// first malformed expression aborts with a [`ParseError`].
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let id = self.fresh_id();
        let mut body = Vec::new();

        while !self.is_at_end() {
            body.push(self.parse_expression()?);
        }

        let span = match (self.tokens.first(), self.tokens.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::zero(),
        };

        Ok(Program { id, body, span })
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token, if any remain.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// Get current token kind.
    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    /// Check if every token has been consumed.
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Consume the current token.
    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.current).cloned()?;
        self.current += 1;
        Some(token)
    }

    /// Consume a token of the expected kind.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Required token kind
    /// - `expected`: Description used in the error message
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.peek_kind() != Some(kind) {
            return Err(self.unexpected(expected));
        }
        self.advance().ok_or_else(|| self.eof_error(expected))
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    fn fresh_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Position just past the last token.
    fn end_position(&self) -> Position {
        self.tokens.last().map(|t| t.span.end).unwrap_or_default()
    }

    /// Error for whatever sits at the cursor: a token or end of input.
    fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::unexpected_token(token.clone(), expected, self.current),
            None => self.eof_error(expected),
        }
    }

    fn eof_error(&self, expected: &str) -> ParseError {
        ParseError::unexpected_eof(expected, self.current, self.end_position())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;
    use crate::error::ParseErrorKind;
    use crate::lexer::Lexer;

    fn parse(source: &str) -> Result<Program, ParseError> {
        let tokens = Lexer::new(source).tokenize().expect("lexes");
        Parser::new(tokens).parse()
    }

    #[test]
    fn test_parse_empty() {
        let program = parse("").unwrap();
        assert!(program.body.is_empty());
        assert_eq!(program.id, NodeId(0));
        assert_eq!(program.span, Span::zero());
    }

    #[test]
    fn test_parse_multiple_top_level() {
        let program = parse("(add 2 3) (multiply 4 5)").unwrap();
        assert_eq!(program.body.len(), 2);
        assert_eq!(program.span, Span::from_bytes(0, 24));
    }

    #[test]
    fn test_parse_bare_literal_at_top_level() {
        let program = parse("42").unwrap();
        assert!(matches!(&program.body[0], Expr::Number(n) if n.value == "42"));
    }

    #[test]
    fn test_missing_close_paren_is_eof() {
        let err = parse("(add 2 3").unwrap_err();
        assert!(err.is_eof());
        assert_eq!(err.index, 4);
        assert_eq!(err.span.start.byte, 8);
        match err.kind {
            ParseErrorKind::UnexpectedEof { expected } => assert!(expected.contains("')'")),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_stray_close_paren() {
        let err = parse(")").unwrap_err();
        assert_eq!(err.index, 0);
        assert!(!err.is_eof());
    }

    #[test]
    fn test_ids_are_pre_order() {
        let program = parse("(a 1 (b 2)) 3").unwrap();
        let Expr::Call(a) = &program.body[0] else {
            panic!("expected call");
        };
        assert_eq!(a.id, NodeId(1));
        assert_eq!(a.params[0].id(), NodeId(2));
        assert_eq!(a.params[1].id(), NodeId(3));
        let Expr::Call(b) = &a.params[1] else {
            panic!("expected nested call");
        };
        assert_eq!(b.params[0].id(), NodeId(4));
        assert_eq!(program.body[1].id(), NodeId(5));
    }
}
