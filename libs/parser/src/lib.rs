//! # Tiny Parser
//!
//! Front end of the tiny compiler: turns parenthesized-prefix source text
//! into a source syntax tree.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Program (source tree)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::{parse, tokenize, Expr};
//!
//! let tokens = tokenize("(add 2 3)").unwrap();
//! let program = parse(tokens).unwrap();
//! assert!(matches!(&program.body[0], Expr::Call(call) if call.name == "add"));
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! tiny-parser → tiny-ast (walk, transform, generate) → tiny-compiler → wasm
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

// Re-export public API
pub use ast::{CallExpression, Expr, NodeId, NodeKind, NumberLiteral, Program, StringLiteral};
pub use error::{LexError, ParseError, ParseErrorKind};
pub use lexer::{LexerOptions, Token, TokenKind};
pub use span::{Position, Span, Spanned};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Convert source text into tokens with default options.
///
/// Fails on the first character that starts no token, and on an
/// unterminated string literal.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    lexer::Lexer::new(source).tokenize()
}

/// Convert source text into tokens with explicit lexer options.
pub fn tokenize_with(source: &str, options: LexerOptions) -> Result<Vec<Token>, LexError> {
    lexer::Lexer::with_options(source, options).tokenize()
}

/// Build the source syntax tree from a token sequence.
///
/// The tokens are consumed; an empty sequence yields an empty program.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    parser::Parser::new(tokens).parse()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_then_parse() {
        let program = parse(tokenize("(add 2 (multiply 3 4))").unwrap()).unwrap();
        assert_eq!(program.body.len(), 1);
        assert_eq!(program.node_count(), 6);
    }

    #[test]
    fn test_tokenize_with_lenient_strings() {
        let options = LexerOptions {
            allow_unterminated_strings: true,
        };
        assert!(tokenize("\"open").is_err());
        assert_eq!(tokenize_with("\"open", options).unwrap()[0].text, "open");
    }
}
