//! # Expression Parsing
//!
//! Literals and call expressions. This is the whole grammar below the
//! program level.

use super::Parser;
use crate::ast::{CallExpression, Expr, NumberLiteral, StringLiteral};
use crate::error::ParseError;
use crate::lexer::TokenKind;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;

impl Parser {
    /// Parse one expression.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// expr = number | string | "(" identifier expr* ")"
    /// ```
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let Some(kind) = self.peek_kind() else {
            return Err(self.eof_error("expression"));
        };

        match kind {
            kind if kind.is_literal() => {
                let id = self.fresh_id();
                let token = self.expect(kind, "expression")?;
                Ok(if kind == TokenKind::Number {
                    Expr::Number(NumberLiteral {
                        id,
                        value: token.text,
                        span: token.span,
                    })
                } else {
                    Expr::String(StringLiteral {
                        id,
                        value: token.text,
                        span: token.span,
                    })
                })
            }
            TokenKind::LParen => {
                maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
                    self.parse_call().map(Expr::Call)
                })
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    /// Parse `"(" identifier expr* ")"`.
    fn parse_call(&mut self) -> Result<CallExpression, ParseError> {
        let open = self.expect(TokenKind::LParen, "'('")?;
        let id = self.fresh_id();
        let name = self.expect(TokenKind::Identifier, "function name")?;

        let mut params = Vec::new();
        loop {
            match self.peek_kind() {
                Some(TokenKind::RParen) => break,
                Some(_) => params.push(self.parse_expression()?),
                None => return Err(self.eof_error("')' or expression")),
            }
        }
        let close = self.expect(TokenKind::RParen, "')'")?;

        Ok(CallExpression {
            id,
            name: name.text,
            params,
            span: open.span.merge(close.span),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::ast::{Expr, Program};
    use crate::error::{ParseError, ParseErrorKind};
    use crate::lexer::{Lexer, TokenKind};
    use crate::parser::Parser;
    use crate::span::Span;

    fn parse(source: &str) -> Result<Program, ParseError> {
        let tokens = Lexer::new(source).tokenize().expect("lexes");
        Parser::new(tokens).parse()
    }

    fn parse_one(source: &str) -> Expr {
        let mut program = parse(source).expect("parses");
        assert_eq!(program.body.len(), 1);
        program.body.remove(0)
    }

    #[test]
    fn test_parse_number() {
        let Expr::Number(lit) = parse_one("42") else {
            panic!("expected number");
        };
        assert_eq!(lit.value, "42");
    }

    #[test]
    fn test_parse_string() {
        let Expr::String(lit) = parse_one("\"hello\"") else {
            panic!("expected string");
        };
        assert_eq!(lit.value, "hello");
    }

    #[test]
    fn test_parse_nested_call() {
        let Expr::Call(add) = parse_one("(add 2 (multiply 3 4))") else {
            panic!("expected call");
        };
        assert_eq!(add.name, "add");
        assert_eq!(add.params.len(), 2);
        assert_eq!(add.span, Span::from_bytes(0, 22));

        let Expr::Call(multiply) = &add.params[1] else {
            panic!("expected nested call");
        };
        assert_eq!(multiply.name, "multiply");
        assert_eq!(multiply.params.len(), 2);
        assert_eq!(multiply.span, Span::from_bytes(7, 21));
    }

    #[test]
    fn test_parse_call_without_params() {
        let Expr::Call(call) = parse_one("(now)") else {
            panic!("expected call");
        };
        assert_eq!(call.name, "now");
        assert!(call.params.is_empty());
    }

    #[test]
    fn test_params_keep_source_order() {
        let Expr::Call(call) = parse_one("(concat \"a\" 1 \"b\" 2)") else {
            panic!("expected call");
        };
        let kinds: Vec<_> = call.params.iter().map(Expr::kind).collect();
        use crate::ast::NodeKind::*;
        assert_eq!(kinds, vec![StringLiteral, NumberLiteral, StringLiteral, NumberLiteral]);
    }

    #[test]
    fn test_call_requires_identifier() {
        let err = parse("(2 3)").unwrap_err();
        match err.kind {
            ParseErrorKind::UnexpectedToken { found, expected } => {
                assert_eq!(found.kind, TokenKind::Number);
                assert_eq!(expected, "function name");
            }
            other => panic!("unexpected kind: {other:?}"),
        }
        assert_eq!(err.index, 1);
    }

    #[test]
    fn test_empty_parens_need_a_name() {
        let err = parse("()").unwrap_err();
        assert!(!err.is_eof());
        assert_eq!(err.index, 1);
    }

    #[test]
    fn test_bare_identifier_is_rejected() {
        let err = parse("(add x 2)").unwrap_err();
        match err.kind {
            ParseErrorKind::UnexpectedToken { found, .. } => assert_eq!(found.text, "x"),
            other => panic!("unexpected kind: {other:?}"),
        }
        assert_eq!(err.index, 2);
    }

    #[test]
    fn test_open_paren_at_end() {
        let err = parse("(").unwrap_err();
        assert!(err.is_eof());
        assert_eq!(err.index, 1);
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 200;
        let source = format!("{}{}", "(f ".repeat(depth), ")".repeat(depth));
        let program = parse(&source).expect("parses");
        assert_eq!(program.node_count(), depth + 1);
    }

    #[test]
    fn test_very_deep_nesting_grows_the_stack() {
        let depth = 100_000;
        let source = format!("{}1{}", "(f ".repeat(depth), ")".repeat(depth));
        let program = parse(&source).expect("parses");
        assert_eq!(program.node_count(), depth + 2);
    }

    #[test]
    fn test_error_deep_inside_nesting() {
        let depth = 100_000;
        let source = format!("{}x{}", "(f ".repeat(depth), ")".repeat(depth));
        let err = parse(&source).unwrap_err();
        assert_eq!(err.index, 2 * depth);
    }
}
