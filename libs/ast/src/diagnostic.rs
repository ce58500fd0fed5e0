//! # Diagnostics
//!
//! Presentation form for every pipeline error, plus a small lint pass over
//! the source tree. Front ends (CLI, browser) render these instead of the
//! raw error types.

use crate::error::{CodeGenError, TraverseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tiny_parser::{Expr, LexError, ParseError, ParseErrorKind, Program, Span, Spanned, TokenKind};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// A diagnostic message with severity and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Span,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: String, span: Span) -> Self {
        Self {
            severity,
            message,
            span,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn error(message: String, span: Span) -> Self {
        Self::new(Severity::Error, message, span)
    }

    pub fn warning(message: String, span: Span) -> Self {
        Self::new(Severity::Warning, message, span)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// `error at 1:8: message`, with the hint on a second line.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.span.start, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  hint: {hint}")?;
        }
        Ok(())
    }
}

// =============================================================================
// ERROR CONVERSIONS
// =============================================================================

impl From<&LexError> for Diagnostic {
    fn from(error: &LexError) -> Self {
        let diagnostic = Diagnostic::error(error.to_string(), error.span());
        match error {
            LexError::UnknownCharacter { character: '.', .. } => {
                diagnostic.with_hint("decimal points are not supported; numbers are digit runs")
            }
            LexError::UnknownCharacter { character: '-', .. } => {
                diagnostic.with_hint("negative numbers are not supported")
            }
            LexError::UnknownCharacter { .. } => diagnostic,
            LexError::UnterminatedString { .. } => diagnostic.with_hint("add a closing '\"'"),
        }
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(error: &ParseError) -> Self {
        let diagnostic = Diagnostic::error(error.kind.to_string(), error.span);
        match &error.kind {
            ParseErrorKind::UnexpectedEof { .. } => diagnostic.with_hint("missing ')'"),
            ParseErrorKind::UnexpectedToken { found, .. } if found.kind == TokenKind::Identifier => {
                diagnostic.with_hint("names are only allowed right after '('")
            }
            ParseErrorKind::UnexpectedToken { found, .. } if found.kind == TokenKind::RParen => {
                diagnostic.with_hint("unbalanced ')'")
            }
            ParseErrorKind::UnexpectedToken { .. } => diagnostic,
        }
    }
}

impl From<&TraverseError> for Diagnostic {
    fn from(error: &TraverseError) -> Self {
        Diagnostic::error(format!("internal error: {error}"), error.span())
    }
}

impl From<&CodeGenError> for Diagnostic {
    fn from(error: &CodeGenError) -> Self {
        Diagnostic::error(format!("internal error: {error}"), Span::zero())
    }
}

// =============================================================================
// LINT
// =============================================================================

/// Warn about source constructs that compile but are likely mistakes.
///
/// A literal at the top level renders as a bare value with no terminator.
pub fn lint(program: &Program) -> Vec<Diagnostic> {
    program
        .body
        .iter()
        .filter(|expr| !matches!(expr, Expr::Call(_)))
        .map(|expr| {
            Diagnostic::warning(format!("top-level {} has no effect", expr.kind()), expr.span())
                .with_hint("wrap it in a call, e.g. (print ...)")
        })
        .collect()
}
