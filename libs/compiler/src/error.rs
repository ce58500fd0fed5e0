//! # Compile Errors
//!
//! One umbrella error for the whole pipeline. Each stage error converts in
//! unchanged, so callers can still match on the stage-specific details.

use crate::options::Stage;
use thiserror::Error;
use tiny_ast::{CodeGenError, Diagnostic, TraverseError};
use tiny_parser::{LexError, ParseError, Span};

/// Any failure of [`crate::compile`] and friends.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Input rejected before lexing.
    #[error("source is {size} bytes, the limit is {limit}")]
    SourceTooLarge { size: usize, limit: usize },

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Traverse(#[from] TraverseError),

    #[error(transparent)]
    CodeGen(#[from] CodeGenError),

    /// A stage artifact could not be rendered as JSON.
    #[error("failed to dump {stage}: {source}")]
    Dump {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },
}

impl CompileError {
    /// Name of the stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::SourceTooLarge { .. } => "input",
            Self::Lex(_) => "lexer",
            Self::Parse(_) => "parser",
            Self::Traverse(_) => "transformer",
            Self::CodeGen(_) => "generator",
            Self::Dump { .. } => "dump",
        }
    }

    /// True for faults in the compiler itself rather than in the input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Traverse(_) | Self::CodeGen(_) | Self::Dump { .. })
    }

    /// Presentation form of this error.
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            Self::Lex(e) => e.into(),
            Self::Parse(e) => e.into(),
            Self::Traverse(e) => e.into(),
            Self::CodeGen(e) => e.into(),
            Self::SourceTooLarge { .. } => Diagnostic::error(self.to_string(), Span::zero()),
            Self::Dump { .. } => Diagnostic::error(format!("internal error: {self}"), Span::zero()),
        }
    }
}
