//! # Back-end Errors
//!
//! Failures in the walker, transformer and generator. Both kinds signal a
//! broken internal invariant or a failing output sink, never bad user input.

use std::fmt;
use thiserror::Error;
use tiny_parser::{NodeId, NodeKind, Span};

/// Errors raised while walking or transforming the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraverseError {
    /// A node was entered before its parent recorded an insertion point.
    #[error("no insertion point for {kind} {node}: parent {parent} was never entered")]
    MissingInsertionPoint {
        node: NodeId,
        kind: NodeKind,
        parent: NodeId,
        span: Span,
    },

    /// A translated node ended up in a container of the wrong kind.
    #[error("{kind} {node} landed in the wrong container: {detail}")]
    Misplaced {
        node: NodeId,
        kind: NodeKind,
        detail: &'static str,
        span: Span,
    },

    /// A visitor callback asked to stop the walk.
    #[error("visitor aborted at {kind} {node}: {message}")]
    Aborted {
        node: NodeId,
        kind: NodeKind,
        message: String,
        span: Span,
    },
}

impl TraverseError {
    /// Source span of the node the error is about.
    pub fn span(&self) -> Span {
        match self {
            Self::MissingInsertionPoint { span, .. } | Self::Misplaced { span, .. } | Self::Aborted { span, .. } => *span,
        }
    }
}

/// Errors raised while rendering the target tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeGenError {
    /// The output sink refused a write.
    #[error("failed to write generated code")]
    Write(#[from] fmt::Error),

    /// A call with an empty callee name cannot be rendered.
    #[error("call expression has an empty callee name")]
    EmptyCallee,
}
