//! # Source Syntax Tree
//!
//! Tree form of the parenthesized-prefix input language, produced by the
//! parser and consumed by the transformer.
//!
//! ```text
//! (add 2 (multiply 3 4))
//!
//!        add
//!       /   \
//!      2   multiply
//!           /   \
//!          3     4
//! ```
//!
//! Every node has a [`NodeId`] that is unique within its [`Program`];
//! later stages use it to key per-node side tables.

use crate::span::{Span, Spanned};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use serde::{Deserialize, Serialize, Serializer};
use stacker::maybe_grow;
use std::fmt;

// =============================================================================
// NODE IDENTITY
// =============================================================================

/// Identity of a node within one [`Program`].
///
/// Assigned by the parser in pre-order, starting at 0 for the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tag for each kind of source-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    CallExpression,
    NumberLiteral,
    StringLiteral,
}

impl NodeKind {
    /// All node kinds, in declaration order.
    pub const ALL: [NodeKind; 4] = [
        NodeKind::Program,
        NodeKind::CallExpression,
        NodeKind::NumberLiteral,
        NodeKind::StringLiteral,
    ];

    /// Name used in diagnostics and dumps.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::CallExpression => "CallExpression",
            Self::NumberLiteral => "NumberLiteral",
            Self::StringLiteral => "StringLiteral",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// PROGRAM
// =============================================================================

/// Root of the source tree; exactly one per compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: NodeId,
    /// Top-level expressions in source order.
    pub body: Vec<Expr>,
    pub span: Span,
}

impl Program {
    /// Total number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        1 + self.body.iter().map(Expr::node_count).sum::<usize>()
    }
}

impl Spanned for Program {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

/// Any node that can appear in `Program.body` or `CallExpression.params`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    #[serde(rename = "CallExpression")]
    Call(CallExpression),
    #[serde(rename = "NumberLiteral")]
    Number(NumberLiteral),
    #[serde(rename = "StringLiteral")]
    String(StringLiteral),
}

impl Expr {
    pub fn id(&self) -> NodeId {
        match self {
            Self::Call(call) => call.id,
            Self::Number(lit) => lit.id,
            Self::String(lit) => lit.id,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Call(_) => NodeKind::CallExpression,
            Self::Number(_) => NodeKind::NumberLiteral,
            Self::String(_) => NodeKind::StringLiteral,
        }
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Call(call) => maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
                1 + call.params.iter().map(Expr::node_count).sum::<usize>()
            }),
            Self::Number(_) | Self::String(_) => 1,
        }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Self::Call(call) => call.span,
            Self::Number(lit) => lit.span,
            Self::String(lit) => lit.span,
        }
    }
}

/// Function application: `(name params...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpression {
    pub id: NodeId,
    /// Never empty.
    pub name: String,
    /// Arguments in source order; may contain nested calls.
    #[serde(serialize_with = "serialize_nested")]
    pub params: Vec<Expr>,
    pub span: Span,
}

impl Drop for CallExpression {
    // Nested calls are moved onto a heap worklist, so dropping a tree of any
    // depth uses constant stack.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.params);
        while let Some(expr) = pending.pop() {
            if let Expr::Call(mut call) = expr {
                pending.append(&mut call.params);
            }
        }
    }
}

fn serialize_nested<S: Serializer>(params: &[Expr], serializer: S) -> Result<S::Ok, S::Error> {
    maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || params.serialize(serializer))
}

/// Digits kept verbatim, never converted to a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub id: NodeId,
    pub value: String,
    pub span: Span,
}

/// Characters between the quotes, exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub id: NodeId,
    pub value: String,
    pub span: Span,
}

// =============================================================================
// TESTS
// =============================================================================
