//! # Target Syntax Tree
//!
//! Tree form of the C-like output language, built by the transformer and
//! rendered by the generator.
//!
//! The types encode the wrapping rule: only [`Statement`]s live in
//! `Program.body`, and only a top-level call becomes an
//! [`ExpressionStatement`]. Call arguments are [`Expression`]s, which have
//! no statement variant, so a nested call can never be wrapped.
//!
//! Serialized form mirrors the usual JavaScript AST shape:
//!
//! ```text
//! { "body": [ { "type": "ExpressionStatement",
//!               "expression": { "callee": { "name": "add" },
//!                               "arguments": [ { "type": "NumberLiteral", "value": "2" } ] } } ] }
//! ```

use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use serde::{Deserialize, Serialize, Serializer};
use stacker::maybe_grow;

/// Root of the target tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Statement>,
}

/// Element of `Program.body`.
///
/// Top-level literals are carried through unwrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    ExpressionStatement(ExpressionStatement),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
}

/// A top-level call rendered as `callee(args);`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: CallExpression,
}

/// Anything allowed in a call's argument list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    CallExpression(CallExpression),
    NumberLiteral(NumberLiteral),
    StringLiteral(StringLiteral),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpression {
    pub callee: Identifier,
    #[serde(serialize_with = "serialize_nested")]
    pub arguments: Vec<Expression>,
}

impl Drop for CallExpression {
    // Nested calls go onto a worklist so deep trees drop in constant stack.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.arguments);
        while let Some(argument) = pending.pop() {
            if let Expression::CallExpression(mut call) = argument {
                pending.append(&mut call.arguments);
            }
        }
    }
}

fn serialize_nested<S: Serializer>(
    arguments: &[Expression],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || arguments.serialize(serializer))
}

impl CallExpression {
    /// Call with no arguments yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            callee: Identifier { name: name.into() },
            arguments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}
