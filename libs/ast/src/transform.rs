//! # Transformer
//!
//! Rewrites the source tree into the target tree in one walk.
//!
//! While the walker drives the traversal, every entered node that can have
//! children is given an [`InsertionPoint`]: the container its translated
//! children are appended to. Points live in a side table keyed by
//! [`NodeId`] that exists only for the duration of one [`transform`] call.
//!
//! Containers are held in a flat arena and linked by index, so no container
//! ever borrows another. Once the walk finishes, the arena is folded into
//! owned target nodes starting from the program's container.
//!
//! ```text
//! (add 2 (multiply 3 4))
//!
//! Program#0   -> point 0   [Statement add -> point 1]
//! add#1       -> point 1   [2, Call multiply -> point 2]
//! multiply#3  -> point 2   [3, 4]
//! ```

use crate::ast::{self, CallExpression, Expression, ExpressionStatement, Identifier, Statement};
use crate::error::TraverseError;
use crate::walker::{traverse, Node, Visitor};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;
use std::collections::HashMap;
use tiny_parser::{NodeId, NodeKind, NumberLiteral, Program, Span, Spanned, StringLiteral};

/// Index of a target-tree child list in the transformer's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InsertionPoint(usize);

/// Translate a source tree into a target tree.
///
/// Top-level calls are wrapped in an [`ExpressionStatement`]; nested calls
/// are not. Literals are copied verbatim. Fails only when an internal
/// invariant is broken.
///
/// ```rust
/// use tiny_ast::{ast::Statement, transform};
/// use tiny_parser::{parse, tokenize};
///
/// let source = parse(tokenize("(add 2 (multiply 3 4))").unwrap()).unwrap();
/// let target = transform(&source).unwrap();
/// assert!(matches!(&target.body[0], Statement::ExpressionStatement(s) if s.expression.callee.name == "add"));
/// ```
pub fn transform(program: &Program) -> Result<ast::Program, TraverseError> {
    let mut transformer = Transformer::default();
    traverse(program, &mut transformer)?;
    transformer.finish(program)
}

// =============================================================================
// ARENA
// =============================================================================

/// A translated node waiting in its parent's container.
#[derive(Debug)]
enum Slot {
    /// Call whose source parent is the program.
    Statement(PendingCall),
    /// Call nested inside another call.
    Call(PendingCall),
    Number(ast::NumberLiteral),
    String(ast::StringLiteral),
}

#[derive(Debug)]
struct PendingCall {
    source: NodeId,
    span: Span,
    callee: String,
    arguments: InsertionPoint,
}

#[derive(Debug, Default)]
struct Transformer {
    containers: Vec<Vec<Slot>>,
    insertion_points: HashMap<NodeId, InsertionPoint>,
}

impl Transformer {
    fn allocate(&mut self, owner: NodeId) -> InsertionPoint {
        let point = InsertionPoint(self.containers.len());
        self.containers.push(Vec::new());
        self.insertion_points.insert(owner, point);
        point
    }

    /// Insertion point recorded for `parent` when it was entered.
    fn point_of(&self, parent: Node<'_>, child: Node<'_>) -> Result<InsertionPoint, TraverseError> {
        self.insertion_points
            .get(&parent.id())
            .copied()
            .ok_or_else(|| TraverseError::MissingInsertionPoint {
                node: child.id(),
                kind: child.kind(),
                parent: parent.id(),
                span: child.span(),
            })
    }

    fn append(&mut self, point: InsertionPoint, slot: Slot) {
        // Points are only handed out by `allocate`, so the index is in range.
        if let Some(container) = self.containers.get_mut(point.0) {
            container.push(slot);
        }
    }

    // =========================================================================
    // ASSEMBLY
    // =========================================================================

    fn finish(mut self, program: &Program) -> Result<ast::Program, TraverseError> {
        let root = self.insertion_points.get(&program.id).copied().ok_or(TraverseError::MissingInsertionPoint {
            node: program.id,
            kind: NodeKind::Program,
            parent: program.id,
            span: program.span,
        })?;

        let body = self
            .take(root)
            .into_iter()
            .map(|slot| match slot {
                Slot::Statement(call) => Ok(Statement::ExpressionStatement(ExpressionStatement {
                    expression: self.build_call(call)?,
                })),
                Slot::Number(literal) => Ok(Statement::NumberLiteral(literal)),
                Slot::String(literal) => Ok(Statement::StringLiteral(literal)),
                Slot::Call(call) => Err(misplaced(&call, "unwrapped call in program body")),
            })
            .collect::<Result<_, _>>()?;

        Ok(ast::Program { body })
    }

    fn build_call(&mut self, call: PendingCall) -> Result<CallExpression, TraverseError> {
        let arguments = self
            .take(call.arguments)
            .into_iter()
            .map(|slot| match slot {
                Slot::Call(nested) => maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
                    self.build_call(nested).map(Expression::CallExpression)
                }),
                Slot::Number(literal) => Ok(Expression::NumberLiteral(literal)),
                Slot::String(literal) => Ok(Expression::StringLiteral(literal)),
                Slot::Statement(nested) => Err(misplaced(&nested, "statement inside argument list")),
            })
            .collect::<Result<_, _>>()?;

        Ok(CallExpression {
            callee: Identifier { name: call.callee },
            arguments,
        })
    }

    fn take(&mut self, point: InsertionPoint) -> Vec<Slot> {
        self.containers.get_mut(point.0).map(std::mem::take).unwrap_or_default()
    }
}

fn misplaced(call: &PendingCall, detail: &'static str) -> TraverseError {
    TraverseError::Misplaced {
        node: call.source,
        kind: NodeKind::CallExpression,
        detail,
        span: call.span,
    }
}

// =============================================================================
// VISITOR HOOKS
// =============================================================================

impl<'ast> Visitor<'ast> for Transformer {
    fn enter_program(&mut self, program: &'ast Program) -> Result<(), TraverseError> {
        self.allocate(program.id);
        Ok(())
    }

    fn enter_call(&mut self, call: &'ast tiny_parser::CallExpression, parent: Node<'ast>) -> Result<(), TraverseError> {
        let target = self.point_of(parent, Node::CallExpression(call))?;
        let arguments = self.allocate(call.id);
        let pending = PendingCall {
            source: call.id,
            span: call.span,
            callee: call.name.clone(),
            arguments,
        };
        let slot = match parent {
            Node::CallExpression(_) => Slot::Call(pending),
            _ => Slot::Statement(pending),
        };
        self.append(target, slot);
        Ok(())
    }

    fn enter_number(&mut self, literal: &'ast NumberLiteral, parent: Node<'ast>) -> Result<(), TraverseError> {
        let target = self.point_of(parent, Node::NumberLiteral(literal))?;
        self.append(
            target,
            Slot::Number(ast::NumberLiteral {
                value: literal.value.clone(),
            }),
        );
        Ok(())
    }

    fn enter_string(&mut self, literal: &'ast StringLiteral, parent: Node<'ast>) -> Result<(), TraverseError> {
        let target = self.point_of(parent, Node::StringLiteral(literal))?;
        self.append(
            target,
            Slot::String(ast::StringLiteral {
                value: literal.value.clone(),
            }),
        );
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
