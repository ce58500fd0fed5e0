//! # Tree Walker
//!
//! Depth-first traversal of the source tree with enter/exit callbacks.
//! Each node is entered, then its children are walked in order, then it is
//! exited:
//!
//! ```text
//! (add 2 (multiply 3 4))
//!
//! -> Program
//!   -> CallExpression add
//!     -> NumberLiteral 2
//!     <- NumberLiteral 2
//!     -> CallExpression multiply
//!       -> NumberLiteral 3
//!       <- NumberLiteral 3
//!       -> NumberLiteral 4
//!       <- NumberLiteral 4
//!     <- CallExpression multiply
//!   <- CallExpression add
//! <- Program
//! ```
//!
//! Two ways to plug in behaviour: implement [`Visitor`] and override the
//! hooks you need, or build a [`VisitorTable`] of closures keyed by
//! [`NodeKind`]. Missing hooks are no-ops. The walker itself keeps no state
//! beyond the recursion stack.

use crate::error::TraverseError;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;
use std::collections::HashMap;
use tiny_parser::{CallExpression, Expr, NodeId, NodeKind, NumberLiteral, Program, Span, Spanned, StringLiteral};

// =============================================================================
// NODE REFERENCES
// =============================================================================

/// Borrowed view of any source-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'ast> {
    Program(&'ast Program),
    CallExpression(&'ast CallExpression),
    NumberLiteral(&'ast NumberLiteral),
    StringLiteral(&'ast StringLiteral),
}

impl<'ast> Node<'ast> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Program(_) => NodeKind::Program,
            Self::CallExpression(_) => NodeKind::CallExpression,
            Self::NumberLiteral(_) => NodeKind::NumberLiteral,
            Self::StringLiteral(_) => NodeKind::StringLiteral,
        }
    }

    pub fn id(&self) -> NodeId {
        match self {
            Self::Program(n) => n.id,
            Self::CallExpression(n) => n.id,
            Self::NumberLiteral(n) => n.id,
            Self::StringLiteral(n) => n.id,
        }
    }

    /// Build a [`TraverseError::Aborted`] pointing at this node.
    pub fn abort(&self, message: impl Into<String>) -> TraverseError {
        TraverseError::Aborted {
            node: self.id(),
            kind: self.kind(),
            message: message.into(),
            span: self.span(),
        }
    }
}

impl<'ast> Spanned for Node<'ast> {
    fn span(&self) -> Span {
        match self {
            Self::Program(n) => n.span,
            Self::CallExpression(n) => n.span,
            Self::NumberLiteral(n) => n.span,
            Self::StringLiteral(n) => n.span,
        }
    }
}

impl<'ast> From<&'ast Expr> for Node<'ast> {
    fn from(expr: &'ast Expr) -> Self {
        match expr {
            Expr::Call(n) => Self::CallExpression(n),
            Expr::Number(n) => Self::NumberLiteral(n),
            Expr::String(n) => Self::StringLiteral(n),
        }
    }
}

// =============================================================================
// VISITOR
// =============================================================================

/// Per-kind enter/exit hooks driven by [`traverse`].
///
/// The root has no parent; every other node is always handed its parent,
/// which is either the `Program` or a `CallExpression`.
#[allow(unused_variables)]
pub trait Visitor<'ast> {
    fn enter_program(&mut self, program: &'ast Program) -> Result<(), TraverseError> {
        Ok(())
    }

    fn exit_program(&mut self, program: &'ast Program) -> Result<(), TraverseError> {
        Ok(())
    }

    fn enter_call(&mut self, call: &'ast CallExpression, parent: Node<'ast>) -> Result<(), TraverseError> {
        Ok(())
    }

    fn exit_call(&mut self, call: &'ast CallExpression, parent: Node<'ast>) -> Result<(), TraverseError> {
        Ok(())
    }

    fn enter_number(&mut self, literal: &'ast NumberLiteral, parent: Node<'ast>) -> Result<(), TraverseError> {
        Ok(())
    }

    fn exit_number(&mut self, literal: &'ast NumberLiteral, parent: Node<'ast>) -> Result<(), TraverseError> {
        Ok(())
    }

    fn enter_string(&mut self, literal: &'ast StringLiteral, parent: Node<'ast>) -> Result<(), TraverseError> {
        Ok(())
    }

    fn exit_string(&mut self, literal: &'ast StringLiteral, parent: Node<'ast>) -> Result<(), TraverseError> {
        Ok(())
    }
}

/// Walk `program` depth-first, calling `visitor` on entry to and exit from
/// every node. Stops at the first error a hook returns.
pub fn traverse<'ast, V>(program: &'ast Program, visitor: &mut V) -> Result<(), TraverseError>
where
    V: Visitor<'ast> + ?Sized,
{
    visitor.enter_program(program)?;
    let parent = Node::Program(program);
    for expr in &program.body {
        walk_expr(expr, parent, visitor)?;
    }
    visitor.exit_program(program)
}

fn walk_expr<'ast, V>(expr: &'ast Expr, parent: Node<'ast>, visitor: &mut V) -> Result<(), TraverseError>
where
    V: Visitor<'ast> + ?Sized,
{
    match expr {
        Expr::Call(call) => maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            visitor.enter_call(call, parent)?;
            let node = Node::CallExpression(call);
            for param in &call.params {
                walk_expr(param, node, visitor)?;
            }
            visitor.exit_call(call, parent)
        }),
        Expr::Number(literal) => {
            visitor.enter_number(literal, parent)?;
            visitor.exit_number(literal, parent)
        }
        Expr::String(literal) => {
            visitor.enter_string(literal, parent)?;
            visitor.exit_string(literal, parent)
        }
    }
}

// =============================================================================
// VISITOR TABLE
// =============================================================================

/// Closure called with `(node, parent)`.
pub type Callback<'a, 'ast> = Box<dyn FnMut(Node<'ast>, Option<Node<'ast>>) -> Result<(), TraverseError> + 'a>;

#[derive(Default)]
struct Handlers<'a, 'ast> {
    enter: Option<Callback<'a, 'ast>>,
    exit: Option<Callback<'a, 'ast>>,
}

#[derive(Clone, Copy)]
enum Phase {
    Enter,
    Exit,
}

/// A [`Visitor`] assembled from closures keyed by node kind.
///
/// ```rust
/// use tiny_ast::walker::{traverse, VisitorTable};
/// use tiny_parser::{parse, tokenize, NodeKind};
///
/// let program = parse(tokenize("(add 2 (multiply 3 4))").unwrap()).unwrap();
/// let mut names = Vec::new();
/// let mut table = VisitorTable::new().on_enter(NodeKind::CallExpression, |node, _parent| {
///     if let tiny_ast::walker::Node::CallExpression(call) = node {
///         names.push(call.name.clone());
///     }
///     Ok(())
/// });
/// traverse(&program, &mut table).unwrap();
/// drop(table);
/// assert_eq!(names, ["add", "multiply"]);
/// ```
#[derive(Default)]
pub struct VisitorTable<'a, 'ast> {
    handlers: HashMap<NodeKind, Handlers<'a, 'ast>>,
}

impl<'a, 'ast> VisitorTable<'a, 'ast> {
    /// Empty table: every hook is a no-op.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Set the enter callback for `kind`, replacing any previous one.
    pub fn on_enter<F>(mut self, kind: NodeKind, callback: F) -> Self
    where
        F: FnMut(Node<'ast>, Option<Node<'ast>>) -> Result<(), TraverseError> + 'a,
    {
        self.handlers.entry(kind).or_default().enter = Some(Box::new(callback));
        self
    }

    /// Set the exit callback for `kind`, replacing any previous one.
    pub fn on_exit<F>(mut self, kind: NodeKind, callback: F) -> Self
    where
        F: FnMut(Node<'ast>, Option<Node<'ast>>) -> Result<(), TraverseError> + 'a,
    {
        self.handlers.entry(kind).or_default().exit = Some(Box::new(callback));
        self
    }

    /// True if any callback is registered for `kind`.
    pub fn handles(&self, kind: NodeKind) -> bool {
        self.handlers
            .get(&kind)
            .is_some_and(|h| h.enter.is_some() || h.exit.is_some())
    }

    fn dispatch(&mut self, phase: Phase, node: Node<'ast>, parent: Option<Node<'ast>>) -> Result<(), TraverseError> {
        let Some(handlers) = self.handlers.get_mut(&node.kind()) else {
            return Ok(());
        };
        let callback = match phase {
            Phase::Enter => handlers.enter.as_mut(),
            Phase::Exit => handlers.exit.as_mut(),
        };
        match callback {
            Some(callback) => callback(node, parent),
            None => Ok(()),
        }
    }
}

impl<'a, 'ast> Visitor<'ast> for VisitorTable<'a, 'ast> {
    fn enter_program(&mut self, program: &'ast Program) -> Result<(), TraverseError> {
        self.dispatch(Phase::Enter, Node::Program(program), None)
    }

    fn exit_program(&mut self, program: &'ast Program) -> Result<(), TraverseError> {
        self.dispatch(Phase::Exit, Node::Program(program), None)
    }

    fn enter_call(&mut self, call: &'ast CallExpression, parent: Node<'ast>) -> Result<(), TraverseError> {
        self.dispatch(Phase::Enter, Node::CallExpression(call), Some(parent))
    }

    fn exit_call(&mut self, call: &'ast CallExpression, parent: Node<'ast>) -> Result<(), TraverseError> {
        self.dispatch(Phase::Exit, Node::CallExpression(call), Some(parent))
    }

    fn enter_number(&mut self, literal: &'ast NumberLiteral, parent: Node<'ast>) -> Result<(), TraverseError> {
        self.dispatch(Phase::Enter, Node::NumberLiteral(literal), Some(parent))
    }

    fn exit_number(&mut self, literal: &'ast NumberLiteral, parent: Node<'ast>) -> Result<(), TraverseError> {
        self.dispatch(Phase::Exit, Node::NumberLiteral(literal), Some(parent))
    }

    fn enter_string(&mut self, literal: &'ast StringLiteral, parent: Node<'ast>) -> Result<(), TraverseError> {
        self.dispatch(Phase::Enter, Node::StringLiteral(literal), Some(parent))
    }

    fn exit_string(&mut self, literal: &'ast StringLiteral, parent: Node<'ast>) -> Result<(), TraverseError> {
        self.dispatch(Phase::Exit, Node::StringLiteral(literal), Some(parent))
    }
}

// =============================================================================
// TESTS
// =============================================================================
