//! # Tiny AST
//!
//! Back end of the tiny compiler: the target syntax tree, the generic tree
//! walker, the transformer that lowers the source tree into the target tree,
//! and the code generator.
//!
//! ## Architecture
//!
//! ```text
//! tiny_parser::Program ──traverse + transform──▶ ast::Program ──generate──▶ String
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tiny_ast::{generate, transform};
//! use tiny_parser::{parse, tokenize};
//!
//! let source = parse(tokenize("(add 2 3) (multiply 4 5)").unwrap()).unwrap();
//! let target = transform(&source).unwrap();
//! assert_eq!(generate(&target).unwrap(), "add(2, 3);\nmultiply(4, 5);");
//! ```

pub mod ast;
pub mod diagnostic;
pub mod error;
pub mod printer;
pub mod transform;
pub mod walker;

pub use diagnostic::{lint, Diagnostic, Severity};
pub use error::{CodeGenError, TraverseError};
pub use printer::{generate, generate_with, Generator, GeneratorOptions};
pub use transform::{transform, InsertionPoint};
pub use walker::{traverse, Node, Visitor, VisitorTable};
