//! # Config Crate
//!
//! Centralized configuration constants for the tiny compiler pipeline.
//! Every piece of punctuation the lexer recognizes and the code generator
//! emits is defined here, together with input size limits.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ARGUMENT_SEPARATOR, STATEMENT_TERMINATOR};
//!
//! let call = format!("add(2{}3){}", ARGUMENT_SEPARATOR, STATEMENT_TERMINATOR);
//! assert_eq!(call, "add(2, 3);");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Punctuation defined once, shared by lexer and generator
//! - **Browser-Safe**: No platform-specific values
//! - **No Dependencies**: Pure constants and small helpers

pub mod constants;

#[cfg(test)]
mod tests;
