//! # Code Generator
//!
//! Renders a target tree as C-like call syntax.
//!
//! ```text
//! Program              statements joined by "\n"
//! ExpressionStatement  expression + ";"
//! CallExpression       callee "(" arguments joined by ", " ")"
//! NumberLiteral        value verbatim
//! StringLiteral        '"' value '"'
//! ```
//!
//! Output goes to any [`std::fmt::Write`] sink; [`generate`] collects it into a
//! `String`.

use crate::ast::{CallExpression, Expression, Program, Statement};
use crate::error::CodeGenError;
use config::constants::{
    escape_string, ARGUMENT_SEPARATOR, CALL_CLOSE, CALL_OPEN, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES,
    STATEMENT_SEPARATOR, STATEMENT_TERMINATOR, STRING_DELIMITER,
};
use serde::{Deserialize, Serialize};
use stacker::maybe_grow;
use std::fmt::Write;

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Escape `\` and `"` inside string literals. Off by default: values
    /// are written between the quotes untouched.
    pub escape_strings: bool,
}

/// Render `program` with default options.
///
/// ```rust
/// use tiny_ast::{generate, transform};
/// use tiny_parser::{parse, tokenize};
///
/// let target = transform(&parse(tokenize("(add 2 (multiply 3 4))").unwrap()).unwrap()).unwrap();
/// assert_eq!(generate(&target).unwrap(), "add(2, multiply(3, 4));");
/// ```
pub fn generate(program: &Program) -> Result<String, CodeGenError> {
    generate_with(program, GeneratorOptions::default())
}

/// Render `program` with explicit options.
pub fn generate_with(program: &Program, options: GeneratorOptions) -> Result<String, CodeGenError> {
    let mut out = String::new();
    Generator::new(&mut out, options).program(program)?;
    Ok(out)
}

/// Streaming renderer over a [`std::fmt::Write`] sink.
pub struct Generator<'w, W: Write + ?Sized> {
    out: &'w mut W,
    options: GeneratorOptions,
}

impl<'w, W: Write + ?Sized> Generator<'w, W> {
    pub fn new(out: &'w mut W, options: GeneratorOptions) -> Self {
        Self { out, options }
    }

    /// Write every statement, separated by newlines. No trailing newline.
    pub fn program(&mut self, program: &Program) -> Result<(), CodeGenError> {
        for (i, statement) in program.body.iter().enumerate() {
            if i > 0 {
                self.out.write_str(STATEMENT_SEPARATOR)?;
            }
            self.statement(statement)?;
        }
        Ok(())
    }

    pub fn statement(&mut self, statement: &Statement) -> Result<(), CodeGenError> {
        match statement {
            Statement::ExpressionStatement(stmt) => {
                self.call(&stmt.expression)?;
                self.out.write_str(STATEMENT_TERMINATOR)?;
            }
            Statement::NumberLiteral(literal) => self.out.write_str(&literal.value)?,
            Statement::StringLiteral(literal) => self.string(&literal.value)?,
        }
        Ok(())
    }

    pub fn expression(&mut self, expression: &Expression) -> Result<(), CodeGenError> {
        match expression {
            Expression::CallExpression(call) => {
                maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || self.call(call))
            }
            Expression::NumberLiteral(literal) => Ok(self.out.write_str(&literal.value)?),
            Expression::StringLiteral(literal) => self.string(&literal.value),
        }
    }

    fn call(&mut self, call: &CallExpression) -> Result<(), CodeGenError> {
        if call.callee.name.is_empty() {
            return Err(CodeGenError::EmptyCallee);
        }
        self.out.write_str(&call.callee.name)?;
        self.out.write_str(CALL_OPEN)?;
        for (i, argument) in call.arguments.iter().enumerate() {
            if i > 0 {
                self.out.write_str(ARGUMENT_SEPARATOR)?;
            }
            self.expression(argument)?;
        }
        self.out.write_str(CALL_CLOSE)?;
        Ok(())
    }

    fn string(&mut self, value: &str) -> Result<(), CodeGenError> {
        self.out.write_char(STRING_DELIMITER)?;
        if self.options.escape_strings {
            self.out.write_str(&escape_string(value))?;
        } else {
            self.out.write_str(value)?;
        }
        self.out.write_char(STRING_DELIMITER)?;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
