//! WASM-facing entry points for the tiny compiler.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`: the page hands over the text typed by the user and
//! shows the returned code or diagnostics. Native tests use the
//! `*_internal` helpers, which return Rust types and need no JS host.
//!
//! ```
//! let code = tiny_compiler_wasm::compile_internal("(add 2 3)").unwrap();
//! assert_eq!(code, "add(2, 3);");
//! ```

use tiny_compiler::{CompileError, CompileOptions, Stage};
use wasm_bindgen::prelude::*;

mod diagnostics;

pub use diagnostics::{Diagnostic, DiagnosticList, Severity};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "tiny-compiler-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Compiles source text and returns the generated code.
///
/// # Errors
/// Returns a JavaScript string describing the first failure, with its
/// position and hint.
///
/// # Examples
/// ```no_run
/// // In JavaScript: compile("(add 2 3)") === "add(2, 3);"
/// ```
#[wasm_bindgen]
pub fn compile(source: &str) -> Result<String, JsValue> {
    compile_internal(source).map_err(|err| JsValue::from_str(&err.diagnostic().to_string()))
}

/// Runs the pipeline up to `stage` (`tokens`, `source-tree`, `target-tree`
/// or `code`) and returns that artifact as text.
///
/// # Examples
/// ```no_run
/// // In JavaScript: JSON.parse(emit("(add 2 3)", "tokens")).length === 5
/// ```
#[wasm_bindgen]
pub fn emit(source: &str, stage: &str) -> Result<String, JsValue> {
    let stage: Stage = stage.parse().map_err(|err: tiny_compiler::UnknownStage| JsValue::from_str(&err.to_string()))?;
    emit_internal(source, stage).map_err(|err| JsValue::from_str(&err.diagnostic().to_string()))
}

/// Checks source text and returns every diagnostic: the compile error, or
/// lint warnings when compilation succeeds. Empty for a clean program.
#[wasm_bindgen]
pub fn check(source: &str) -> DiagnosticList {
    check_internal(source).into()
}

/// Host-only helper behind [`compile`].
///
/// # Examples
/// ```
/// let err = tiny_compiler_wasm::compile_internal("(add 2 3").unwrap_err();
/// assert_eq!(err.stage(), "parser");
/// ```
pub fn compile_internal(source: &str) -> Result<String, CompileError> {
    tiny_compiler::compile(source)
}

/// Host-only helper behind [`emit`].
pub fn emit_internal(source: &str, stage: Stage) -> Result<String, CompileError> {
    tiny_compiler::emit(source, stage, &CompileOptions::default())
}

/// Host-only helper behind [`check`].
pub fn check_internal(source: &str) -> Vec<tiny_compiler::Diagnostic> {
    tiny_compiler::check(source, &CompileOptions::default())
}
