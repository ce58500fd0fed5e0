//! # Tiny Compiler
//!
//! Driver for the whole pipeline: parenthesized-prefix source in, C-like
//! call syntax out.
//!
//! ## Architecture
//!
//! ```text
//! source ─tokenize─▶ tokens ─parse─▶ source tree ─transform─▶ target tree ─generate─▶ code
//! ```
//!
//! Every call owns its intermediate artifacts; nothing is shared between
//! calls, so `compile` may run on many threads at once. The first failing
//! stage aborts the call and no partial output is produced.
//!
//! ## Example
//!
//! ```rust
//! let code = tiny_compiler::compile("(add 2 (multiply 3 4))").unwrap();
//! assert_eq!(code, "add(2, multiply(3, 4));");
//! ```

pub mod error;
pub mod options;

pub use error::CompileError;
pub use options::{CompileOptions, Stage, UnknownStage};

pub use tiny_ast::{Diagnostic, GeneratorOptions, Severity};
pub use tiny_parser::LexerOptions;

use config::constants::MAX_SOURCE_SIZE;
use serde::Serialize;
use tiny_ast::{generate_with, transform, traverse, TraverseError, VisitorTable};
use tiny_parser::{parse, tokenize_with, NodeKind, Program};
use tracing::{debug, warn, Level};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compile `source` with default options.
///
/// ## Errors
///
/// The first failing stage's error, unchanged: [`CompileError::Lex`],
/// [`CompileError::Parse`], or an internal [`CompileError::Traverse`] /
/// [`CompileError::CodeGen`].
pub fn compile(source: &str) -> Result<String, CompileError> {
    compile_with(source, &CompileOptions::default())
}

/// Compile `source` with explicit options.
pub fn compile_with(source: &str, options: &CompileOptions) -> Result<String, CompileError> {
    emit(source, Stage::Code, options)
}

/// Run the pipeline up to `stage` and render that stage's artifact.
///
/// Tokens and trees are rendered as pretty-printed JSON; [`Stage::Code`]
/// returns the generated code.
///
/// ```rust
/// use tiny_compiler::{emit, CompileOptions, Stage};
///
/// let json = emit("(add 2 3)", Stage::Tokens, &CompileOptions::default()).unwrap();
/// assert!(json.contains("\"Identifier\""));
/// ```
pub fn emit(source: &str, stage: Stage, options: &CompileOptions) -> Result<String, CompileError> {
    check_size(source)?;
    if options.lexer.allow_unterminated_strings {
        warn!("unterminated string literals are accepted and run to end of input");
    }

    let tokens = tokenize_with(source, options.lexer)?;
    debug!(bytes = source.len(), tokens = tokens.len(), "lexed source");
    if stage == Stage::Tokens {
        return dump(stage, &tokens);
    }

    let program = parse(tokens)?;
    if tracing::enabled!(Level::DEBUG) {
        debug!(
            expressions = program.body.len(),
            nodes = program.node_count(),
            calls = count_calls(&program)?,
            "parsed source tree"
        );
    }
    if stage == Stage::SourceTree {
        return dump(stage, &program);
    }

    let target = transform(&program)?;
    drop(program);
    debug!(statements = target.body.len(), "built target tree");
    if stage == Stage::TargetTree {
        return dump(stage, &target);
    }

    let code = generate_with(&target, options.generator)?;
    debug!(len = code.len(), "generated code");
    Ok(code)
}

/// Compile and collect every problem as a diagnostic.
///
/// On success the list holds lint warnings only; on failure it holds the
/// failing stage's error.
pub fn check(source: &str, options: &CompileOptions) -> Vec<Diagnostic> {
    let program = match check_size(source)
        .and_then(|()| Ok(tokenize_with(source, options.lexer)?))
        .and_then(|tokens| Ok(parse(tokens)?))
    {
        Ok(program) => program,
        Err(err) => return vec![err.diagnostic()],
    };

    let lowered = transform(&program)
        .map_err(CompileError::from)
        .and_then(|target| Ok(generate_with(&target, options.generator)?));
    match lowered {
        Ok(_) => tiny_ast::lint(&program),
        Err(err) => vec![err.diagnostic()],
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn check_size(source: &str) -> Result<(), CompileError> {
    if source.len() > MAX_SOURCE_SIZE {
        return Err(CompileError::SourceTooLarge {
            size: source.len(),
            limit: MAX_SOURCE_SIZE,
        });
    }
    Ok(())
}

fn dump<T: Serialize + ?Sized>(stage: Stage, artifact: &T) -> Result<String, CompileError> {
    serde_json::to_string_pretty(artifact).map_err(|source| CompileError::Dump { stage, source })
}

fn count_calls(program: &Program) -> Result<usize, TraverseError> {
    let mut calls = 0;
    let mut table = VisitorTable::new().on_enter(NodeKind::CallExpression, |_, _| {
        calls += 1;
        Ok(())
    });
    traverse(program, &mut table)?;
    drop(table);
    Ok(calls)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_simple() {
        assert_eq!(compile("(add 2 3)").unwrap(), "add(2, 3);");
    }

    #[test]
    fn test_compile_empty_source() {
        assert_eq!(compile("").unwrap(), "");
        assert_eq!(compile("  \n ").unwrap(), "");
    }

    #[test]
    fn test_compile_with_escaping() {
        let options = CompileOptions::default().escape_strings(true);
        assert_eq!(compile_with("(say \"a\\b\")", &options).unwrap(), "say(\"a\\\\b\");");
    }

    #[test]
    fn test_lenient_strings() {
        let options = CompileOptions::default().lenient_strings(true);
        assert_eq!(compile_with("\"open", &options).unwrap(), "\"open\"");
        assert!(matches!(compile("\"open"), Err(CompileError::Lex(_))));
    }

    #[test]
    fn test_source_size_limit() {
        let source = " ".repeat(MAX_SOURCE_SIZE + 1);
        let err = compile(&source).unwrap_err();
        assert!(matches!(err, CompileError::SourceTooLarge { .. }));
    }

    #[test]
    fn test_emit_source_tree() {
        let json = emit("(add 2 3)", Stage::SourceTree, &CompileOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["body"][0]["type"], "CallExpression");
        assert_eq!(value["body"][0]["params"][0]["value"], "2");
    }

    #[test]
    fn test_emit_target_tree() {
        let json = emit("(add 2 3)", Stage::TargetTree, &CompileOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["body"][0]["type"], "ExpressionStatement");
        assert_eq!(value["body"][0]["expression"]["callee"]["name"], "add");
    }

    #[test]
    fn test_emit_stops_at_requested_stage() {
        // Tokens are produced even though the program does not parse.
        assert!(emit("(add", Stage::Tokens, &CompileOptions::default()).is_ok());
        assert!(emit("(add", Stage::SourceTree, &CompileOptions::default()).is_err());
    }

    #[test]
    fn test_check_reports_warnings_and_errors() {
        let options = CompileOptions::default();
        assert!(check("(add 1 2)", &options).is_empty());

        let warnings = check("(add 1 2) 3", &options);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::Warning);

        let errors = check("(add 1 2", &options);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_error());
    }

    #[test]
    fn test_count_calls() {
        let program = parse(tiny_parser::tokenize("(a (b) (c (d)))").unwrap()).unwrap();
        assert_eq!(count_calls(&program).unwrap(), 4);
    }
}
