//! WASM-compatible diagnostic types.
//!
//! JavaScript-facing wrappers around the compiler's diagnostics.

use tiny_compiler::{Diagnostic as RustDiagnostic, Severity as RustSeverity};
use wasm_bindgen::prelude::*;

/// Diagnostic severity for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl From<RustSeverity> for Severity {
    fn from(severity: RustSeverity) -> Self {
        match severity {
            RustSeverity::Error => Severity::Error,
            RustSeverity::Warning => Severity::Warning,
        }
    }
}

/// A diagnostic message for JavaScript.
///
/// `start`/`end` are byte offsets into the source; `line`/`column` are
/// 1-based, ready for display.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const diag = check("(add 2 @)").get(0);
/// // console.log(diag.line(), diag.column(), diag.message());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    start: usize,
    end: usize,
    line: usize,
    column: usize,
    hint: Option<String>,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the severity of the diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Returns the start byte offset in the source.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the end byte offset in the source.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the 1-based line of the start position.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based column of the start position.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the hint, if any.
    pub fn hint(&self) -> Option<String> {
        self.hint.clone()
    }

    /// Converts this diagnostic to a plain JavaScript object.
    ///
    /// Plain objects can cross a worker boundary; wasm-bindgen wrappers
    /// cannot.
    pub fn to_js_object(&self) -> Result<JsValue, JsValue> {
        use js_sys::{Object, Reflect};

        let obj = Object::new();
        Reflect::set(&obj, &"severity".into(), &JsValue::from(self.severity as i32))?;
        Reflect::set(&obj, &"message".into(), &JsValue::from_str(&self.message))?;
        Reflect::set(&obj, &"start".into(), &JsValue::from(self.start as f64))?;
        Reflect::set(&obj, &"end".into(), &JsValue::from(self.end as f64))?;
        Reflect::set(&obj, &"line".into(), &JsValue::from(self.line as f64))?;
        Reflect::set(&obj, &"column".into(), &JsValue::from(self.column as f64))?;
        if let Some(hint) = &self.hint {
            Reflect::set(&obj, &"hint".into(), &JsValue::from_str(hint))?;
        }

        Ok(JsValue::from(obj))
    }
}

impl From<RustDiagnostic> for Diagnostic {
    fn from(diag: RustDiagnostic) -> Self {
        Self {
            severity: diag.severity.into(),
            message: diag.message,
            start: diag.span.start.byte,
            end: diag.span.end.byte,
            line: diag.span.start.line + 1,
            column: diag.span.start.column + 1,
            hint: diag.hint,
        }
    }
}

/// A collection of diagnostics.
#[wasm_bindgen]
pub struct DiagnosticList {
    diagnostics: Vec<Diagnostic>,
}

#[wasm_bindgen]
impl DiagnosticList {
    /// Returns the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if there are no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns true if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// Returns a diagnostic by index.
    pub fn get(&self, index: usize) -> Option<Diagnostic> {
        self.diagnostics.get(index).cloned()
    }
}

impl DiagnosticList {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}

impl From<Vec<RustDiagnostic>> for DiagnosticList {
    fn from(diagnostics: Vec<RustDiagnostic>) -> Self {
        Self::new(diagnostics.into_iter().map(Diagnostic::from).collect())
    }
}
