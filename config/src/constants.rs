//! # Configuration Constants
//!
//! Centralized constants for the compiler pipeline.
//!
//! ## Categories
//!
//! - **Source Syntax**: Delimiters recognized by the lexer
//! - **Target Syntax**: Separators and terminators written by the generator
//! - **Limits**: Maximum values for safety bounds

use std::borrow::Cow;

// =============================================================================
// SOURCE SYNTAX CONSTANTS
// =============================================================================

/// Opens a call expression in source text.
pub const OPEN_PAREN: char = '(';

/// Closes a call expression in source text.
pub const CLOSE_PAREN: char = ')';

/// Delimits string literals in both source and target text.
///
/// # Example
///
/// ```rust
/// use config::constants::STRING_DELIMITER;
///
/// let rendered = format!("{0}foo{0}", STRING_DELIMITER);
/// assert_eq!(rendered, "\"foo\"");
/// ```
pub const STRING_DELIMITER: char = '"';

/// Escape character used when string escaping is enabled.
pub const ESCAPE_CHAR: char = '\\';

// =============================================================================
// TARGET SYNTAX CONSTANTS
// =============================================================================

/// Separator between rendered call arguments.
///
/// # Example
///
/// ```rust
/// use config::constants::ARGUMENT_SEPARATOR;
///
/// let args = ["2", "3"].join(ARGUMENT_SEPARATOR);
/// assert_eq!(args, "2, 3");
/// ```
pub const ARGUMENT_SEPARATOR: &str = ", ";

/// Terminator appended to every top-level statement.
pub const STATEMENT_TERMINATOR: &str = ";";

/// Separator between top-level statements in the generated output.
///
/// # Example
///
/// ```rust
/// use config::constants::STATEMENT_SEPARATOR;
///
/// let program = ["add(2, 3);", "multiply(4, 5);"].join(STATEMENT_SEPARATOR);
/// assert_eq!(program, "add(2, 3);\nmultiply(4, 5);");
/// ```
pub const STATEMENT_SEPARATOR: &str = "\n";

/// Opens the argument list of a rendered call.
pub const CALL_OPEN: &str = "(";

/// Closes the argument list of a rendered call.
pub const CALL_CLOSE: &str = ")";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum size of a source file accepted by the command line driver (in bytes).
///
/// This is also the only bound on nesting depth. 16 MB default.
pub const MAX_SOURCE_SIZE: usize = 16 * 1024 * 1024;

/// Bytes of stack allocated for each new segment when a recursive stage
/// grows its stack with the `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Remaining stack below which a recursive stage switches to a fresh
/// segment. One level of recursion must fit inside it.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = STACKER_STACK_SIZE_BYTES / 64;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Whether `c` separates tokens in source text.
///
/// Unicode `White_Space` plus the byte order mark U+FEFF, minus NEXT LINE
/// U+0085. This is the set a JavaScript `/\s/` matches.
///
/// # Example
///
/// ```rust
/// use config::constants::is_source_whitespace;
///
/// assert!(is_source_whitespace('\u{FEFF}'));
/// assert!(!is_source_whitespace('\u{0085}'));
/// ```
pub fn is_source_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// Escapes `"` and `\` inside a string literal value.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Example
///
/// ```rust
/// use config::constants::escape_string;
///
/// assert_eq!(escape_string("plain"), "plain");
/// assert_eq!(escape_string("say \"hi\""), "say \\\"hi\\\"");
/// ```
pub fn escape_string(value: &str) -> Cow<'_, str> {
    if !value.contains([STRING_DELIMITER, ESCAPE_CHAR]) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        if c == STRING_DELIMITER || c == ESCAPE_CHAR {
            escaped.push(ESCAPE_CHAR);
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}
