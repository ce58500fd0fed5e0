//! # Source Span
//!
//! Positions and ranges in the source text. Every token and every
//! source-tree node carries a [`Span`] so errors can point back at the input.
//!
//! ## Usage
//!
//! ```rust
//! use tiny_parser::{Position, Span};
//!
//! let span = Span::from_bytes(0, 4);
//! assert_eq!(span.start, Position::new(0, 0, 0));
//! assert_eq!(span.len(), 4);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// POSITION
// =============================================================================

/// A single point in the source text.
///
/// `line` and `column` are 0-indexed; `column` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub byte: usize,
    /// Line number (0-indexed).
    pub line: usize,
    /// Column in characters (0-indexed).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }
}

/// Renders as 1-based `line:column`, the way editors show it.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

// =============================================================================
// SPAN
// =============================================================================

/// A half-open range `[start, end)` in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Span {
    /// Create a span between two positions.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a single-line span from byte offsets.
    ///
    /// Line is 0 and columns equal the byte offsets, which is exact for
    /// ASCII single-line input. Mostly useful in tests.
    pub const fn from_bytes(start: usize, end: usize) -> Self {
        Self {
            start: Position::new(start, 0, start),
            end: Position::new(end, 0, end),
        }
    }

    /// Empty span at the start of the source.
    pub const fn zero() -> Self {
        Self::new(Position::new(0, 0, 0), Position::new(0, 0, 0))
    }

    /// Empty span at a single position.
    pub const fn point(position: Position) -> Self {
        Self::new(position, position)
    }

    /// Length in bytes.
    pub const fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    /// True if the span covers no bytes.
    pub const fn is_empty(&self) -> bool {
        self.start.byte >= self.end.byte
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// ```rust
    /// use tiny_parser::Span;
    ///
    /// let merged = Span::from_bytes(0, 1).merge(Span::from_bytes(8, 9));
    /// assert_eq!(merged, Span::from_bytes(0, 9));
    /// ```
    pub fn merge(self, other: Span) -> Span {
        let start = if other.start.byte < self.start.byte { other.start } else { self.start };
        let end = if other.end.byte > self.end.byte { other.end } else { self.end };
        Span::new(start, end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// =============================================================================
// SPANNED
// =============================================================================

/// Anything that knows where it came from in the source.
pub trait Spanned {
    /// Source span of this item.
    fn span(&self) -> Span;
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(Position::new(0, 0, 0).to_string(), "1:1");
        assert_eq!(Position::new(12, 2, 4).to_string(), "3:5");
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::from_bytes(5, 15).len(), 10);
        assert!(Span::from_bytes(3, 3).is_empty());
        assert!(Span::zero().is_empty());
    }

    #[test]
    fn test_span_merge_disjoint() {
        let merged = Span::from_bytes(10, 15).merge(Span::from_bytes(0, 5));
        assert_eq!(merged.start.byte, 0);
        assert_eq!(merged.end.byte, 15);
    }

    #[test]
    fn test_span_point() {
        let p = Position::new(7, 0, 7);
        let span = Span::point(p);
        assert_eq!(span.start, p);
        assert!(span.is_empty());
    }
}
