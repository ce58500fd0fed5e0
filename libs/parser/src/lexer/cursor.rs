//! # Character Cursor
//!
//! Forward-only view of the source. Holds the unread remainder and the
//! [`Position`] of its first character.
//!
//! ```rust
//! use tiny_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("(add");
//! cursor.advance();
//! let start = cursor.position();
//! cursor.advance_while(char::is_alphabetic);
//! assert_eq!(cursor.slice_from(start), "add");
//! ```

use crate::span::Position;

pub struct Cursor<'a> {
    source: &'a str,
    rest: &'a str,
    at: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            rest: source,
            at: Position::default(),
        }
    }

    /// Position of the next unread character.
    pub fn position(&self) -> Position {
        self.at
    }

    pub fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Consume one character. A `'\n'` moves to column 0 of the next line.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        self.at.byte += c.len_utf8();
        match c {
            '\n' => {
                self.at.line += 1;
                self.at.column = 0;
            }
            _ => self.at.column += 1,
        }
        Some(c)
    }

    /// Consume characters for as long as `accept` holds.
    pub fn advance_while(&mut self, accept: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&accept) {
            self.advance();
        }
    }

    /// Text consumed since `start`.
    pub fn slice_from(&self, start: Position) -> &'a str {
        &self.source[start.byte..self.at.byte]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), Position::default());
    }

    #[test]
    fn test_peek_is_idempotent() {
        let cursor = Cursor::new("xyz");
        assert_eq!((cursor.peek(), cursor.peek()), (Some('x'), Some('x')));
        assert!(!cursor.is_eof());
    }

    #[test]
    fn test_line_break_resets_column() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance_while(|c| c != '\n');
        assert_eq!(cursor.position(), Position::new(2, 0, 2));
        cursor.advance();
        assert_eq!(cursor.position(), Position::new(3, 1, 0));
    }

    #[test]
    fn test_multibyte_column_counts_chars() {
        let mut cursor = Cursor::new("ü7");
        assert_eq!(cursor.advance(), Some('ü'));
        assert_eq!(cursor.position(), Position::new(2, 0, 1));
        assert_eq!(cursor.peek(), Some('7'));
    }

    #[test]
    fn test_slice_spans_consumed_text() {
        let mut cursor = Cursor::new("42 rest");
        let start = cursor.position();
        cursor.advance_while(|c| c.is_ascii_digit());
        assert_eq!(cursor.slice_from(start), "42");
        assert_eq!(cursor.peek(), Some(' '));
    }
}
