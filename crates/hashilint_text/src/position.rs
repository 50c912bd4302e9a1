//! Zero-based coordinates and offset/line-column mapping.
//!
//! All coordinates count Unicode scalar values: a row is a count of
//! newline-terminated lines, a column is a count of chars within the line,
//! and absolute offsets are char offsets into the whole text. Out-of-range
//! locators clamp to the nearest valid coordinate instead of failing.

use serde::{Deserialize, Serialize};

/// A zero-based row/column coordinate in a document.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    /// Creates a position from zero-based row and column.
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Converts a 1-based line/column pair into a zero-based position.
    ///
    /// Values of 0 (technically out of range for 1-based input) clamp to 0
    /// rather than wrapping.
    pub fn from_line_col(line: u32, column: u32) -> Self {
        Self {
            row: line.saturating_sub(1),
            column: column.saturating_sub(1),
        }
    }
}

/// A range between two positions, with `start <= end`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Creates a range, reordering the endpoints if needed.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Creates a zero-width range at the given position.
    pub fn collapsed(at: Position) -> Self {
        Self { start: at, end: at }
    }
}

/// Converts an absolute char offset to a position by scanning newline
/// boundaries.
///
/// Offsets past the end of the text clamp to the position just after the
/// last char.
pub fn position_at_offset(text: &str, offset: usize) -> Position {
    let mut row = 0u32;
    let mut column = 0u32;

    for ch in text.chars().take(offset) {
        if ch == '\n' {
            row += 1;
            column = 0;
        } else {
            column += 1;
        }
    }

    Position::new(row, column)
}

/// Maps a pair of char offsets to a range against the same text.
pub fn range_at_offsets(text: &str, start: usize, end: usize) -> Range {
    Range::new(
        position_at_offset(text, start),
        position_at_offset(text, end),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_position_at_offset_basic_ascii() {
        let text = "Hello World";
        assert_eq!(position_at_offset(text, 0), Position::new(0, 0));
        assert_eq!(position_at_offset(text, 5), Position::new(0, 5));
        assert_eq!(position_at_offset(text, 11), Position::new(0, 11));
    }

    #[test]
    fn test_position_at_offset_multiline() {
        let text = "Line 1\nLine 2\nLine 3";
        assert_eq!(position_at_offset(text, 6), Position::new(0, 6));
        assert_eq!(position_at_offset(text, 7), Position::new(1, 0));
        assert_eq!(position_at_offset(text, 20), Position::new(2, 6));
    }

    #[test]
    fn test_position_at_offset_clamps_past_end() {
        let text = "ab\ncd";
        assert_eq!(position_at_offset(text, 5), Position::new(1, 2));
        assert_eq!(position_at_offset(text, 100), Position::new(1, 2));
    }

    #[test]
    fn test_position_at_offset_empty_string() {
        assert_eq!(position_at_offset("", 0), Position::new(0, 0));
        assert_eq!(position_at_offset("", 7), Position::new(0, 0));
    }

    #[test]
    fn test_position_at_offset_multibyte() {
        let text = "あい\nう";
        assert_eq!(position_at_offset(text, 1), Position::new(0, 1));
        assert_eq!(position_at_offset(text, 3), Position::new(1, 0));
        assert_eq!(position_at_offset(text, 4), Position::new(1, 1));
    }

    #[rstest]
    #[case(1, 1, Position::new(0, 0))]
    #[case(1, 3, Position::new(0, 2))]
    #[case(42, 7, Position::new(41, 6))]
    #[case(0, 0, Position::new(0, 0))]
    fn test_from_line_col(#[case] line: u32, #[case] column: u32, #[case] expected: Position) {
        assert_eq!(Position::from_line_col(line, column), expected);
    }

    #[test]
    fn test_range_reorders_endpoints() {
        let a = Position::new(2, 0);
        let b = Position::new(1, 5);
        let range = Range::new(a, b);
        assert_eq!(range.start, b);
        assert_eq!(range.end, a);
    }

    #[test]
    fn test_range_collapsed() {
        let at = Position::new(3, 4);
        let range = Range::collapsed(at);
        assert_eq!(range.start, range.end);
        assert_eq!(range.start, at);
    }

    #[test]
    fn test_range_at_offsets() {
        let text = "var foo\nvar bar\n";
        let range = range_at_offsets(text, 4, 12);
        assert_eq!(range.start, Position::new(0, 4));
        assert_eq!(range.end, Position::new(1, 4));
    }

    #[test]
    fn test_range_at_offsets_reversed_input() {
        let text = "abc\ndef";
        let range = range_at_offsets(text, 6, 1);
        assert_eq!(range.start, Position::new(0, 1));
        assert_eq!(range.end, Position::new(1, 2));
    }
}
