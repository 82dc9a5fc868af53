//! Source location types
//!
//! 1-based lines and columns, used for diagnostics.

use serde::{Deserialize, Serialize};

/// Span in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl Span {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Compute the span of a byte range inside `text`
    pub fn from_byte_range(text: &str, start: usize, end: usize) -> Self {
        let (start_line, start_col) = line_col(text, start);
        let (end_line, end_col) = line_col(text, end);
        Self::new(start_line, start_col, end_line, end_col)
    }
}

fn line_col(text: &str, offset: usize) -> (u32, u32) {
    let offset = offset.min(text.len());
    let before = &text.as_bytes()[..offset];
    let line = before.iter().filter(|b| **b == b'\n').count() as u32 + 1;
    let line_start = before
        .iter()
        .rposition(|b| *b == b'\n')
        .map(|p| p + 1)
        .unwrap_or(0);
    let col = text
        .get(line_start..offset)
        .map(|s| s.chars().count())
        .unwrap_or(offset - line_start) as u32
        + 1;
    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_from_byte_range() {
        let text = "ab\ncd\nef";
        let span = Span::from_byte_range(text, 4, 7);
        assert_eq!(span, Span::new(2, 2, 3, 2));
    }

    #[test]
    fn test_span_first_column_is_one() {
        assert_eq!(Span::from_byte_range("x", 0, 1), Span::new(1, 1, 1, 2));
    }
}
