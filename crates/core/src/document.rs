//! Document access contract — how the engine reads editor or file content.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// A zero-based cursor position in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line index.
    pub line: u32,
    /// Zero-based character column within the line.
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Supplies document text and position mapping for completion requests.
///
/// `chars_by_path` returning `None` is not an error — the engine answers
/// such requests with an empty completion.
#[async_trait]
pub trait DocumentProvider: Send + Sync {
    /// Fetch the full text of a document, or `None` if it is unavailable.
    async fn chars_by_path(&self, path: &str) -> std::result::Result<Option<String>, DocumentError>;

    /// Map a position to a byte offset into `text`.
    ///
    /// The returned offset is a char boundary within `text`; out-of-range
    /// lines or columns clamp to the nearest valid location.
    fn position_to_offset(&self, position: Position, text: &str) -> usize {
        offset_of(position, text)
    }
}

/// Default line/column → byte-offset mapping.
///
/// Columns count characters, not bytes, so multi-byte text maps cleanly.
/// A line past the end of the document maps to the document end; a column
/// past the end of its line maps to the line end.
pub fn offset_of(position: Position, text: &str) -> usize {
    let mut remaining = text;
    let mut base = 0;
    for _ in 0..position.line {
        match remaining.find('\n') {
            Some(i) => {
                base += i + 1;
                remaining = &remaining[i + 1..];
            }
            None => return text.len(),
        }
    }

    let line_end = remaining.find('\n').unwrap_or(remaining.len());
    let line = &remaining[..line_end];
    let column = line
        .char_indices()
        .nth(position.column as usize)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    base + column
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_at_document_start() {
        assert_eq!(offset_of(Position::new(0, 0), "hello\nworld"), 0);
    }

    #[test]
    fn offset_within_first_line() {
        assert_eq!(offset_of(Position::new(0, 3), "hello\nworld"), 3);
    }

    #[test]
    fn offset_on_second_line() {
        assert_eq!(offset_of(Position::new(1, 2), "hello\nworld"), 8);
    }

    #[test]
    fn column_past_line_end_clamps() {
        assert_eq!(offset_of(Position::new(0, 99), "hi\nthere"), 2);
    }

    #[test]
    fn line_past_document_end_clamps() {
        let text = "one\ntwo";
        assert_eq!(offset_of(Position::new(9, 0), text), text.len());
    }

    #[test]
    fn multibyte_columns_stay_on_char_boundaries() {
        let text = "αβγ\ndelta";
        let offset = offset_of(Position::new(0, 2), text);
        assert!(text.is_char_boundary(offset));
        assert_eq!(&text[..offset], "αβ");
    }

    #[test]
    fn empty_document_maps_to_zero() {
        assert_eq!(offset_of(Position::new(5, 5), ""), 0);
    }
}
