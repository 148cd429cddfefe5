//! Byte offset to 1-indexed line/column conversion.

use serde::Serialize;

/// Where a query failed to parse, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// Converts a byte offset into a 1-indexed `(line, column)` pair.
///
/// The line counts `\n` bytes strictly before `offset`. The column counts
/// characters from the start of that line, so multi-byte text before the
/// offset advances the column by one per character. Offsets past the end are
/// clamped; offsets inside a character snap back to its start.
pub fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
