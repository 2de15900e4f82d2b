//! Line index for offset ↔ line/column conversion.

use crate::ByteOffset;
use text_size::TextSize;

/// A line and column position (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    /// 0-indexed line number.
    pub line: u32,
    /// 0-indexed column (byte offset within the line).
    pub col: u32,
}

impl LineCol {
    /// Creates a new line/column position.
    #[inline]
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// An index for converting between byte offsets and line/column positions.
///
/// Stores the byte offset of the start of each line, so lookups in both
/// directions are a binary search.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// `line_starts[i]` is the offset where line `i` begins.
    line_starts: Vec<ByteOffset>,
    /// Total length of the indexed text.
    len: ByteOffset,
}

impl LineIndex {
    /// Creates a new line index from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];

        for (offset, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(crate::span::offset(offset + 1));
            }
        }

        Self {
            line_starts,
            len: crate::span::offset(text.len()),
        }
    }

    /// Returns the number of lines in the source.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a byte offset to a line/column position.
    ///
    /// Returns `None` if the offset is past the end of the text.
    pub fn line_col(&self, offset: ByteOffset) -> Option<LineCol> {
        if offset > self.len {
            return None;
        }

        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };

        let line_start = self.line_starts[line];
        Some(LineCol {
            line: line as u32,
            col: u32::from(offset - line_start),
        })
    }

    /// Like [`line_col`](Self::line_col) but with the column counted in UTF-16
    /// code units, as sourcemap v3 consumers expect.
    ///
    /// `text` must be the text this index was built from.
    pub fn line_col_utf16(&self, text: &str, offset: ByteOffset) -> Option<LineCol> {
        let LineCol { line, col } = self.line_col(offset)?;
        let start = u32::from(self.line_starts[line as usize]) as usize;
        let end = start + col as usize;
        let segment = text.get(start..end)?;
        let col = if segment.is_ascii() {
            col
        } else {
            segment.encode_utf16().count() as u32
        };
        Some(LineCol { line, col })
    }

    /// Converts a line/column position to a byte offset.
    ///
    /// Returns `None` if the line is out of bounds.
    pub fn offset(&self, line_col: LineCol) -> Option<ByteOffset> {
        let line_start = self.line_start(line_col.line)?;
        Some(line_start + TextSize::from(line_col.col))
    }

    /// Returns the byte offset where a line starts.
    pub fn line_start(&self, line: u32) -> Option<ByteOffset> {
        self.line_starts.get(line as usize).copied()
    }

    /// Returns the offsets of every line start strictly inside `(start, end)`.
    pub(crate) fn line_starts_within(
        &self,
        start: ByteOffset,
        end: ByteOffset,
    ) -> impl Iterator<Item = ByteOffset> + '_ {
        let first = match self.line_starts.binary_search(&start) {
            Ok(idx) => idx + 1,
            Err(idx) => idx,
        };
        self.line_starts[first.min(self.line_starts.len())..]
            .iter()
            .copied()
            .take_while(move |&line_start| line_start < end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let index = LineIndex::new("hello world");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(TextSize::from(0)), Some(LineCol::new(0, 0)));
        assert_eq!(index.line_col(TextSize::from(5)), Some(LineCol::new(0, 5)));
        assert_eq!(index.line_col(TextSize::from(12)), None);
    }

    #[test]
    fn test_frontmatter_lines() {
        let index = LineIndex::new("---\nlet a = 1;\n---\n<p/>");
        assert_eq!(index.line_count(), 4);
        assert_eq!(index.line_col(TextSize::from(4)), Some(LineCol::new(1, 0)));
        assert_eq!(index.line_col(TextSize::from(19)), Some(LineCol::new(3, 0)));
    }

    #[test]
    fn test_offset_roundtrip() {
        let text = "<h1>\n{value}\n</h1>";
        let index = LineIndex::new(text);

        for offset in 0..text.len() {
            let offset = TextSize::from(offset as u32);
            let line_col = index.line_col(offset).unwrap();
            assert_eq!(index.offset(line_col), Some(offset));
        }
    }

    #[test]
    fn test_utf16_column() {
        // '丽' is 3 bytes in UTF-8 but a single UTF-16 unit
        let text = "<div 丽x name>";
        let index = LineIndex::new(text);
        let name = text.find("name").unwrap() as u32;
        assert_eq!(name, 10);
        assert_eq!(index.line_col(TextSize::from(name)), Some(LineCol::new(0, 10)));
        assert_eq!(
            index.line_col_utf16(text, TextSize::from(name)),
            Some(LineCol::new(0, 8))
        );
    }

    #[test]
    fn test_line_starts_within() {
        let index = LineIndex::new("a\nb\nc\nd");
        let inner: Vec<_> = index
            .line_starts_within(TextSize::from(0), TextSize::from(5))
            .map(u32::from)
            .collect();
        assert_eq!(inner, vec![2, 4]);

        let from_line_start: Vec<_> = index
            .line_starts_within(TextSize::from(2), TextSize::from(7))
            .map(u32::from)
            .collect();
        assert_eq!(from_line_start, vec![4, 6]);
    }
}
