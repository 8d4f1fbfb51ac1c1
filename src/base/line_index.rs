//! Line/column conversion for byte offsets.
//!
//! A [`LineIndex`] records where each line of a text starts, so that byte
//! offsets (and the text ranges of syntax nodes) can be rendered as
//! line/column pairs in diagnostics. Queries return an explicit
//! [`OutOfRange`] error instead of panicking: callers that only want a
//! best-effort position fold it into a sentinel.

use text_size::{TextRange, TextSize};
use thiserror::Error;

/// A zero-based line/column pair.
///
/// Zero-based to match LSP conventions; the report-facing 1-based form
/// lives in [`crate::location::SourceLocation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// A queried offset lies past the end of the indexed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("offset {offset:?} is past the end of the indexed text (length {len:?})")]
pub struct OutOfRange {
    /// The offending offset.
    pub offset: TextSize,
    /// Total length of the indexed text.
    pub len: TextSize,
}

/// Maps byte offsets in a fixed text to line/column pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Starting offset of each line, always beginning with 0.
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(i as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Length of the indexed text.
    pub fn len(&self) -> TextSize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == TextSize::new(0)
    }

    /// Convert an offset into a zero-based line/column pair.
    ///
    /// An offset equal to the text length is valid (caret at end of file);
    /// anything beyond it is [`OutOfRange`].
    pub fn line_col(&self, offset: TextSize) -> Result<LineCol, OutOfRange> {
        if offset > self.len {
            return Err(OutOfRange {
                offset,
                len: self.len,
            });
        }
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let col = offset - self.line_starts[line];
        Ok(LineCol {
            line: line as u32,
            col: col.into(),
        })
    }

    /// Line/column of the start of `range`, validating the whole range.
    ///
    /// The end offset participates in validation only: a range whose end
    /// reads past the indexed text is rejected as a whole, matching
    /// diagnostic renderers that slice the underlying text by the range.
    pub fn line_col_of_range(&self, range: TextRange) -> Result<LineCol, OutOfRange> {
        if range.end() > self.len {
            return Err(OutOfRange {
                offset: range.end(),
                len: self.len,
            });
        }
        self.line_col(range.start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text() {
        let index = LineIndex::new("");
        assert!(index.is_empty());
        assert_eq!(
            index.line_col(TextSize::new(0)),
            Ok(LineCol { line: 0, col: 0 })
        );
        assert!(index.line_col(TextSize::new(1)).is_err());
    }

    #[test]
    fn single_line() {
        let index = LineIndex::new("hello");
        assert_eq!(
            index.line_col(TextSize::new(3)),
            Ok(LineCol { line: 0, col: 3 })
        );
        // Caret position at end of file is valid
        assert_eq!(
            index.line_col(TextSize::new(5)),
            Ok(LineCol { line: 0, col: 5 })
        );
    }

    #[test]
    fn multi_line() {
        let index = LineIndex::new("part def A;\npart def B;\n");
        assert_eq!(
            index.line_col(TextSize::new(0)),
            Ok(LineCol { line: 0, col: 0 })
        );
        assert_eq!(
            index.line_col(TextSize::new(11)),
            Ok(LineCol { line: 0, col: 11 })
        );
        // First char after the newline starts line 1
        assert_eq!(
            index.line_col(TextSize::new(12)),
            Ok(LineCol { line: 1, col: 0 })
        );
        assert_eq!(
            index.line_col(TextSize::new(17)),
            Ok(LineCol { line: 1, col: 5 })
        );
        // Offset right after the trailing newline is the start of line 2
        assert_eq!(
            index.line_col(TextSize::new(24)),
            Ok(LineCol { line: 2, col: 0 })
        );
    }

    #[test]
    fn out_of_range_offset() {
        let index = LineIndex::new("ab");
        let err = index.line_col(TextSize::new(3)).unwrap_err();
        assert_eq!(err.offset, TextSize::new(3));
        assert_eq!(err.len, TextSize::new(2));
    }

    #[test]
    fn range_validates_end() {
        let index = LineIndex::new("{ }");
        // Start is in range but the end reads past the text: rejected whole
        let range = TextRange::new(TextSize::new(2), TextSize::new(4));
        assert!(index.line_col_of_range(range).is_err());

        let ok = TextRange::new(TextSize::new(2), TextSize::new(3));
        assert_eq!(
            index.line_col_of_range(ok),
            Ok(LineCol { line: 0, col: 2 })
        );
    }
}
