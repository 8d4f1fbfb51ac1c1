//! Location values attached to diagnostic findings.
//!
//! A [`Location`] is a self-contained snapshot of "where in the source" a
//! finding points: a 1-based line/column pair, a character-offset range,
//! the originating file path, and a best-effort display snippet. It holds
//! no reference back to the syntax tree it was derived from, so findings
//! can outlive the parse.
//!
//! Resolution never fails. A position the line index cannot resolve comes
//! back as the [`SourceLocation::UNKNOWN`] sentinel `(-1, -1)`; consumers
//! that sort or group findings by position must treat the sentinel as a
//! distinct "unknown position" case.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::base::TextRange;

mod resolve;


/// Line and column of a finding, both 1-based.
///
/// `(-1, -1)` signals a position that could not be determined. The two
/// axes fail together: a resolver never produces a value with only one
/// axis negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceLocation {
    pub line: i32,
    pub column: i32,
}

impl SourceLocation {
    /// Sentinel for an unresolvable position.
    pub const UNKNOWN: SourceLocation = SourceLocation {
        line: -1,
        column: -1,
    };

    pub fn new(line: i32, column: i32) -> Self {
        Self { line, column }
    }

    /// True unless this is the `(-1, -1)` sentinel.
    pub fn is_known(&self) -> bool {
        *self != Self::UNKNOWN
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Character start and end offsets of a finding within its file's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextLocation {
    pub start: u32,
    pub end: u32,
}

impl TextLocation {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

impl From<TextRange> for TextLocation {
    fn from(range: TextRange) -> Self {
        Self {
            start: range.start().into(),
            end: range.end().into(),
        }
    }
}

/// Position of a diagnostic finding within a source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// 1-based line/column, or [`SourceLocation::UNKNOWN`].
    pub source: SourceLocation,
    /// Character-offset range of the located node.
    pub text: TextLocation,
    /// Human-readable description of the located node.
    ///
    /// Legacy field kept for backward-compatible display output only.
    /// Carries no behavioral contract; downstream logic must not branch
    /// on its content.
    pub display_text: String,
    /// Reported file path. For nodes in derived (generated/transformed)
    /// files this is the original file's name, not the synthetic one the
    /// node's offsets are measured against.
    pub file_path: String,
}

impl Location {
    /// Compact single-line rendering: `"{file_path}:{line}:{column}"`.
    pub fn compact(&self) -> String {
        format!("{}:{}", self.file_path, self.source)
    }
}
