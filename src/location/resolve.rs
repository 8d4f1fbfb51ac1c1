//! Resolution of syntax nodes into [`Location`] values.

use rowan::{TextRange, TextSize};
use tracing::trace;

use crate::syntax::{InFile, NamedLanguage, search_name};

use super::{Location, SourceLocation};

impl Location {
    /// Resolve `node` into a location snapshot.
    ///
    /// Total: every failure mode folds into a fallback value. A range the
    /// file's line index cannot resolve yields the
    /// [`SourceLocation::UNKNOWN`] sentinel; a node with no declared name
    /// falls back to a generic text rendering.
    pub fn of<L: NamedLanguage>(node: &InFile<'_, L>) -> Location {
        Self::of_offset(node, TextSize::new(0))
    }

    /// Resolve `node` with both character offsets shifted by `offset`.
    ///
    /// The shift applies to the stored text range and to the line/column
    /// query alike; it is used when a node's offsets are measured against
    /// an enclosing fragment rather than the file itself.
    pub fn of_offset<L: NamedLanguage>(node: &InFile<'_, L>, offset: TextSize) -> Location {
        let range = node.node.text_range();
        let shifted = TextRange::new(range.start() + offset, range.end() + offset);
        Location {
            source: start_line_and_column(node, shifted),
            text: shifted.into(),
            display_text: display_text(node),
            file_path: resolved_file_path(node),
        }
    }
}

/// Line/column of the start of `range`, 1-based, or the sentinel when the
/// query reads past the file's line index.
///
/// Trailing closing-brace leaves can carry a range that ends one past the
/// indexed text; that is an expected condition and is the only one
/// recovered here.
fn start_line_and_column<L: NamedLanguage>(
    node: &InFile<'_, L>,
    range: TextRange,
) -> SourceLocation {
    match node.file.line_index().line_col_of_range(range) {
        Ok(pos) => SourceLocation::new(pos.line as i32 + 1, pos.col as i32 + 1),
        Err(err) => {
            trace!(
                file = node.file.name(),
                %err,
                "line/column lookup failed, falling back to sentinel"
            );
            SourceLocation::UNKNOWN
        }
    }
}

/// The file path findings should report: the original file's name when the
/// containing file is a derived handle, its own name otherwise.
fn resolved_file_path<L: NamedLanguage>(node: &InFile<'_, L>) -> String {
    node.file
        .original_name()
        .unwrap_or_else(|| node.file.name())
        .to_string()
}

/// Best-effort description of `node`: the closest declared name when one
/// is in scope, otherwise the node's own text with a range annotation.
/// Both stages are total; the second works for anonymous nodes too.
fn display_text<L: NamedLanguage>(node: &InFile<'_, L>) -> String {
    match search_name(&node.node) {
        Some(name) => name.to_string(),
        None => text_with_range(node),
    }
}

fn text_with_range<L: NamedLanguage>(node: &InFile<'_, L>) -> String {
    let range = node.node.text_range();
    format!(
        "'{}' at {}..{}",
        node.node.text(),
        u32::from(range.start()),
        u32::from(range.end()),
    )
}
