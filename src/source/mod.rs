//! Parsed-file handles consumed by location resolution.
//!
//! A [`SourceFile`] is the immutable handle a syntax tree hangs off: the
//! file's name, its text, and a prebuilt [`LineIndex`] over that text.
//!
//! Generated or transformed sources (expanded templates, in-memory
//! rewrites) are represented by *derived* handles, which additionally
//! record the name of the original file they were produced from. Whether a
//! handle is derived is a capability query ([`SourceFile::original_name`]),
//! not a type test.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::LineIndex;

/// A handle to the text a syntax tree was parsed from.
///
/// Handles are immutable and cheap to clone; the text is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: SmolStr,
    text: Arc<str>,
    line_index: LineIndex,
    /// Name of the original file, present only for derived handles.
    origin: Option<SmolStr>,
}

impl SourceFile {
    /// Create a handle for an ordinary on-disk file.
    pub fn new(name: impl Into<SmolStr>, text: &str) -> Self {
        Self {
            name: name.into(),
            text: Arc::from(text),
            line_index: LineIndex::new(text),
            origin: None,
        }
    }

    /// Create a derived handle for generated or transformed source text,
    /// recording the name of the file it was produced from.
    pub fn derived(
        name: impl Into<SmolStr>,
        text: &str,
        original: impl Into<SmolStr>,
    ) -> Self {
        Self {
            name: name.into(),
            text: Arc::from(text),
            line_index: LineIndex::new(text),
            origin: Some(original.into()),
        }
    }

    /// The file's own name. For derived handles this is the synthetic name,
    /// not the name diagnostics should report.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line index over this file's text.
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Name of the original file this handle was derived from.
    ///
    /// `None` for ordinary files, which is the common case.
    pub fn original_name(&self) -> Option<&str> {
        self.origin.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_file_has_no_origin() {
        let file = SourceFile::new("Sample.sysml", "part def Engine;");
        assert_eq!(file.name(), "Sample.sysml");
        assert_eq!(file.original_name(), None);
        assert_eq!(file.text(), "part def Engine;");
    }

    #[test]
    fn derived_file_records_origin() {
        let file = SourceFile::derived("expanded-0001.sysml", "part e;", "Engine.sysml");
        assert_eq!(file.name(), "expanded-0001.sysml");
        assert_eq!(file.original_name(), Some("Engine.sysml"));
    }

    #[test]
    fn clones_share_text() {
        let file = SourceFile::new("a.sysml", "part def A;");
        let clone = file.clone();
        assert_eq!(file, clone);
        assert!(std::ptr::eq(file.text(), clone.text()));
    }
}
