//! # sift-base
//!
//! Core library for source location resolution in the Sift static analyzer.
//!
//! Every finding Sift reports carries a [`Location`]: a self-contained,
//! serializable "where in the source" snapshot holding a line/column
//! position, a character-offset range, the originating file path, and a
//! best-effort display snippet. This crate owns that resolution logic and
//! the handful of foundation types it needs.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! location  → Location values and node → Location resolution
//!   ↓
//! syntax    → Node/file pairing, declared-name search over rowan trees
//!   ↓
//! source    → Parsed-file handles (incl. derived/in-memory files)
//!   ↓
//! base      → Primitives (LineIndex, LineCol, TextRange)
//! ```

/// Foundation types: LineIndex, LineCol, text offsets
pub mod base;

/// Location values attached to findings, and their resolution
pub mod location;

/// Parsed-file handles consumed by location resolution
pub mod source;

/// Syntax-tree access: file/node pairing and declared-name search
pub mod syntax;

// Re-export foundation types
pub use base::{LineCol, LineIndex, OutOfRange, TextRange, TextSize};
pub use location::{Location, SourceLocation, TextLocation};
pub use source::SourceFile;
pub use syntax::{InFile, NamedLanguage, search_name};
