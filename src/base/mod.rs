//! Foundation types for the Sift toolchain.
//!
//! This module provides the primitives location resolution is built on:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`], [`OutOfRange`] - Line/column conversion
//!
//! This module has NO dependencies on other sift modules.

mod line_index;

pub use line_index::{LineCol, LineIndex, OutOfRange};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
