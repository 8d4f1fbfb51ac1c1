//! Syntax-tree access for location resolution.
//!
//! Sift language crates build rowan CSTs; this module defines the minimal
//! surface location resolution needs on top of them:
//! - [`NamedLanguage`] - per-language capability to recognize name tokens
//!   and named declaration nodes
//! - [`InFile`] - a node paired with the [`SourceFile`] it was parsed from
//! - [`search_name`] - closest declared name for a node, used as the
//!   primary display snippet

use rowan::{Language, SyntaxNode};
use smol_str::SmolStr;

use crate::source::SourceFile;

/// Language capabilities needed to look up declared names.
///
/// Implemented by each language crate for its [`rowan::Language`] type.
pub trait NamedLanguage: Language {
    /// Is `kind` a token that carries a declared name (an identifier in
    /// name position)?
    fn is_name_token(kind: Self::Kind) -> bool;

    /// Is `kind` a node that introduces a named declaration?
    fn is_named_node(kind: Self::Kind) -> bool;
}

/// A syntax node paired with the file it was parsed from.
///
/// Rowan nodes carry no file identity of their own; resolution needs the
/// pairing to reach the file's line index and reported name.
#[derive(Debug, Clone)]
pub struct InFile<'a, L: Language> {
    pub file: &'a SourceFile,
    pub node: SyntaxNode<L>,
}

impl<'a, L: Language> InFile<'a, L> {
    pub fn new(file: &'a SourceFile, node: SyntaxNode<L>) -> Self {
        Self { file, node }
    }
}

/// Find the declared name associated with `node`.
///
/// Walks the node and its ancestors to the closest named declaration and
/// returns the text of its name token. `None` when no enclosing
/// declaration exists or the declaration is anonymous; absence is an
/// expected outcome, not an error.
pub fn search_name<L: NamedLanguage>(node: &SyntaxNode<L>) -> Option<SmolStr> {
    node.ancestors()
        .find(|ancestor| L::is_named_node(ancestor.kind()))
        .and_then(|declaration| name_token_text(&declaration))
}

/// Text of the first name token directly under `node`.
fn name_token_text<L: NamedLanguage>(node: &SyntaxNode<L>) -> Option<SmolStr> {
    node.children_with_tokens()
        .filter_map(|element| element.into_token())
        .find(|token| L::is_name_token(token.kind()))
        .map(|token| SmolStr::new(token.text()))
}
