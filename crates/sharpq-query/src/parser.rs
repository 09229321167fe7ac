//! ast-grep wrapper for C# sources.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::{LanguageExt, SupportLang};

/// The concrete AST tree type returned by [`parse_source`].
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// A handle to one node inside an [`AstTree`].
pub type CsNode<'r> = ast_grep_core::Node<'r, StrDoc<SupportLang>>;

/// Whether `path` names a C# source or script file.
#[must_use]
pub fn is_csharp_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("cs") || ext.eq_ignore_ascii_case("csx"))
}

/// Parse C# source text into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    SupportLang::CSharp.ast_grep(source)
}
