use std::fmt;
use std::path::Path;

use super::Depth;
use super::member::MemberDecl;
use super::type_decl::{TypeDecl, TypeKind};
use crate::forest::ParsedFile;
use crate::parser::CsNode;
use crate::query::path::relative_file_path;
use crate::syntax::{self, NodeWalk, has_kind};

/// One parsed translation unit, anchored at the project entry path.
///
/// Holds only references into the forest, so it is `Copy` and every
/// declaration derived from it borrows the same forest.
#[derive(Clone, Copy)]
pub struct SourceFile<'f> {
    parsed: &'f ParsedFile,
    entry_path: &'f Path,
}

impl<'f> SourceFile<'f> {
    #[must_use]
    pub const fn new(parsed: &'f ParsedFile, entry_path: &'f Path) -> Self {
        Self { parsed, entry_path }
    }

    /// Imported namespaces and types in source order. Aliases report their
    /// target, static imports the imported type.
    pub fn usings(self) -> impl Iterator<Item = String> + Clone + use<'f> {
        self.top_level()
            .filter(|node| has_kind(node, syntax::USING))
            .filter_map(|node| syntax::using_target(&node))
    }

    /// Declared namespace names in source order, block and file-scoped alike.
    pub fn namespaces(self) -> impl Iterator<Item = String> + Clone + use<'f> {
        self.top_level()
            .filter(|node| {
                has_kind(node, syntax::NAMESPACE) || has_kind(node, syntax::FILE_SCOPED_NAMESPACE)
            })
            .filter_map(|node| syntax::field_text(&node, "name"))
    }

    /// Types outside any other type, global namespace included (`Shallow`), or
    /// every type in the file (`Deep`).
    pub fn types(self, depth: Depth) -> impl Iterator<Item = TypeDecl<'f>> + Clone + use<'f> {
        self.walk(depth)
            .filter(|node| syntax::is_type_declaration(node.kind().as_ref()))
            .map(move |node| TypeDecl::new(self, node))
    }

    pub fn classes(self, depth: Depth) -> impl Iterator<Item = TypeDecl<'f>> + Clone + use<'f> {
        self.types(depth).filter(|ty| ty.kind() == TypeKind::Class)
    }

    pub fn interfaces(
        self,
        depth: Depth,
    ) -> impl Iterator<Item = TypeDecl<'f>> + Clone + use<'f> {
        self.types(depth).filter(|ty| ty.kind() == TypeKind::Interface)
    }

    pub fn structs(self, depth: Depth) -> impl Iterator<Item = TypeDecl<'f>> + Clone + use<'f> {
        self.types(depth).filter(|ty| ty.kind() == TypeKind::Struct)
    }

    pub fn records(self, depth: Depth) -> impl Iterator<Item = TypeDecl<'f>> + Clone + use<'f> {
        self.types(depth).filter(|ty| ty.kind() == TypeKind::Record)
    }

    /// Enum declarations outside any type (`Shallow`), or all of them (`Deep`).
    pub fn enums(self, depth: Depth) -> impl Iterator<Item = MemberDecl<'f>> + Clone + use<'f> {
        self.walk(depth)
            .filter(|node| has_kind(node, syntax::ENUM))
            .map(move |node| MemberDecl::enumeration(self, node))
    }

    #[must_use]
    pub fn source(self) -> &'f str {
        &self.parsed.source
    }

    #[must_use]
    pub fn path(self) -> &'f Path {
        &self.parsed.path
    }

    #[must_use]
    pub const fn entry_path(self) -> &'f Path {
        self.entry_path
    }

    #[must_use]
    pub fn file_name(self) -> String {
        self.parsed
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Path relative to the entry path, `/`-separated and prefixed with `./`
    /// on every host: `./Social/ClientA.cs`.
    #[must_use]
    pub fn file_path(self) -> String {
        relative_file_path(self.entry_path, &self.parsed.path)
    }

    #[must_use]
    pub fn root(self) -> CsNode<'f> {
        self.parsed.tree.root()
    }

    fn top_level(self) -> NodeWalk<'f> {
        NodeWalk::descendants_until(self.root(), syntax::is_type_scope)
    }

    fn walk(self, depth: Depth) -> NodeWalk<'f> {
        match depth {
            Depth::Shallow => self.top_level(),
            Depth::Deep => NodeWalk::descendants(self.root()),
        }
    }
}

impl fmt::Debug for SourceFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("file_path", &self.file_path())
            .finish()
    }
}

impl fmt::Display for SourceFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}
