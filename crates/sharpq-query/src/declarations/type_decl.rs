use std::fmt;

use serde::Serialize;

use super::Depth;
use super::attribute::AttributeDecl;
use super::file::SourceFile;
use super::member::MemberDecl;
use super::method::MethodDecl;
use super::modifiers::{Attributed, Modifiable, Modifiers, Named};
use crate::parser::CsNode;
use crate::syntax::{self, NodeWalk, has_kind, text_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    /// `record`, `record class` and `record struct`.
    Record,
}

impl TypeKind {
    pub(crate) fn of_kind(kind: &str) -> Option<Self> {
        match kind {
            syntax::CLASS => Some(Self::Class),
            syntax::INTERFACE => Some(Self::Interface),
            syntax::STRUCT => Some(Self::Struct),
            syntax::RECORD | syntax::RECORD_STRUCT => Some(Self::Record),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Struct => "struct",
            Self::Record => "record",
        }
    }
}

/// A class, interface, struct or record declaration.
///
/// Every nested accessor takes a [`Depth`]: `Shallow` yields direct members of
/// the declaration body, `Deep` yields matches at any nesting level, so the
/// deep result always contains the shallow one.
#[derive(Clone)]
pub struct TypeDecl<'f> {
    file: SourceFile<'f>,
    node: CsNode<'f>,
}

impl<'f> TypeDecl<'f> {
    pub(crate) const fn new(file: SourceFile<'f>, node: CsNode<'f>) -> Self {
        Self { file, node }
    }

    #[must_use]
    pub fn name(&self) -> String {
        syntax::field_text(&self.node, "name").unwrap_or_default()
    }

    #[must_use]
    pub fn kind(&self) -> TypeKind {
        TypeKind::of_kind(self.node.kind().as_ref()).unwrap_or(TypeKind::Class)
    }

    /// Base class and interface names as written; never resolved.
    #[must_use]
    pub fn base_types(&self) -> Vec<String> {
        syntax::base_type_names(&self.node)
    }

    /// Case-insensitive textual match against [`base_types`](Self::base_types).
    #[must_use]
    pub fn has_base_type(&self, name: &str) -> bool {
        self.base_types()
            .iter()
            .any(|base| base.eq_ignore_ascii_case(name.trim()))
    }

    /// The `<T, U>` list, if the type is generic.
    #[must_use]
    pub fn type_parameters(&self) -> Option<String> {
        self.node
            .field("type_parameters")
            .or_else(|| syntax::child_of_kind(&self.node, "type_parameter_list"))
            .map(|list| text_of(&list))
    }

    #[must_use]
    pub fn enclosing_type(&self) -> Option<Self> {
        syntax::ancestor_where(&self.node, syntax::is_type_declaration)
            .map(|node| Self::new(self.file, node))
    }

    #[must_use]
    pub const fn file(&self) -> SourceFile<'f> {
        self.file
    }

    #[must_use]
    pub const fn node(&self) -> &CsNode<'f> {
        &self.node
    }

    fn walk(&self, depth: Depth) -> NodeWalk<'f> {
        match depth {
            Depth::Shallow => NodeWalk::children(syntax::declaration_body(&self.node)),
            Depth::Deep => NodeWalk::descendants(self.node.clone()),
        }
    }

    pub fn types(&self, depth: Depth) -> impl Iterator<Item = Self> + Clone + use<'f> {
        let file = self.file;
        self.walk(depth)
            .filter(|node| syntax::is_type_declaration(node.kind().as_ref()))
            .map(move |node| Self::new(file, node))
    }

    pub fn classes(&self, depth: Depth) -> impl Iterator<Item = Self> + Clone + use<'f> {
        self.types(depth).filter(|ty| ty.kind() == TypeKind::Class)
    }

    pub fn interfaces(&self, depth: Depth) -> impl Iterator<Item = Self> + Clone + use<'f> {
        self.types(depth).filter(|ty| ty.kind() == TypeKind::Interface)
    }

    pub fn structs(&self, depth: Depth) -> impl Iterator<Item = Self> + Clone + use<'f> {
        self.types(depth).filter(|ty| ty.kind() == TypeKind::Struct)
    }

    pub fn records(&self, depth: Depth) -> impl Iterator<Item = Self> + Clone + use<'f> {
        self.types(depth).filter(|ty| ty.kind() == TypeKind::Record)
    }

    pub fn enums(&self, depth: Depth) -> impl Iterator<Item = MemberDecl<'f>> + Clone + use<'f> {
        let file = self.file;
        self.walk(depth)
            .filter(|node| has_kind(node, syntax::ENUM))
            .map(move |node| MemberDecl::enumeration(file, node))
    }

    pub fn constructors(
        &self,
        depth: Depth,
    ) -> impl Iterator<Item = MethodDecl<'f>> + Clone + use<'f> {
        let file = self.file;
        self.walk(depth)
            .filter(|node| has_kind(node, syntax::CONSTRUCTOR))
            .map(move |node| MethodDecl::new(file, node))
    }

    pub fn methods(&self, depth: Depth) -> impl Iterator<Item = MethodDecl<'f>> + Clone + use<'f> {
        let file = self.file;
        self.walk(depth)
            .filter(|node| has_kind(node, syntax::METHOD))
            .map(move |node| MethodDecl::new(file, node))
    }

    /// Methods and constructors in source order.
    pub fn callables(
        &self,
        depth: Depth,
    ) -> impl Iterator<Item = MethodDecl<'f>> + Clone + use<'f> {
        let file = self.file;
        self.walk(depth)
            .filter(|node| has_kind(node, syntax::METHOD) || has_kind(node, syntax::CONSTRUCTOR))
            .map(move |node| MethodDecl::new(file, node))
    }

    /// One member per field declarator: `int a, b;` yields `a` and `b`.
    pub fn fields(&self, depth: Depth) -> impl Iterator<Item = MemberDecl<'f>> + Clone + use<'f> {
        let file = self.file;
        self.walk(depth)
            .filter(|node| has_kind(node, syntax::FIELD))
            .flat_map(move |node| MemberDecl::from_field(file, node))
    }

    pub fn properties(
        &self,
        depth: Depth,
    ) -> impl Iterator<Item = MemberDecl<'f>> + Clone + use<'f> {
        let file = self.file;
        self.walk(depth)
            .filter(|node| has_kind(node, syntax::PROPERTY))
            .map(move |node| MemberDecl::property(file, node))
    }

    /// Fields and properties in source order.
    pub fn members(&self, depth: Depth) -> impl Iterator<Item = MemberDecl<'f>> + Clone + use<'f> {
        let file = self.file;
        self.walk(depth)
            .filter(|node| has_kind(node, syntax::FIELD) || has_kind(node, syntax::PROPERTY))
            .flat_map(move |node| {
                if has_kind(&node, syntax::FIELD) {
                    MemberDecl::from_field(file, node).collect::<Vec<_>>()
                } else {
                    vec![MemberDecl::property(file, node)]
                }
            })
    }
}

impl Named for TypeDecl<'_> {
    fn identifier(&self) -> Option<String> {
        syntax::field_text(&self.node, "name")
    }
}

impl<'f> Attributed<'f> for TypeDecl<'f> {
    fn attributes(&self) -> Vec<AttributeDecl<'f>> {
        syntax::attribute_nodes(&self.node)
            .into_iter()
            .map(AttributeDecl::new)
            .collect()
    }
}

impl Modifiable for TypeDecl<'_> {
    fn modifiers(&self) -> Modifiers {
        Modifiers::declared(syntax::modifier_words(&self.node))
    }
}

impl fmt::Debug for TypeDecl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDecl")
            .field("kind", &self.kind())
            .field("name", &self.name())
            .field("file", &self.file.file_path())
            .finish()
    }
}

impl fmt::Display for TypeDecl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
