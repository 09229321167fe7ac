use std::fmt;

use serde::Serialize;

use super::attribute::AttributeDecl;
use super::file::SourceFile;
use super::member::MemberDecl;
use super::modifiers::{Attributed, Modifiable, Modifiers, Named};
use super::type_decl::TypeDecl;
use crate::error::QueryError;
use crate::parser::CsNode;
use crate::syntax::{self, NodeWalk, has_kind, text_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    Method,
    Constructor,
    LocalFunction,
}

impl MethodKind {
    fn of(node: &CsNode<'_>) -> Option<Self> {
        match node.kind().as_ref() {
            syntax::METHOD => Some(Self::Method),
            syntax::CONSTRUCTOR => Some(Self::Constructor),
            syntax::LOCAL_FUNCTION => Some(Self::LocalFunction),
            _ => None,
        }
    }
}

pub(crate) fn is_callable(kind: &str) -> bool {
    matches!(
        kind,
        syntax::METHOD | syntax::CONSTRUCTOR | syntax::LOCAL_FUNCTION
    )
}

/// The declaration a method is nested in.
#[derive(Debug, Clone)]
pub enum MethodParent<'f> {
    Type(TypeDecl<'f>),
    /// Local functions live inside another callable.
    Method(MethodDecl<'f>),
}

/// A method, constructor or local function.
#[derive(Clone)]
pub struct MethodDecl<'f> {
    file: SourceFile<'f>,
    node: CsNode<'f>,
}

impl<'f> MethodDecl<'f> {
    /// Wrap a callable node. The node kind is checked lazily: accessors on a
    /// non-callable node report [`QueryError::MissingIdentifier`].
    #[must_use]
    pub const fn new(file: SourceFile<'f>, node: CsNode<'f>) -> Self {
        Self { file, node }
    }

    #[must_use]
    pub fn kind(&self) -> Option<MethodKind> {
        MethodKind::of(&self.node)
    }

    /// # Errors
    /// Returns [`QueryError::MissingIdentifier`] if the node is not a named
    /// method, constructor or local function.
    pub fn name(&self) -> Result<String, QueryError> {
        let missing = || QueryError::MissingIdentifier {
            kind: self.node.kind().to_string(),
        };
        if self.kind().is_none() {
            return Err(missing());
        }
        syntax::field_text(&self.node, "name").ok_or_else(missing)
    }

    /// Return type as written; constructors report `"void"`.
    #[must_use]
    pub fn return_type(&self) -> String {
        match self.return_type_node() {
            Some(ty) => text_of(&ty),
            None => "void".to_string(),
        }
    }

    /// Whether the return type is nullable. Always `false` for constructors.
    #[must_use]
    pub fn return_type_is_nullable(&self) -> bool {
        self.return_type_node()
            .is_some_and(|ty| syntax::is_nullable_type(&ty))
    }

    /// Formal parameters in declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = MemberDecl<'f>> + Clone + use<'f> {
        let file = self.file;
        let list = self
            .node
            .field("parameters")
            .or_else(|| syntax::child_of_kind(&self.node, "parameter_list"));
        NodeWalk::children(list).filter_map(move |node| {
            if has_kind(&node, syntax::PARAMETER) {
                Some(MemberDecl::parameter(file, node))
            } else if has_kind(&node, syntax::PARAMS_KEYWORD) {
                Some(MemberDecl::params(file, node))
            } else {
                None
            }
        })
    }

    /// Body source: a `{ ... }` block, or the `=> expr` clause of an
    /// expression-bodied member.
    ///
    /// # Errors
    /// Returns [`QueryError::MissingBody`] for abstract, interface, extern and
    /// partial declarations without a body.
    pub fn body(&self) -> Result<String, QueryError> {
        syntax::callable_body(&self.node)
            .map(|body| text_of(&body))
            .ok_or_else(|| QueryError::MissingBody {
                method: self.name().unwrap_or_else(|_| self.node.kind().to_string()),
            })
    }

    #[must_use]
    pub fn has_body(&self) -> bool {
        syntax::callable_body(&self.node).is_some()
    }

    /// Declaration header without attributes or body, whitespace-normalised:
    /// `public async Task<string?> GetFoo(int id, string? filter = null)`.
    #[must_use]
    pub fn signature(&self) -> String {
        let full = self.node.text();
        let text: &str = &full;
        let origin = self.node.range().start;
        let start = self
            .node
            .children()
            .find(|child| !has_kind(child, "attribute_list") && !has_kind(child, "comment"))
            .map_or(0, |child| child.range().start - origin);
        let end = syntax::callable_body(&self.node)
            .map_or(text.len(), |body| body.range().start - origin);
        let header = text.get(start..end).unwrap_or(text);
        syntax::normalize_whitespace(header.trim_end().trim_end_matches(';'))
    }

    /// The type or callable this declaration is nested in.
    #[must_use]
    pub fn parent(&self) -> Option<MethodParent<'f>> {
        let file = self.file;
        syntax::ancestor_where(&self.node, |kind| {
            syntax::is_type_declaration(kind) || is_callable(kind)
        })
        .map(|node| {
            if is_callable(node.kind().as_ref()) {
                MethodParent::Method(Self::new(file, node))
            } else {
                MethodParent::Type(TypeDecl::new(file, node))
            }
        })
    }

    /// Nearest enclosing class, interface, struct or record.
    #[must_use]
    pub fn enclosing_type(&self) -> Option<TypeDecl<'f>> {
        syntax::ancestor_where(&self.node, syntax::is_type_declaration)
            .map(|node| TypeDecl::new(self.file, node))
    }

    /// Local functions declared directly in this body (not inside another
    /// local function).
    pub fn local_functions(&self) -> impl Iterator<Item = Self> + Clone + use<'f> {
        let file = self.file;
        let walk = match syntax::callable_body(&self.node) {
            Some(body) => NodeWalk::descendants_until(body, is_callable),
            None => NodeWalk::children(None),
        };
        walk.filter(|node| has_kind(node, syntax::LOCAL_FUNCTION))
            .map(move |node| Self::new(file, node))
    }

    #[must_use]
    pub const fn file(&self) -> SourceFile<'f> {
        self.file
    }

    #[must_use]
    pub const fn node(&self) -> &CsNode<'f> {
        &self.node
    }

    fn return_type_node(&self) -> Option<CsNode<'f>> {
        match self.kind() {
            Some(MethodKind::Constructor) => None,
            _ => self
                .node
                .field("returns")
                .or_else(|| self.node.field("type")),
        }
    }
}

impl Named for MethodDecl<'_> {
    fn identifier(&self) -> Option<String> {
        self.name().ok()
    }
}

impl<'f> Attributed<'f> for MethodDecl<'f> {
    fn attributes(&self) -> Vec<AttributeDecl<'f>> {
        syntax::attribute_nodes(&self.node)
            .into_iter()
            .map(AttributeDecl::new)
            .collect()
    }
}

impl Modifiable for MethodDecl<'_> {
    fn modifiers(&self) -> Modifiers {
        Modifiers::declared(syntax::modifier_words(&self.node))
    }
}

impl fmt::Debug for MethodDecl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDecl")
            .field("kind", &self.kind())
            .field("name", &self.name().ok())
            .field("file", &self.file.file_path())
            .finish()
    }
}

impl fmt::Display for MethodDecl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}
