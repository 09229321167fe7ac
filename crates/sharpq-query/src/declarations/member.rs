use std::fmt;

use serde::Serialize;

use super::attribute::AttributeDecl;
use super::file::SourceFile;
use super::modifiers::{Attributed, Modifiable, Modifiers, Named};
use super::type_decl::TypeDecl;
use crate::error::QueryError;
use crate::parser::CsNode;
use crate::syntax::{self, has_kind, text_of};

/// The four declaration shapes a [`MemberDecl`] can wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Parameter,
    Field,
    Property,
    Enum,
}

impl MemberKind {
    pub const ALL: [Self; 4] = [Self::Parameter, Self::Field, Self::Property, Self::Enum];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parameter => "parameter",
            Self::Field => "field",
            Self::Property => "property",
            Self::Enum => "enum",
        }
    }
}

/// One `name [= value]` entry of an enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValue {
    pub name: String,
    /// Explicit value expression, `None` when implicit.
    pub value: Option<String>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            name: name.into(),
            value: value.map(ToString::to_string),
        }
    }
}

#[derive(Clone)]
enum MemberNode<'f> {
    Parameter(CsNode<'f>),
    /// A field is addressed through one of its declarators, so `int a, b;`
    /// yields two members sharing the same declaration.
    Field {
        declaration: CsNode<'f>,
        declarator: CsNode<'f>,
    },
    Property(CsNode<'f>),
    Enum(CsNode<'f>),
    /// `params T[] name`: the grammar lays the keyword, type and name out as
    /// siblings inside the parameter list, so the keyword is the anchor.
    Params {
        keyword: CsNode<'f>,
        ty: Option<CsNode<'f>>,
        name: Option<CsNode<'f>>,
    },
}

/// A named, typed, optionally defaulted declaration: a field, property,
/// enum declaration or formal parameter.
#[derive(Clone)]
pub struct MemberDecl<'f> {
    file: SourceFile<'f>,
    node: MemberNode<'f>,
}

impl<'f> MemberDecl<'f> {
    /// Wrap a parameter, field, property or enum declaration node.
    ///
    /// A field declaration is addressed through its first declarator; use the
    /// type and file traversals to reach every declarator.
    ///
    /// # Errors
    /// A `params` array parameter is addressed through its `params` keyword.
    ///
    /// # Errors
    /// Returns [`QueryError::UnsupportedOperation`] for any other node kind and
    /// for a field declaration without declarators.
    pub fn new(file: SourceFile<'f>, node: CsNode<'f>) -> Result<Self, QueryError> {
        let member = match node.kind().as_ref() {
            syntax::PARAMETER => MemberNode::Parameter(node),
            syntax::PARAMS_KEYWORD if is_in_parameter_list(&node) => {
                return Ok(Self::params(file, node));
            }
            syntax::PROPERTY => MemberNode::Property(node),
            syntax::ENUM => MemberNode::Enum(node),
            syntax::FIELD => {
                let declarator = declarators(&node).next().ok_or_else(|| {
                    QueryError::UnsupportedOperation {
                        operation: "member",
                        kind: "field without declarators".to_string(),
                    }
                })?;
                MemberNode::Field {
                    declaration: node,
                    declarator,
                }
            }
            other => {
                return Err(QueryError::UnsupportedOperation {
                    operation: "member",
                    kind: other.to_string(),
                });
            }
        };
        Ok(Self { file, node: member })
    }

    /// One member per declarator of a field declaration, in source order.
    pub(crate) fn from_field(
        file: SourceFile<'f>,
        declaration: CsNode<'f>,
    ) -> impl Iterator<Item = Self> + Clone + use<'f> {
        let found: Vec<CsNode<'f>> = declarators(&declaration).collect();
        found.into_iter().map(move |declarator| Self {
            file,
            node: MemberNode::Field {
                declaration: declaration.clone(),
                declarator,
            },
        })
    }

    pub(crate) const fn parameter(file: SourceFile<'f>, node: CsNode<'f>) -> Self {
        Self {
            file,
            node: MemberNode::Parameter(node),
        }
    }

    /// The `params` parameter anchored at `keyword`: the next named sibling is
    /// its type, the one after that its name.
    pub(crate) fn params(file: SourceFile<'f>, keyword: CsNode<'f>) -> Self {
        let (ty, name) = {
            let mut following = keyword.next_all().filter(|sibling| sibling.is_named());
            let ty = following.next();
            let name = following.next().filter(|n| has_kind(n, "identifier"));
            (ty, name)
        };
        Self {
            file,
            node: MemberNode::Params { keyword, ty, name },
        }
    }

    pub(crate) const fn property(file: SourceFile<'f>, node: CsNode<'f>) -> Self {
        Self {
            file,
            node: MemberNode::Property(node),
        }
    }

    pub(crate) const fn enumeration(file: SourceFile<'f>, node: CsNode<'f>) -> Self {
        Self {
            file,
            node: MemberNode::Enum(node),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> MemberKind {
        match self.node {
            MemberNode::Parameter(_) | MemberNode::Params { .. } => MemberKind::Parameter,
            MemberNode::Field { .. } => MemberKind::Field,
            MemberNode::Property(_) => MemberKind::Property,
            MemberNode::Enum(_) => MemberKind::Enum,
        }
    }

    #[must_use]
    pub fn name(&self) -> String {
        let named = match &self.node {
            MemberNode::Params { name, .. } => {
                return name.as_ref().map(text_of).unwrap_or_default();
            }
            MemberNode::Field { declarator, .. } => declarator,
            MemberNode::Parameter(node) | MemberNode::Property(node) | MemberNode::Enum(node) => {
                node
            }
        };
        named
            .field("name")
            .or_else(|| named.children().find(|c| has_kind(c, "identifier")))
            .map(|ident| text_of(&ident))
            .unwrap_or_default()
    }

    /// Declared type as written. An enum declaration reports its own name.
    ///
    /// # Errors
    /// Returns [`QueryError::UnsupportedOperation`] when the declaration has
    /// no written type, such as an implicitly typed lambda parameter.
    pub fn type_name(&self) -> Result<String, QueryError> {
        if let MemberNode::Enum(_) = self.node {
            return Ok(self.name());
        }
        self.type_node()
            .map(|ty| text_of(&ty))
            .ok_or_else(|| QueryError::UnsupportedOperation {
                operation: "type",
                kind: self.kind().as_str().to_string(),
            })
    }

    /// Whether the declared type is nullable (`string?`). Enums never are.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.type_node()
            .is_some_and(|ty| syntax::is_nullable_type(&ty))
    }

    /// Initializer or default value expression, if written.
    #[must_use]
    pub fn default_value(&self) -> Option<String> {
        match &self.node {
            MemberNode::Field { declarator, .. } => syntax::initializer_text(declarator),
            MemberNode::Parameter(node) | MemberNode::Property(node) => {
                syntax::initializer_text(node)
            }
            MemberNode::Enum(_) | MemberNode::Params { .. } => None,
        }
    }

    /// Enum entries in declaration order; empty for every other kind.
    #[must_use]
    pub fn values(&self) -> Vec<EnumValue> {
        let MemberNode::Enum(node) = &self.node else {
            return Vec::new();
        };
        syntax::declaration_body(node)
            .map(|body| {
                body.children()
                    .filter(|child| has_kind(child, "enum_member_declaration"))
                    .map(|entry| EnumValue {
                        name: syntax::field_text(&entry, "name").unwrap_or_else(|| {
                            entry
                                .children()
                                .find(|c| has_kind(c, "identifier"))
                                .map(|ident| text_of(&ident))
                                .unwrap_or_default()
                        }),
                        value: syntax::initializer_text(&entry),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Nearest class, interface, struct or record containing this member.
    #[must_use]
    pub fn enclosing_type(&self) -> Option<TypeDecl<'f>> {
        syntax::ancestor_where(self.declaration(), syntax::is_type_declaration)
            .map(|node| TypeDecl::new(self.file, node))
    }

    #[must_use]
    pub const fn file(&self) -> SourceFile<'f> {
        self.file
    }

    /// The declaration node. For fields this is the whole `field_declaration`,
    /// shared by all of its declarators; for a `params` parameter, its keyword.
    #[must_use]
    pub const fn declaration(&self) -> &CsNode<'f> {
        match &self.node {
            MemberNode::Field { declaration, .. } => declaration,
            MemberNode::Params { keyword, .. } => keyword,
            MemberNode::Parameter(node) | MemberNode::Property(node) | MemberNode::Enum(node) => {
                node
            }
        }
    }

    fn type_node(&self) -> Option<CsNode<'f>> {
        match &self.node {
            MemberNode::Field { declaration, .. } => {
                syntax::child_of_kind(declaration, "variable_declaration")
                    .and_then(|decl| decl.field("type"))
            }
            MemberNode::Params { ty, .. } => ty.clone(),
            MemberNode::Parameter(node) | MemberNode::Property(node) => node.field("type"),
            MemberNode::Enum(_) => None,
        }
    }
}

fn declarators<'f>(declaration: &CsNode<'f>) -> impl Iterator<Item = CsNode<'f>> + use<'f> {
    syntax::child_of_kind(declaration, "variable_declaration")
        .into_iter()
        .flat_map(|decl| {
            decl.children()
                .filter(|child| has_kind(child, "variable_declarator"))
                .collect::<Vec<_>>()
        })
}

fn parameter_modifier_words(node: &CsNode<'_>) -> Vec<String> {
    node.children()
        .filter(|child| has_kind(child, "modifier") || has_kind(child, "parameter_modifier"))
        .map(|child| child.text().to_lowercase())
        .collect()
}

fn is_in_parameter_list(node: &CsNode<'_>) -> bool {
    node.parent()
        .is_some_and(|parent| has_kind(&parent, "parameter_list"))
}

/// Attribute lists written directly before a `params` keyword.
fn leading_attribute_lists<'f>(keyword: &CsNode<'f>) -> Vec<CsNode<'f>> {
    let mut lists: Vec<CsNode<'f>> = keyword
        .prev_all()
        .filter(|sibling| sibling.is_named())
        .take_while(|sibling| has_kind(sibling, "attribute_list"))
        .collect();
    lists.reverse();
    lists
}

impl Named for MemberDecl<'_> {
    fn identifier(&self) -> Option<String> {
        Some(self.name()).filter(|name| !name.is_empty())
    }
}

impl<'f> Attributed<'f> for MemberDecl<'f> {
    fn attributes(&self) -> Vec<AttributeDecl<'f>> {
        let nodes = match &self.node {
            MemberNode::Params { keyword, .. } => leading_attribute_lists(keyword)
                .iter()
                .flat_map(|list| {
                    list.children()
                        .filter(|child| has_kind(child, "attribute"))
                        .collect::<Vec<_>>()
                })
                .collect(),
            _ => syntax::attribute_nodes(self.declaration()),
        };
        nodes.into_iter().map(AttributeDecl::new).collect()
    }
}

impl Modifiable for MemberDecl<'_> {
    fn modifiers(&self) -> Modifiers {
        match &self.node {
            MemberNode::Parameter(node) => Modifiers::parameter(parameter_modifier_words(node)),
            MemberNode::Params { .. } => Modifiers::parameter(vec!["params".to_string()]),
            MemberNode::Field { declaration, .. } => {
                Modifiers::declared(syntax::modifier_words(declaration))
            }
            MemberNode::Property(node) | MemberNode::Enum(node) => {
                Modifiers::declared(syntax::modifier_words(node))
            }
        }
    }
}

impl fmt::Debug for MemberDecl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDecl")
            .field("kind", &self.kind())
            .field("name", &self.name())
            .field("type", &self.type_name().ok())
            .field("file", &self.file.file_path())
            .finish()
    }
}

impl fmt::Display for MemberDecl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_name() {
            Ok(ty) if self.kind() != MemberKind::Enum => write!(f, "{ty} {}", self.name()),
            _ => f.write_str(&self.name()),
        }
    }
}
