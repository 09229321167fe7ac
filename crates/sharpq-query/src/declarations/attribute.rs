use std::fmt;

use crate::parser::CsNode;
use crate::syntax::{self, has_kind, text_of};

/// One `[Name(args)]` annotation.
#[derive(Clone)]
pub struct AttributeDecl<'f> {
    node: CsNode<'f>,
}

impl<'f> AttributeDecl<'f> {
    pub(crate) const fn new(node: CsNode<'f>) -> Self {
        Self { node }
    }

    /// The name exactly as written, qualifier included (`System.Obsolete`).
    #[must_use]
    pub fn name(&self) -> String {
        self.node
            .field("name")
            .map(|name| text_of(&name))
            .unwrap_or_else(|| {
                let text = text_of(&self.node);
                text.split('(').next().unwrap_or_default().trim().to_string()
            })
    }

    /// The last segment of [`name`](Self::name): `System.Obsolete` becomes `Obsolete`.
    #[must_use]
    pub fn short_name(&self) -> String {
        let name = self.name();
        let tail = name.rsplit("::").next().unwrap_or(&name);
        let tail = tail.rsplit('.').next().unwrap_or(tail);
        tail.trim().to_string()
    }

    /// Case-insensitive textual match against the written name or its last
    /// segment. No symbol resolution: `[My]` does not match `"MyAttribute"`.
    #[must_use]
    pub fn matches_name(&self, wanted: &str) -> bool {
        let wanted = wanted.trim();
        self.name().eq_ignore_ascii_case(wanted) || self.short_name().eq_ignore_ascii_case(wanted)
    }

    /// Arguments in source order; empty when the attribute has no argument list.
    #[must_use]
    pub fn arguments(&self) -> Vec<ArgumentDecl<'f>> {
        syntax::child_of_kind(&self.node, "attribute_argument_list")
            .map(|list| {
                list.children()
                    .filter(|child| has_kind(child, "attribute_argument"))
                    .map(ArgumentDecl::new)
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn node(&self) -> &CsNode<'f> {
        &self.node
    }
}

impl fmt::Debug for AttributeDecl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeDecl")
            .field("name", &self.name())
            .field("arguments", &self.arguments())
            .finish()
    }
}

impl fmt::Display for AttributeDecl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// One attribute argument, positional (`"primary"`) or named (`Retries = 3`).
#[derive(Clone)]
pub struct ArgumentDecl<'f> {
    node: CsNode<'f>,
}

impl<'f> ArgumentDecl<'f> {
    const fn new(node: CsNode<'f>) -> Self {
        Self { node }
    }

    /// The argument expression as unparsed source text.
    #[must_use]
    pub fn expression(&self) -> String {
        self.node
            .children()
            .filter(|child| child.is_named() && !is_label(child) && !has_kind(child, "comment"))
            .last()
            .map(|expr| text_of(&expr))
            .unwrap_or_else(|| text_of(&self.node))
    }

    /// The `Name =` or `name:` label of a named argument.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        if let Some(label) = self.node.children().find(is_label) {
            return label
                .children()
                .find(|child| has_kind(child, "identifier"))
                .map(|ident| text_of(&ident));
        }

        let mut previous: Option<CsNode<'f>> = None;
        for child in self.node.children() {
            let kind = child.kind();
            if matches!(kind.as_ref(), "=" | ":") {
                return previous.map(|ident| text_of(&ident));
            }
            if child.is_named() {
                previous = Some(child);
            }
        }
        None
    }
}

fn is_label(node: &CsNode<'_>) -> bool {
    has_kind(node, "name_equals") || has_kind(node, "name_colon")
}

impl fmt::Debug for ArgumentDecl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentDecl")
            .field("name", &self.name())
            .field("expression", &self.expression())
            .finish()
    }
}
