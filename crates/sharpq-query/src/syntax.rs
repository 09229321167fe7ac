//! Node-level helpers shared by the declaration views.
//!
//! Everything here reads the C# tree-sitter grammar through ast-grep node
//! handles; nothing allocates beyond the strings it returns.

use crate::parser::CsNode;

pub(crate) const CLASS: &str = "class_declaration";
pub(crate) const INTERFACE: &str = "interface_declaration";
pub(crate) const STRUCT: &str = "struct_declaration";
pub(crate) const RECORD: &str = "record_declaration";
pub(crate) const RECORD_STRUCT: &str = "record_struct_declaration";
pub(crate) const ENUM: &str = "enum_declaration";
pub(crate) const METHOD: &str = "method_declaration";
pub(crate) const CONSTRUCTOR: &str = "constructor_declaration";
pub(crate) const LOCAL_FUNCTION: &str = "local_function_statement";
pub(crate) const FIELD: &str = "field_declaration";
pub(crate) const PROPERTY: &str = "property_declaration";
pub(crate) const PARAMETER: &str = "parameter";
/// Keyword token opening a `params` parameter inside a `parameter_list`.
pub(crate) const PARAMS_KEYWORD: &str = "params";
pub(crate) const NAMESPACE: &str = "namespace_declaration";
pub(crate) const FILE_SCOPED_NAMESPACE: &str = "file_scoped_namespace_declaration";
pub(crate) const USING: &str = "using_directive";

/// Kinds that open a new type scope: classes, interfaces, structs, records and enums.
pub(crate) fn is_type_scope(kind: &str) -> bool {
    matches!(
        kind,
        CLASS | INTERFACE | STRUCT | RECORD | RECORD_STRUCT | ENUM
    )
}

/// Kinds a [`crate::TypeDecl`] can wrap. Enums are members, not types.
pub(crate) fn is_type_declaration(kind: &str) -> bool {
    matches!(kind, CLASS | INTERFACE | STRUCT | RECORD | RECORD_STRUCT)
}

/// How far a [`NodeWalk`] descends below the node it starts from.
#[derive(Clone, Copy)]
pub(crate) enum Descent {
    /// Direct children only.
    Children,
    /// Every descendant, depth-unbounded.
    All,
    /// Every descendant, but nodes whose kind matches are yielded without
    /// being entered.
    StopAt(fn(&str) -> bool),
}

/// Lazy pre-order walk below a start node. The start node itself is never
/// yielded, and nothing is read from the tree until the first `next`.
#[derive(Clone)]
pub(crate) struct NodeWalk<'r> {
    start: Option<CsNode<'r>>,
    stack: Vec<CsNode<'r>>,
    descent: Descent,
}

impl<'r> NodeWalk<'r> {
    pub(crate) const fn new(start: Option<CsNode<'r>>, descent: Descent) -> Self {
        Self {
            start,
            stack: Vec::new(),
            descent,
        }
    }

    pub(crate) const fn children(start: Option<CsNode<'r>>) -> Self {
        Self::new(start, Descent::Children)
    }

    pub(crate) const fn descendants(start: CsNode<'r>) -> Self {
        Self::new(Some(start), Descent::All)
    }

    pub(crate) const fn descendants_until(start: CsNode<'r>, stop: fn(&str) -> bool) -> Self {
        Self::new(Some(start), Descent::StopAt(stop))
    }
}

impl<'r> Iterator for NodeWalk<'r> {
    type Item = CsNode<'r>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            push_children(&mut self.stack, &start);
        }
        let node = self.stack.pop()?;
        let enter = match self.descent {
            Descent::Children => false,
            Descent::All => true,
            Descent::StopAt(stop) => !stop(node.kind().as_ref()),
        };
        if enter {
            push_children(&mut self.stack, &node);
        }
        Some(node)
    }
}

fn push_children<'r>(stack: &mut Vec<CsNode<'r>>, node: &CsNode<'r>) {
    let children: Vec<CsNode<'r>> = node.children().collect();
    stack.extend(children.into_iter().rev());
}

pub(crate) fn has_kind(node: &CsNode<'_>, kind: &str) -> bool {
    node.kind().as_ref() == kind
}

pub(crate) fn text_of(node: &CsNode<'_>) -> String {
    node.text().to_string()
}

pub(crate) fn field_text(node: &CsNode<'_>, field: &str) -> Option<String> {
    node.field(field).map(|child| text_of(&child))
}

pub(crate) fn child_of_kind<'r>(node: &CsNode<'r>, kind: &str) -> Option<CsNode<'r>> {
    node.children().find(|child| has_kind(child, kind))
}

fn last_named_child<'r>(node: &CsNode<'r>) -> Option<CsNode<'r>> {
    node.children()
        .filter(|child| child.is_named() && !has_kind(child, "comment"))
        .last()
}

/// Lowercased modifier keywords in source order.
pub(crate) fn modifier_words(node: &CsNode<'_>) -> Vec<String> {
    node.children()
        .filter(|child| has_kind(child, "modifier"))
        .map(|child| child.text().to_lowercase())
        .collect()
}

/// `attribute` nodes from every attribute list attached to a declaration.
pub(crate) fn attribute_nodes<'r>(node: &CsNode<'r>) -> Vec<CsNode<'r>> {
    node.children()
        .filter(|child| has_kind(child, "attribute_list"))
        .flat_map(|list| {
            list.children()
                .filter(|child| has_kind(child, "attribute"))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// The `{ ... }` member list of a type or enum declaration.
pub(crate) fn declaration_body<'r>(node: &CsNode<'r>) -> Option<CsNode<'r>> {
    let is_body = |child: &CsNode<'r>| {
        has_kind(child, "declaration_list") || has_kind(child, "enum_member_declaration_list")
    };
    node.field("body")
        .filter(is_body)
        .or_else(|| node.children().find(is_body))
}

/// Body of a method-like declaration: a block or an arrow expression clause.
pub(crate) fn callable_body<'r>(node: &CsNode<'r>) -> Option<CsNode<'r>> {
    node.field("body").or_else(|| {
        node.children()
            .find(|child| has_kind(child, "block") || has_kind(child, "arrow_expression_clause"))
    })
}

/// Text of the `= value` initializer attached to a declarator, parameter,
/// property or enum member, if present.
pub(crate) fn initializer_text(node: &CsNode<'_>) -> Option<String> {
    if let Some(value) = node.field("value") {
        if has_kind(&value, "arrow_expression_clause") {
            return None;
        }
        return Some(text_of(&value));
    }

    let mut after_equals = false;
    for child in node.children() {
        match child.kind().as_ref() {
            "equals_value_clause" => return last_named_child(&child).map(|v| text_of(&v)),
            "=" => after_equals = true,
            "comment" => {}
            _ if after_equals && child.is_named() => return Some(text_of(&child)),
            _ => {}
        }
    }
    None
}

/// Whether a type node spells a nullable type (`string?`, `int?`).
pub(crate) fn is_nullable_type(node: &CsNode<'_>) -> bool {
    has_kind(node, "nullable_type") || node.text().trim_end().ends_with('?')
}

/// Base type names from a declaration's `base_list`, as written.
pub(crate) fn base_type_names(node: &CsNode<'_>) -> Vec<String> {
    let Some(base_list) = child_of_kind(node, "base_list") else {
        return Vec::new();
    };

    base_list
        .children()
        .filter(|child| child.is_named())
        .filter_map(|child| match child.kind().as_ref() {
            "argument_list" | "comment" => None,
            "primary_constructor_base_type" => Some(
                field_text(&child, "type").unwrap_or_else(|| {
                    let text = text_of(&child);
                    text.split('(').next().unwrap_or_default().trim().to_string()
                }),
            ),
            _ => Some(text_of(&child)),
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// The imported namespace or type of a `using` directive. Aliases resolve to
/// their target: `using Json = System.Text.Json;` yields `System.Text.Json`.
pub(crate) fn using_target(node: &CsNode<'_>) -> Option<String> {
    let text = node.text();
    let mut rest = text.trim().trim_end_matches(';').trim();
    for keyword in ["global", "using", "static", "unsafe"] {
        if let Some(stripped) = rest.strip_prefix(keyword) {
            if stripped.starts_with(char::is_whitespace) {
                rest = stripped.trim_start();
            }
        }
    }
    if let Some((_, target)) = rest.split_once('=') {
        rest = target.trim();
    }
    (!rest.is_empty()).then(|| normalize_whitespace(rest))
}

/// Collapse runs of whitespace (including newlines) to single spaces.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Nearest ancestor whose kind satisfies `matches`.
pub(crate) fn ancestor_where<'r>(
    node: &CsNode<'r>,
    matches: impl Fn(&str) -> bool,
) -> Option<CsNode<'r>> {
    let mut current = node.parent();
    while let Some(parent) = current {
        if matches(parent.kind().as_ref()) {
            return Some(parent);
        }
        current = parent.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::parser::parse_source;

    fn kinds(walk: NodeWalk<'_>, wanted: &[&str]) -> Vec<String> {
        walk.filter(|n| wanted.contains(&n.kind().as_ref()))
            .filter_map(|n| field_text(&n, "name"))
            .collect()
    }

    #[test]
    fn walk_children_stops_at_depth_one() {
        let tree = parse_source("class Outer { class Inner { class Deepest { } } }");
        let outer = tree
            .root()
            .children()
            .find(|n| has_kind(n, CLASS))
            .expect("outer class");

        let shallow = kinds(NodeWalk::children(declaration_body(&outer)), &[CLASS]);
        let deep = kinds(NodeWalk::descendants(outer.clone()), &[CLASS]);

        assert_eq!(shallow, vec!["Inner"]);
        assert_eq!(deep, vec!["Inner", "Deepest"]);
    }

    #[test]
    fn walk_until_does_not_enter_type_scopes() {
        let tree = parse_source("namespace A { class One { class Two { } } class Three { } }");
        let top = kinds(
            NodeWalk::descendants_until(tree.root(), is_type_scope),
            &[CLASS],
        );
        assert_eq!(top, vec!["One", "Three"]);
    }

    #[test]
    fn walk_is_restartable_from_a_clone() {
        let tree = parse_source("class A { } class B { }");
        let walk = NodeWalk::descendants(tree.root());
        let first = kinds(walk.clone(), &[CLASS]);
        let second = kinds(walk, &[CLASS]);
        assert_eq!(first, second);
    }

    #[test]
    fn walk_over_missing_start_is_empty() {
        assert_eq!(NodeWalk::children(None).count(), 0);
    }

    #[rstest]
    #[case("using System;", "System")]
    #[case("using System.Collections.Generic;", "System.Collections.Generic")]
    #[case("using static System.Math;", "System.Math")]
    #[case("using Json = System.Text.Json;", "System.Text.Json")]
    #[case("global using System.Linq;", "System.Linq")]
    fn using_targets(#[case] source: &str, #[case] expected: &str) {
        let tree = parse_source(source);
        let using = tree
            .root()
            .children()
            .find(|n| has_kind(n, USING))
            .expect("using directive");
        assert_eq!(using_target(&using).as_deref(), Some(expected));
    }

    #[test]
    fn modifiers_are_lowercased_in_source_order() {
        let tree = parse_source("public static partial class Tools { }");
        let class = tree
            .root()
            .children()
            .find(|n| has_kind(n, CLASS))
            .expect("class");
        assert_eq!(modifier_words(&class), vec!["public", "static", "partial"]);
    }

    #[test]
    fn base_types_keep_generic_arguments_intact() {
        let tree = parse_source("class Repo : Base, IRepository<User, int> { }");
        let class = tree
            .root()
            .children()
            .find(|n| has_kind(n, CLASS))
            .expect("class");
        assert_eq!(
            base_type_names(&class),
            vec!["Base", "IRepository<User, int>"]
        );
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_whitespace("  public\n   void  Run( )"), "public void Run( )");
    }
}
