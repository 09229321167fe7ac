//! Read-only declaration views over parsed C# trees.
//!
//! Each view pairs a node handle with the [`SourceFile`] it came from. Views
//! never own tree data and are rebuilt from the tree on every traversal.

mod attribute;
mod file;
mod member;
mod method;
mod modifiers;
mod type_decl;

#[cfg(test)]
mod tests;

pub use attribute::{ArgumentDecl, AttributeDecl};
pub use file::SourceFile;
pub use member::{EnumValue, MemberDecl, MemberKind};
pub use method::{MethodDecl, MethodKind, MethodParent};
pub use modifiers::{Access, Attributed, Modifiable, Modifiers, Named};
pub use type_decl::{TypeDecl, TypeKind};

/// Traversal depth for nested-declaration accessors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Depth {
    /// Direct children only.
    #[default]
    Shallow,
    /// All descendants, at any nesting level.
    Deep,
}

impl Depth {
    /// `Deep` when `deep` is set; mirrors boolean `sub_types` style switches.
    #[must_use]
    pub const fn from_deep(deep: bool) -> Self {
        if deep { Self::Deep } else { Self::Shallow }
    }
}
