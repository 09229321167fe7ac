use serde::Serialize;

use super::attribute::AttributeDecl;

/// Declared accessibility. Exactly one value applies to any declaration that
/// carries modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Public,
    Protected,
    Internal,
    Private,
}

impl Access {
    /// Derive accessibility from modifier keywords.
    ///
    /// `protected internal` and `private protected` both count as `Protected`;
    /// no explicit access keyword means `Private`.
    #[must_use]
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let has = |keyword: &str| words.iter().any(|w| w.as_ref() == keyword);
        if has("public") {
            Self::Public
        } else if has("protected") {
            Self::Protected
        } else if has("internal") {
            Self::Internal
        } else {
            Self::Private
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::Private => "private",
        }
    }
}

/// The modifier set of one declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Modifiers {
    words: Vec<String>,
    access: Option<Access>,
}

impl Modifiers {
    /// Modifiers of an access-carrying declaration (type, method, field...).
    #[must_use]
    pub fn declared(words: Vec<String>) -> Self {
        let access = Some(Access::from_words(&words));
        Self { words, access }
    }

    /// Modifiers of a formal parameter. Parameters have no accessibility, so
    /// every access predicate reports `false`.
    #[must_use]
    pub fn parameter(words: Vec<String>) -> Self {
        Self {
            words,
            access: None,
        }
    }

    /// Keywords in source order, lowercased.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub const fn access(&self) -> Option<Access> {
        self.access
    }

    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.words.iter().any(|w| w == keyword)
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.access == Some(Access::Public)
    }

    #[must_use]
    pub fn is_protected(&self) -> bool {
        self.access == Some(Access::Protected)
    }

    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.access == Some(Access::Internal)
    }

    #[must_use]
    pub fn is_private(&self) -> bool {
        self.access == Some(Access::Private)
    }

    // Parameter `in`/`ref readonly` are not readonly declarations.
    #[must_use]
    pub fn is_readonly(&self) -> bool {
        self.access.is_some() && self.contains("readonly")
    }

    #[must_use]
    pub fn is_static(&self) -> bool {
        self.access.is_some() && self.contains("static")
    }

    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.access.is_some() && self.contains("abstract")
    }

    #[must_use]
    pub fn is_async(&self) -> bool {
        self.contains("async")
    }

    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.contains("sealed")
    }

    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.contains("partial")
    }
}

/// A declaration with a name.
pub trait Named {
    /// The declared identifier, or `None` when the node has none.
    fn identifier(&self) -> Option<String>;
}

/// A declaration that can carry `[Attribute]` lists.
pub trait Attributed<'f> {
    fn attributes(&self) -> Vec<AttributeDecl<'f>>;

    /// Whether any attribute matches `name` (see [`AttributeDecl::matches_name`]).
    fn has_attribute(&self, name: &str) -> bool {
        self.attributes().iter().any(|a| a.matches_name(name))
    }
}

/// A declaration with a modifier set.
pub trait Modifiable {
    fn modifiers(&self) -> Modifiers;

    fn access(&self) -> Option<Access> {
        self.modifiers().access()
    }

    fn is_public(&self) -> bool {
        self.modifiers().is_public()
    }

    fn is_protected(&self) -> bool {
        self.modifiers().is_protected()
    }

    fn is_internal(&self) -> bool {
        self.modifiers().is_internal()
    }

    fn is_private(&self) -> bool {
        self.modifiers().is_private()
    }

    fn is_readonly(&self) -> bool {
        self.modifiers().is_readonly()
    }

    fn is_static(&self) -> bool {
        self.modifiers().is_static()
    }

    fn is_abstract(&self) -> bool {
        self.modifiers().is_abstract()
    }

    fn is_async(&self) -> bool {
        self.modifiers().is_async()
    }

    fn is_sealed(&self) -> bool {
        self.modifiers().is_sealed()
    }
}
