use crate::declarations::{AttributeDecl, Attributed, Modifiable, Named};

/// Combinators shared by every declaration kind, written once against the
/// capability traits.
pub trait DeclarationQuery: Iterator + Clone + Sized {
    /// Declarations whose name satisfies `predicate`. Nameless declarations
    /// never match.
    fn with_name<P>(self, predicate: P) -> impl Iterator<Item = Self::Item> + Clone
    where
        Self::Item: Named,
        P: Fn(&str) -> bool + Clone,
    {
        self.filter(move |item| item.identifier().is_some_and(|name| predicate(&name)))
    }

    /// Declarations with at least one attribute satisfying `predicate`.
    fn with_attribute<'f, P>(self, predicate: P) -> impl Iterator<Item = Self::Item> + Clone
    where
        Self::Item: Attributed<'f>,
        P: Fn(&AttributeDecl<'f>) -> bool + Clone,
    {
        self.filter(move |item| item.attributes().iter().any(|attr| predicate(attr)))
    }

    /// Declarations annotated with `name`: case-insensitive, qualifier-agnostic
    /// (`[Foo.MyAttribute]` matches `"MyAttribute"`), never a prefix match.
    fn with_attribute_named<'f>(self, name: &str) -> impl Iterator<Item = Self::Item> + Clone
    where
        Self::Item: Attributed<'f>,
    {
        let name = name.trim().to_string();
        self.filter(move |item| item.has_attribute(&name))
    }

    fn with_public(self) -> impl Iterator<Item = Self::Item> + Clone
    where
        Self::Item: Modifiable,
    {
        self.filter(|item| item.is_public())
    }

    fn with_protected(self) -> impl Iterator<Item = Self::Item> + Clone
    where
        Self::Item: Modifiable,
    {
        self.filter(|item| item.is_protected())
    }

    fn with_internal(self) -> impl Iterator<Item = Self::Item> + Clone
    where
        Self::Item: Modifiable,
    {
        self.filter(|item| item.is_internal())
    }

    fn with_private(self) -> impl Iterator<Item = Self::Item> + Clone
    where
        Self::Item: Modifiable,
    {
        self.filter(|item| item.is_private())
    }

    fn with_readonly(self) -> impl Iterator<Item = Self::Item> + Clone
    where
        Self::Item: Modifiable,
    {
        self.filter(|item| item.is_readonly())
    }

    fn with_static(self) -> impl Iterator<Item = Self::Item> + Clone
    where
        Self::Item: Modifiable,
    {
        self.filter(|item| item.is_static())
    }

    fn with_abstract(self) -> impl Iterator<Item = Self::Item> + Clone
    where
        Self::Item: Modifiable,
    {
        self.filter(|item| item.is_abstract())
    }

    fn with_sealed(self) -> impl Iterator<Item = Self::Item> + Clone
    where
        Self::Item: Modifiable,
    {
        self.filter(|item| item.is_sealed())
    }
}

impl<I> DeclarationQuery for I where I: Iterator + Clone {}
