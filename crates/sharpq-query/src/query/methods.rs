use crate::declarations::{MemberDecl, MethodDecl, MethodKind, Modifiable};

/// Combinators over a sequence of methods.
pub trait MethodQuery<'f>: Iterator<Item = MethodDecl<'f>> + Clone + Sized {
    fn with_kind(self, kind: MethodKind) -> impl Iterator<Item = MethodDecl<'f>> + Clone {
        self.filter(move |method| method.kind() == Some(kind))
    }

    fn with_async(self) -> impl Iterator<Item = MethodDecl<'f>> + Clone {
        self.filter(|method| method.is_async())
    }

    /// Methods with at least one parameter satisfying `predicate`.
    fn with_parameter<P>(self, predicate: P) -> impl Iterator<Item = MethodDecl<'f>> + Clone
    where
        P: Fn(&MemberDecl<'f>) -> bool + Clone,
    {
        self.filter(move |method| method.parameters().any(|param| predicate(&param)))
    }

    /// Methods whose written return type satisfies `predicate`.
    fn with_return_type<P>(self, predicate: P) -> impl Iterator<Item = MethodDecl<'f>> + Clone
    where
        P: Fn(&str) -> bool + Clone,
    {
        self.filter(move |method| predicate(&method.return_type()))
    }

    fn parameters(self) -> impl Iterator<Item = MemberDecl<'f>> + Clone {
        self.flat_map(|method| method.parameters())
    }

    fn local_functions(self) -> impl Iterator<Item = MethodDecl<'f>> + Clone {
        self.flat_map(|method| method.local_functions())
    }
}

impl<'f, I> MethodQuery<'f> for I where I: Iterator<Item = MethodDecl<'f>> + Clone {}
