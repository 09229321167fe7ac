use crate::declarations::{Depth, MemberDecl, MethodDecl, TypeDecl, TypeKind};

/// Combinators over a sequence of types.
///
/// Flatteners replace each type by its nested declarations; `with_*` filters
/// keep the element type.
pub trait TypeQuery<'f>: Iterator<Item = TypeDecl<'f>> + Clone + Sized {
    fn with_kind(self, kind: TypeKind) -> impl Iterator<Item = TypeDecl<'f>> + Clone {
        self.filter(move |ty| ty.kind() == kind)
    }

    /// Types with at least one base type satisfying `predicate`.
    fn with_base_type<P>(self, predicate: P) -> impl Iterator<Item = TypeDecl<'f>> + Clone
    where
        P: Fn(&str) -> bool + Clone,
    {
        self.filter(move |ty| ty.base_types().iter().any(|base| predicate(base)))
    }

    /// Types listing `name` among their base types, compared case-insensitively.
    fn with_base_type_named(self, name: &str) -> impl Iterator<Item = TypeDecl<'f>> + Clone {
        let name = name.trim().to_string();
        self.filter(move |ty| ty.has_base_type(&name))
    }

    /// Types declaring at least one method that satisfies `predicate`.
    fn with_methods<P>(self, predicate: P) -> impl Iterator<Item = TypeDecl<'f>> + Clone
    where
        P: Fn(&MethodDecl<'f>) -> bool + Clone,
    {
        self.filter(move |ty| ty.methods(Depth::Shallow).any(|method| predicate(&method)))
    }

    fn types(self, depth: Depth) -> impl Iterator<Item = TypeDecl<'f>> + Clone {
        self.flat_map(move |ty| ty.types(depth))
    }

    fn classes(self, depth: Depth) -> impl Iterator<Item = TypeDecl<'f>> + Clone {
        self.flat_map(move |ty| ty.classes(depth))
    }

    fn interfaces(self, depth: Depth) -> impl Iterator<Item = TypeDecl<'f>> + Clone {
        self.flat_map(move |ty| ty.interfaces(depth))
    }

    fn structs(self, depth: Depth) -> impl Iterator<Item = TypeDecl<'f>> + Clone {
        self.flat_map(move |ty| ty.structs(depth))
    }

    fn records(self, depth: Depth) -> impl Iterator<Item = TypeDecl<'f>> + Clone {
        self.flat_map(move |ty| ty.records(depth))
    }

    fn enums(self, depth: Depth) -> impl Iterator<Item = MemberDecl<'f>> + Clone {
        self.flat_map(move |ty| ty.enums(depth))
    }

    fn methods(self, depth: Depth) -> impl Iterator<Item = MethodDecl<'f>> + Clone {
        self.flat_map(move |ty| ty.methods(depth))
    }

    fn constructors(self, depth: Depth) -> impl Iterator<Item = MethodDecl<'f>> + Clone {
        self.flat_map(move |ty| ty.constructors(depth))
    }

    fn callables(self, depth: Depth) -> impl Iterator<Item = MethodDecl<'f>> + Clone {
        self.flat_map(move |ty| ty.callables(depth))
    }

    fn fields(self, depth: Depth) -> impl Iterator<Item = MemberDecl<'f>> + Clone {
        self.flat_map(move |ty| ty.fields(depth))
    }

    fn properties(self, depth: Depth) -> impl Iterator<Item = MemberDecl<'f>> + Clone {
        self.flat_map(move |ty| ty.properties(depth))
    }

    fn members(self, depth: Depth) -> impl Iterator<Item = MemberDecl<'f>> + Clone {
        self.flat_map(move |ty| ty.members(depth))
    }

    fn types_where<P>(
        self,
        depth: Depth,
        predicate: P,
    ) -> impl Iterator<Item = TypeDecl<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        TypeQuery::types(self, depth).filter(predicate)
    }

    fn classes_where<P>(
        self,
        depth: Depth,
        predicate: P,
    ) -> impl Iterator<Item = TypeDecl<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        TypeQuery::classes(self, depth).filter(predicate)
    }

    fn interfaces_where<P>(
        self,
        depth: Depth,
        predicate: P,
    ) -> impl Iterator<Item = TypeDecl<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        TypeQuery::interfaces(self, depth).filter(predicate)
    }

    fn structs_where<P>(
        self,
        depth: Depth,
        predicate: P,
    ) -> impl Iterator<Item = TypeDecl<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        TypeQuery::structs(self, depth).filter(predicate)
    }

    fn records_where<P>(
        self,
        depth: Depth,
        predicate: P,
    ) -> impl Iterator<Item = TypeDecl<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        TypeQuery::records(self, depth).filter(predicate)
    }

    fn enums_where<P>(
        self,
        depth: Depth,
        predicate: P,
    ) -> impl Iterator<Item = MemberDecl<'f>> + Clone
    where
        P: Fn(&MemberDecl<'f>) -> bool + Clone,
    {
        TypeQuery::enums(self, depth).filter(predicate)
    }

    fn methods_where<P>(
        self,
        depth: Depth,
        predicate: P,
    ) -> impl Iterator<Item = MethodDecl<'f>> + Clone
    where
        P: Fn(&MethodDecl<'f>) -> bool + Clone,
    {
        TypeQuery::methods(self, depth).filter(predicate)
    }
}

impl<'f, I> TypeQuery<'f> for I where I: Iterator<Item = TypeDecl<'f>> + Clone {}
