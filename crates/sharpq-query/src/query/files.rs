use super::path::PathFilter;
use crate::declarations::{Depth, MemberDecl, SourceFile, TypeDecl, TypeKind};

/// Combinators over a sequence of files.
pub trait FileQuery<'f>: Iterator<Item = SourceFile<'f>> + Clone + Sized {
    /// Files under `path` (relative to the entry path). With
    /// `include_subdirectories` unset, only files directly inside it.
    fn with_path(
        self,
        path: &str,
        include_subdirectories: bool,
    ) -> impl Iterator<Item = SourceFile<'f>> + Clone {
        let filter = PathFilter::new(path, include_subdirectories);
        self.filter(move |file| filter.matches(&file.file_path()))
    }

    fn with_types<P>(
        self,
        predicate: P,
        depth: Depth,
    ) -> impl Iterator<Item = SourceFile<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        self.filter(move |file| file.types(depth).any(|ty| predicate(&ty)))
    }

    fn with_classes<P>(
        self,
        predicate: P,
        depth: Depth,
    ) -> impl Iterator<Item = SourceFile<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        self.with_types(of_kind(TypeKind::Class, predicate), depth)
    }

    fn with_interfaces<P>(
        self,
        predicate: P,
        depth: Depth,
    ) -> impl Iterator<Item = SourceFile<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        self.with_types(of_kind(TypeKind::Interface, predicate), depth)
    }

    fn with_structs<P>(
        self,
        predicate: P,
        depth: Depth,
    ) -> impl Iterator<Item = SourceFile<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        self.with_types(of_kind(TypeKind::Struct, predicate), depth)
    }

    fn with_records<P>(
        self,
        predicate: P,
        depth: Depth,
    ) -> impl Iterator<Item = SourceFile<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        self.with_types(of_kind(TypeKind::Record, predicate), depth)
    }

    fn with_enums<P>(
        self,
        predicate: P,
        depth: Depth,
    ) -> impl Iterator<Item = SourceFile<'f>> + Clone
    where
        P: Fn(&MemberDecl<'f>) -> bool + Clone,
    {
        self.filter(move |file| file.enums(depth).any(|member| predicate(&member)))
    }

    fn types(self, depth: Depth) -> impl Iterator<Item = TypeDecl<'f>> + Clone {
        self.flat_map(move |file| file.types(depth))
    }

    fn classes(self, depth: Depth) -> impl Iterator<Item = TypeDecl<'f>> + Clone {
        self.flat_map(move |file| file.classes(depth))
    }

    fn interfaces(self, depth: Depth) -> impl Iterator<Item = TypeDecl<'f>> + Clone {
        self.flat_map(move |file| file.interfaces(depth))
    }

    fn structs(self, depth: Depth) -> impl Iterator<Item = TypeDecl<'f>> + Clone {
        self.flat_map(move |file| file.structs(depth))
    }

    fn records(self, depth: Depth) -> impl Iterator<Item = TypeDecl<'f>> + Clone {
        self.flat_map(move |file| file.records(depth))
    }

    fn enums(self, depth: Depth) -> impl Iterator<Item = MemberDecl<'f>> + Clone {
        self.flat_map(move |file| file.enums(depth))
    }

    fn types_where<P>(
        self,
        depth: Depth,
        predicate: P,
    ) -> impl Iterator<Item = TypeDecl<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        self.types(depth).filter(predicate)
    }

    fn classes_where<P>(
        self,
        depth: Depth,
        predicate: P,
    ) -> impl Iterator<Item = TypeDecl<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        self.classes(depth).filter(predicate)
    }

    fn interfaces_where<P>(
        self,
        depth: Depth,
        predicate: P,
    ) -> impl Iterator<Item = TypeDecl<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        self.interfaces(depth).filter(predicate)
    }

    fn structs_where<P>(
        self,
        depth: Depth,
        predicate: P,
    ) -> impl Iterator<Item = TypeDecl<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        self.structs(depth).filter(predicate)
    }

    fn records_where<P>(
        self,
        depth: Depth,
        predicate: P,
    ) -> impl Iterator<Item = TypeDecl<'f>> + Clone
    where
        P: Fn(&TypeDecl<'f>) -> bool + Clone,
    {
        self.records(depth).filter(predicate)
    }

    fn enums_where<P>(
        self,
        depth: Depth,
        predicate: P,
    ) -> impl Iterator<Item = MemberDecl<'f>> + Clone
    where
        P: Fn(&MemberDecl<'f>) -> bool + Clone,
    {
        self.enums(depth).filter(predicate)
    }
}

impl<'f, I> FileQuery<'f> for I where I: Iterator<Item = SourceFile<'f>> + Clone {}

fn of_kind<'f, P>(kind: TypeKind, predicate: P) -> impl Fn(&TypeDecl<'f>) -> bool + Clone
where
    P: Fn(&TypeDecl<'f>) -> bool + Clone,
{
    move |ty| ty.kind() == kind && predicate(ty)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::declarations::Named;
    use crate::forest::SourceForest;

    fn forest() -> SourceForest {
        SourceForest::from_sources(
            "/repo",
            [
                ("Program.cs", "class Program { enum Mode { A } }"),
                ("Social/ClientA.cs", "namespace S { public class ClientA { class Inner { } } }"),
                ("Social/Sub/Feed.cs", "namespace S.Sub; interface IFeed { } enum Kind { X }"),
            ],
        )
    }

    fn paths<'f>(files: impl Iterator<Item = SourceFile<'f>>) -> Vec<String> {
        files.map(SourceFile::file_path).collect()
    }

    #[test]
    fn with_path_direct_and_nested() {
        let forest = forest();
        let query = forest.query();

        assert_eq!(
            paths(query.files().with_path("./Social", true)),
            vec!["./Social/ClientA.cs", "./Social/Sub/Feed.cs"]
        );
        assert_eq!(
            paths(query.files().with_path("./Social", false)),
            vec!["./Social/ClientA.cs"]
        );
    }

    #[test]
    fn flatteners_respect_depth() {
        let forest = forest();
        let names = |depth: Depth| {
            forest
                .query()
                .files()
                .classes(depth)
                .filter_map(|c| c.identifier())
                .collect::<Vec<_>>()
        };

        assert_eq!(names(Depth::Shallow), vec!["Program", "ClientA"]);
        assert_eq!(names(Depth::Deep), vec!["Program", "ClientA", "Inner"]);
    }

    #[test]
    fn existential_file_filters() {
        let forest = forest();
        let query = forest.query();

        assert_eq!(
            paths(query.files().with_interfaces(|_| true, Depth::Shallow)),
            vec!["./Social/Sub/Feed.cs"]
        );
        assert_eq!(
            paths(query.files().with_enums(|e| e.name() == "Mode", Depth::Deep)),
            vec!["./Program.cs"]
        );
        assert!(
            query
                .files()
                .with_enums(|e| e.name() == "Mode", Depth::Shallow)
                .next()
                .is_none()
        );
    }

    #[test]
    fn where_forms_filter_after_flattening() {
        let forest = forest();
        let found: Vec<String> = forest
            .query()
            .files()
            .types_where(Depth::Deep, |t| t.name().starts_with('I'))
            .map(|t| t.name())
            .collect();
        assert_eq!(found, vec!["Inner", "IFeed"]);
    }
}
