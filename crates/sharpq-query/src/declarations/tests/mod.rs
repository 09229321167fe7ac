use pretty_assertions::assert_eq;

use super::*;
use crate::error::QueryError;
use crate::forest::SourceForest;

mod types;

const CLIENT_A: &str = include_str!("../../../tests/fixtures/Social/ClientA.cs");
const FEED_CLIENT: &str = include_str!("../../../tests/fixtures/Social/Sub/FeedClient.cs");
const SHAPES: &str = include_str!("../../../tests/fixtures/Models/Shapes.cs");

fn fixture_forest() -> SourceForest {
    SourceForest::from_sources(
        "/repo",
        [
            ("Social/ClientA.cs", CLIENT_A),
            ("Social/Sub/FeedClient.cs", FEED_CLIENT),
            ("Models/Shapes.cs", SHAPES),
        ],
    )
}

fn single(source: &str) -> SourceForest {
    SourceForest::from_sources("/repo", [("Test.cs", source)])
}

fn file_named<'f>(forest: &'f SourceForest, file_name: &str) -> SourceFile<'f> {
    forest
        .query()
        .files()
        .find(|f| f.file_name() == file_name)
        .unwrap_or_else(|| panic!("should find file '{file_name}'"))
}

fn type_named<'f>(forest: &'f SourceForest, name: &str) -> TypeDecl<'f> {
    forest
        .query()
        .files()
        .flat_map(|f| f.types(Depth::Deep))
        .find(|t| t.name() == name)
        .unwrap_or_else(|| panic!("should find type '{name}'"))
}

fn method_named<'f>(ty: &TypeDecl<'f>, name: &str) -> MethodDecl<'f> {
    ty.callables(Depth::Shallow)
        .find(|m| m.name().is_ok_and(|n| n == name))
        .unwrap_or_else(|| panic!("should find method '{name}' on {}", ty.name()))
}

fn member_named<'f>(members: impl Iterator<Item = MemberDecl<'f>>, name: &str) -> MemberDecl<'f> {
    let mut members = members;
    members
        .find(|m| m.name() == name)
        .unwrap_or_else(|| panic!("should find member '{name}'"))
}

fn names<T: Named>(items: impl Iterator<Item = T>) -> Vec<String> {
    items.filter_map(|item| item.identifier()).collect()
}

#[test]
fn fixture_forest_loads_three_files() {
    let forest = fixture_forest();
    assert_eq!(forest.len(), 3);
}

#[test]
fn views_report_errors_lazily() {
    let forest = single("abstract class Base { public abstract void Run(); }");
    let run = method_named(&type_named(&forest, "Base"), "Run");

    assert_eq!(run.name(), Ok("Run".to_string()));
    assert_eq!(
        run.body(),
        Err(QueryError::MissingBody {
            method: "Run".to_string()
        })
    );
}
