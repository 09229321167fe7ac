//! End-to-end query properties over the shared C# fixtures.

use pretty_assertions::assert_eq;
use sharpq_query::prelude::*;
use sharpq_query::{EnumValue, LoadOptions, QueryError, SourceForest, TypeDecl};

const CLIENT_A: &str = include_str!("fixtures/Social/ClientA.cs");
const FEED_CLIENT: &str = include_str!("fixtures/Social/Sub/FeedClient.cs");
const SHAPES: &str = include_str!("fixtures/Models/Shapes.cs");

fn forest() -> SourceForest {
    SourceForest::from_sources(
        "/repo",
        [
            ("Social/ClientA.cs", CLIENT_A),
            ("Social/Sub/FeedClient.cs", FEED_CLIENT),
            ("Models/Shapes.cs", SHAPES),
        ],
    )
}

fn all_types(forest: &SourceForest) -> Vec<TypeDecl<'_>> {
    forest.query().files().types(Depth::Deep).collect()
}

#[test]
fn access_predicates_are_mutually_exclusive() {
    let forest = forest();
    for ty in all_types(&forest) {
        let explicit = [ty.is_public(), ty.is_protected(), ty.is_internal()];
        let explicit_count = explicit.iter().filter(|f| **f).count();

        assert!(explicit_count <= 1, "{} has several access levels", ty.name());
        assert_eq!(ty.is_private(), explicit_count == 0, "{}", ty.name());
    }
}

#[test]
fn deep_classes_contain_shallow_classes() {
    let forest = forest();
    for ty in all_types(&forest) {
        let shallow: Vec<String> = ty.classes(Depth::Shallow).map(|c| c.name()).collect();
        let deep: Vec<String> = ty.classes(Depth::Deep).map(|c| c.name()).collect();

        assert!(shallow.iter().all(|name| deep.contains(name)), "{}", ty.name());
        let nested_twice = ty
            .classes(Depth::Shallow)
            .any(|c| c.classes(Depth::Shallow).next().is_some());
        if !nested_twice {
            assert_eq!(shallow, deep, "{}", ty.name());
        }
    }
}

#[test]
fn file_paths_are_dot_slash_and_forward_slashed() {
    let windows_style = SourceForest::from_sources(
        r"C:\src\App",
        [(r"Social\Sub\FeedClient.cs", FEED_CLIENT)],
    );

    for forest in [forest(), windows_style] {
        for file in forest.query().files() {
            let path = file.file_path();
            assert!(path.starts_with("./"), "{path}");
            assert!(!path.contains('\\'), "{path}");
        }
    }
}

#[test]
fn with_path_honours_include_subdirectories() {
    let forest = forest();
    let paths = |include: bool| -> Vec<String> {
        forest
            .query()
            .files()
            .with_path("./Social", include)
            .map(|f| f.file_path())
            .collect()
    };

    assert_eq!(paths(false), vec!["./Social/ClientA.cs"]);
    assert_eq!(
        paths(true),
        vec!["./Social/ClientA.cs", "./Social/Sub/FeedClient.cs"]
    );
}

#[test]
fn with_attribute_named_is_case_insensitive_and_exact() {
    let forest = forest();
    let names: Vec<String> = forest
        .query()
        .files()
        .types(Depth::Deep)
        .with_attribute_named("MyAttribute")
        .map(|t| t.name())
        .collect();

    // Circle carries [MyAttributeVariant] and must not match.
    assert_eq!(names, vec!["ClientA", "FeedClient"]);
}

#[test]
fn public_getters_of_social_clients() {
    let forest = forest();

    let client_a: Vec<String> = forest
        .query()
        .files()
        .with_path("./Social", true)
        .classes(Depth::Shallow)
        .with_name(|n| n.starts_with("Client"))
        .methods_where(Depth::Shallow, |m| {
            m.is_public() && m.name().is_ok_and(|n| n.starts_with("Get"))
        })
        .map(|m| m.name())
        .collect::<Result<_, QueryError>>()
        .unwrap();
    assert_eq!(client_a, vec!["GetFoo"]);

    let clients: Vec<String> = forest
        .query()
        .files()
        .with_path("./Social", true)
        .classes(Depth::Shallow)
        .with_name(|n| n.ends_with("Client"))
        .methods(Depth::Shallow)
        .with_public()
        .with_name(|n| n.starts_with("Get"))
        .filter_map(|m| m.name().ok())
        .collect();
    assert_eq!(clients, vec!["GetFeed"]);
}

#[test]
fn enum_values_are_ordered_pairs() {
    let forest = forest();
    let colors: Vec<Vec<EnumValue>> = forest
        .query()
        .files()
        .classes(Depth::Shallow)
        .with_name(|n| n == "ClientA")
        .enums(Depth::Shallow)
        .map(|e| e.values())
        .collect();

    assert_eq!(
        colors,
        vec![vec![
            EnumValue::new("Red", None),
            EnumValue::new("Green", Some("5"))
        ]]
    );
}

#[test]
fn pipelines_are_repeatable() {
    let forest = forest();
    let pipeline = forest
        .query()
        .files()
        .types(Depth::Deep)
        .with_public()
        .methods(Depth::Shallow)
        .with_name(|n| n.starts_with('P'));

    let first: Vec<String> = pipeline.clone().filter_map(|m| m.name().ok()).collect();
    let second: Vec<String> = pipeline.filter_map(|m| m.name().ok()).collect();

    assert_eq!(first, second);
    assert_eq!(first, vec!["PushBar", "PushFeed"]);
}

#[test]
fn loaded_forest_matches_in_memory_forest() {
    let tmp = tempfile::tempdir().unwrap();
    for (relative, source) in [
        ("Social/ClientA.cs", CLIENT_A),
        ("Social/Sub/FeedClient.cs", FEED_CLIENT),
        ("Models/Shapes.cs", SHAPES),
    ] {
        let path = tmp.path().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, source).unwrap();
    }

    let loaded = SourceForest::load(tmp.path(), &LoadOptions::default()).unwrap();
    let mut paths: Vec<String> = loaded.query().files().map(|f| f.file_path()).collect();
    paths.sort();

    assert_eq!(
        paths,
        vec![
            "./Models/Shapes.cs",
            "./Social/ClientA.cs",
            "./Social/Sub/FeedClient.cs"
        ]
    );
    assert_eq!(
        loaded.query().files().types(Depth::Deep).count(),
        forest().query().files().types(Depth::Deep).count()
    );
}
