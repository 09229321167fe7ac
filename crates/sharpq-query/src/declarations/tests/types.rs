use pretty_assertions::assert_eq;

use super::*;

#[test]
fn type_kind_and_base_types() {
    let forest = fixture_forest();
    let client = type_named(&forest, "ClientA");

    assert_eq!(client.kind(), TypeKind::Class);
    assert_eq!(client.base_types(), vec!["BaseClient", "IDisposable"]);
    assert!(client.has_base_type("idisposable"));
    assert!(!client.has_base_type("Disposable"));

    assert_eq!(type_named(&forest, "Point").kind(), TypeKind::Struct);
    assert_eq!(type_named(&forest, "Person").kind(), TypeKind::Record);
    assert_eq!(type_named(&forest, "IFeed").kind(), TypeKind::Interface);
    assert!(type_named(&forest, "Point").base_types().is_empty());
}

#[test]
fn access_is_exactly_one_of_four() {
    let forest = fixture_forest();

    let expected = [
        ("ClientA", Access::Public),
        ("Session", Access::Internal),
        ("Token", Access::Private),
        ("Geometry", Access::Internal),
        ("Shape", Access::Public),
    ];
    for (name, access) in expected {
        let ty = type_named(&forest, name);
        assert_eq!(ty.access(), Some(access), "{name}");
        let flags = [ty.is_public(), ty.is_protected(), ty.is_internal(), ty.is_private()];
        assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{name}");
    }

    assert!(type_named(&forest, "Geometry").is_static());
    assert!(type_named(&forest, "Shape").is_abstract());
    assert!(type_named(&forest, "FeedClient").is_sealed());
}

#[test]
fn deep_nested_types_are_a_superset() {
    let forest = fixture_forest();
    let client = type_named(&forest, "ClientA");

    let shallow = names(client.classes(Depth::Shallow));
    let deep = names(client.classes(Depth::Deep));

    assert_eq!(shallow, vec!["Session"]);
    assert_eq!(deep, vec!["Session", "Token"]);
    assert!(shallow.iter().all(|name| deep.contains(name)));
}

#[test]
fn shallow_and_deep_agree_at_depth_one() {
    let forest = fixture_forest();
    let shape = type_named(&forest, "Shape");

    assert_eq!(
        names(shape.methods(Depth::Shallow)),
        names(shape.methods(Depth::Deep))
    );
}

#[test]
fn nested_accessors_by_kind() {
    let forest = fixture_forest();
    let client = type_named(&forest, "ClientA");

    assert_eq!(names(client.enums(Depth::Shallow)), vec!["Color"]);
    assert_eq!(names(client.constructors(Depth::Shallow)), vec!["ClientA"]);
    assert_eq!(
        names(client.methods(Depth::Shallow)),
        vec!["GetFoo", "PushBar", "Dispose"]
    );
    assert_eq!(
        names(client.callables(Depth::Shallow)),
        vec!["ClientA", "GetFoo", "PushBar", "Dispose"]
    );
    assert_eq!(
        names(client.fields(Depth::Shallow)),
        vec!["_name", "_alias", "Count"]
    );
    assert_eq!(names(client.properties(Depth::Shallow)), vec!["Title", "Port"]);
    assert_eq!(names(client.properties(Depth::Deep)), vec!["Title", "Port", "Value"]);
    assert_eq!(
        names(client.members(Depth::Shallow)),
        vec!["_name", "_alias", "Count", "Title", "Port"]
    );
    assert!(client.interfaces(Depth::Deep).next().is_none());
    assert!(client.structs(Depth::Deep).next().is_none());
    assert!(client.records(Depth::Deep).next().is_none());
}

#[test]
fn enclosing_type_walks_outward() {
    let forest = fixture_forest();
    let token = type_named(&forest, "Token");

    let session = token.enclosing_type().expect("Token is nested");
    assert_eq!(session.name(), "Session");
    assert_eq!(
        session.enclosing_type().map(|t| t.name()),
        Some("ClientA".to_string())
    );
    assert!(type_named(&forest, "ClientA").enclosing_type().is_none());
}

#[test]
fn type_parameters_and_file_back_reference() {
    let forest = single("public class Box<T> where T : new() { }");
    let boxed = type_named(&forest, "Box");

    assert_eq!(boxed.type_parameters().as_deref(), Some("<T>"));
    assert_eq!(boxed.file().file_path(), "./Test.cs");
    assert_eq!(boxed.to_string(), "Box");
    assert!(type_named(&fixture_forest(), "Point").type_parameters().is_none());
}

#[test]
fn deep_traversal_reaches_arbitrary_depth() {
    let forest = single("class A { class B { class C { class D { } } } }");
    let a = type_named(&forest, "A");

    assert_eq!(names(a.types(Depth::Shallow)), vec!["B"]);
    assert_eq!(names(a.types(Depth::Deep)), vec!["B", "C", "D"]);
}
