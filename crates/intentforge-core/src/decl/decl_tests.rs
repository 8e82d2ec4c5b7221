#![allow(non_snake_case)]

use super::*;

#[test]
fn Category___display___uses_marker_spelling() {
    assert_eq!(Category::Screen.to_string(), "screen");
    assert_eq!(Category::FragmentView.to_string(), "fragment-view");
}

#[test]
fn ElementKind___is_class___only_for_class() {
    assert!(ElementKind::Class.is_class());

    for kind in [
        ElementKind::Interface,
        ElementKind::Enum,
        ElementKind::Field,
        ElementKind::Method,
        ElementKind::Other,
    ] {
        assert!(!kind.is_class(), "{kind} should not count as a class");
    }
}

#[test]
fn ElementKind___default___is_class() {
    assert_eq!(ElementKind::default(), ElementKind::Class);
}

#[test]
fn Member___with_key___attaches_param_marker() {
    let member = Member::new("id", JavaType::parse("String")).with_key("id");

    assert_eq!(member.param_key.as_deref(), Some("id"));
}

#[test]
fn Member___new___has_no_marker() {
    let member = Member::new("cache", JavaType::parse("com.example.Cache"));

    assert_eq!(member.param_key, None);
}

#[test]
fn AnnotatedDeclaration___with_member___preserves_declaration_order() {
    let declaration = AnnotatedDeclaration::new("DetailActivity", "com.example.DetailActivity")
        .with_member(Member::new("first", JavaType::parse("int")))
        .with_member(Member::new("second", JavaType::parse("long")));

    let names: Vec<&str> = declaration.members.iter().map(|m| m.name.as_str()).collect();

    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn AnnotatedDeclaration___with_kind___overrides_default() {
    let declaration =
        AnnotatedDeclaration::new("NotAClass", "com.example.NotAClass").with_kind(ElementKind::Interface);

    assert_eq!(declaration.kind, ElementKind::Interface);
}
