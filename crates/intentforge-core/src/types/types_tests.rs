#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// Primitive

#[test_case("boolean", Primitive::Boolean)]
#[test_case("byte", Primitive::Byte)]
#[test_case("short", Primitive::Short)]
#[test_case("int", Primitive::Int)]
#[test_case("long", Primitive::Long)]
#[test_case("char", Primitive::Char)]
#[test_case("float", Primitive::Float)]
#[test_case("double", Primitive::Double)]
fn Primitive___from_name___parses_keyword(name: &str, expected: Primitive) {
    assert_eq!(Primitive::from_name(name), Some(expected));
}

#[test_case(Primitive::Boolean, "Boolean")]
#[test_case(Primitive::Int, "Integer")]
#[test_case(Primitive::Char, "Character")]
#[test_case(Primitive::Double, "Double")]
fn Primitive___boxed_name___matches_box_class(primitive: Primitive, expected: &str) {
    assert_eq!(primitive.boxed_name(), expected);
}

#[test]
fn Primitive___from_boxed_name___roundtrips_all() {
    for name in ["boolean", "byte", "short", "int", "long", "char", "float", "double"] {
        let primitive = Primitive::from_name(name).unwrap();

        assert_eq!(
            Primitive::from_boxed_name(primitive.boxed_name()),
            Some(primitive)
        );
    }
}

#[test]
fn Primitive___from_name___rejects_reference_types() {
    assert_eq!(Primitive::from_name("String"), None);
    assert_eq!(Primitive::from_name("Integer"), None);
}

// JavaType::parse

#[test]
fn JavaType___parse_primitive___returns_primitive() {
    let ty = JavaType::parse("int");

    assert_eq!(ty, JavaType::Primitive(Primitive::Int));
    assert!(ty.is_primitive());
}

#[test]
fn JavaType___parse_boxed___returns_boxed() {
    let ty = JavaType::parse("Integer");

    assert_eq!(ty, JavaType::Boxed(Primitive::Int));
    assert!(ty.is_boxed());
}

#[test]
fn JavaType___parse_qualified___splits_simple_name() {
    let ty = JavaType::parse("com.example.User");

    assert_eq!(
        ty,
        JavaType::Declared {
            simple: "User".to_string(),
            qualified: "com.example.User".to_string(),
        }
    );
}

#[test]
fn JavaType___parse_unqualified_reference___keeps_spelling() {
    let ty = JavaType::parse("String");

    assert_eq!(ty.simple_name(), "String");
    assert_eq!(ty.import_path(), None);
}

// simple_name / import_path

#[test_case("int", "int")]
#[test_case("Integer", "Integer")]
#[test_case("String", "String")]
#[test_case("com.example.User", "User")]
fn JavaType___simple_name___renders_short_spelling(source: &str, expected: &str) {
    assert_eq!(JavaType::parse(source).simple_name(), expected);
}

#[test]
fn JavaType___import_path___only_for_dotted_declared_types() {
    assert_eq!(
        JavaType::parse("com.example.User").import_path(),
        Some("com.example.User")
    );
    assert_eq!(JavaType::parse("String").import_path(), None);
    assert_eq!(JavaType::parse("int").import_path(), None);
    assert_eq!(JavaType::parse("Long").import_path(), None);
}

// Display

#[test]
fn JavaType___display___uses_qualified_for_declared() {
    assert_eq!(JavaType::parse("com.example.User").to_string(), "com.example.User");
    assert_eq!(JavaType::parse("int").to_string(), "int");
    assert_eq!(JavaType::parse("Character").to_string(), "Character");
}
