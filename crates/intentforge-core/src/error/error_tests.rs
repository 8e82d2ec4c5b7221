#![allow(non_snake_case)]

use super::*;

#[test]
fn GenerateError___invalid_element_kind___displays_category_kind_and_name() {
    let err = GenerateError::InvalidElementKind {
        category: Category::Screen,
        kind: ElementKind::Interface,
        name: "Navigator".to_string(),
    };

    assert_eq!(
        err.to_string(),
        "the screen marker can only be applied to classes, found interface Navigator"
    );
}

#[test]
fn GenerateError___invalid_fragment_view_kind___names_marker() {
    let err = GenerateError::InvalidElementKind {
        category: Category::FragmentView,
        kind: ElementKind::Enum,
        name: "Mode".to_string(),
    };

    assert!(err.to_string().contains("fragment-view"));
    assert!(err.to_string().contains("Mode"));
}

#[test]
fn GenerateError___unsupported_type___displays_field_declaration_and_type() {
    let err = GenerateError::UnsupportedType {
        field: "callback".to_string(),
        declaration: "DetailActivity".to_string(),
        ty: "com.example.Callback".to_string(),
    };

    assert_eq!(
        err.to_string(),
        "unsupported param type com.example.Callback for field callback in DetailActivity"
    );
}
