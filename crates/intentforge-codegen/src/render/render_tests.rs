#![allow(non_snake_case)]

use super::*;
use intentforge_core::{
    AnnotatedDeclaration, DiagnosticSink, GeneratedClass, JavaType, Member, TypeIntrospection,
    synthesize_instance_method, synthesize_intent_method,
};

struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

struct NoTypes;

impl TypeIntrospection for NoTypes {
    fn is_parcelable(&self, _ty: &JavaType) -> bool {
        false
    }

    fn is_serializable(&self, _ty: &JavaType) -> bool {
        false
    }
}

#[test]
fn render_class___no_methods___renders_package_and_shell() {
    let class = GeneratedClass::intent_factory(Vec::new());

    let code = render_class(&class, "com.example.generated");

    assert_eq!(
        code,
        "package com.example.generated;\n\npublic final class IntentFactory {\n}\n"
    );
}

#[test]
fn render_class___intent_method___matches_expected_source() {
    let declaration = AnnotatedDeclaration::new("DetailActivity", "com.example.app.DetailActivity")
        .with_member(Member::new("id", JavaType::parse("String")).with_key("id"));
    let method = synthesize_intent_method(&declaration, &NullSink);
    let class = GeneratedClass::intent_factory(vec![method]);

    let code = render_class(&class, "com.example.generated");

    let expected = "\
package com.example.generated;

import android.content.Context;
import android.content.Intent;
import com.example.app.DetailActivity;

public final class IntentFactory {

    public static Intent newIntentForDetailActivity(Context context, String id) {
        final Intent intent = new Intent(context, DetailActivity.class);
        intent.putExtra(\"id\", id);
        return intent;
    }
}
";
    assert_eq!(code, expected);
}

#[test]
fn render_class___instance_method___matches_expected_source() {
    let declaration = AnnotatedDeclaration::new("ListFragment", "com.example.app.ListFragment");
    let method = synthesize_instance_method(&declaration, &NullSink, &NoTypes).unwrap();
    let class = GeneratedClass::instance_factory(vec![method]);

    let code = render_class(&class, "com.example.generated");

    let expected = "\
package com.example.generated;

import com.example.app.ListFragment;

public final class InstanceFactory {

    public static ListFragment newInstanceOfListFragment() {
        return new ListFragment();
    }
}
";
    assert_eq!(code, expected);
}

#[test]
fn render_class___imports___sorted_and_deduplicated() {
    let first = AnnotatedDeclaration::new("AlphaActivity", "com.example.app.AlphaActivity")
        .with_member(Member::new("id", JavaType::parse("String")).with_key("id"));
    let second = AnnotatedDeclaration::new("BetaActivity", "com.example.app.BetaActivity")
        .with_member(Member::new("id", JavaType::parse("String")).with_key("id"));
    let class = GeneratedClass::intent_factory(vec![
        synthesize_intent_method(&first, &NullSink),
        synthesize_intent_method(&second, &NullSink),
    ]);

    let code = render_class(&class, "com.example.generated");

    // Both methods pull in the framework imports; each appears once.
    assert_eq!(code.matches("import android.content.Intent;").count(), 1);
    assert_eq!(code.matches("import android.content.Context;").count(), 1);

    let alpha = code.find("import com.example.app.AlphaActivity;").unwrap();
    let beta = code.find("import com.example.app.BetaActivity;").unwrap();
    let android = code.find("import android.content.Context;").unwrap();
    assert!(android < alpha && alpha < beta);
}

#[test]
fn render_class___java_lang_imports___filtered_out() {
    let declaration = AnnotatedDeclaration::new("DetailActivity", "com.example.app.DetailActivity")
        .with_member(Member::new("id", JavaType::parse("java.lang.String")).with_key("id"));
    let class = GeneratedClass::intent_factory(vec![synthesize_intent_method(&declaration, &NullSink)]);

    let code = render_class(&class, "com.example.generated");

    assert!(!code.contains("import java.lang.String;"));
    assert!(code.contains("String id"));
}

#[test]
fn render_class___same_input_twice___byte_identical() {
    let declaration = AnnotatedDeclaration::new("DetailActivity", "com.example.app.DetailActivity")
        .with_member(Member::new("count", JavaType::parse("int")).with_key("count"));
    let class = GeneratedClass::intent_factory(vec![synthesize_intent_method(&declaration, &NullSink)]);

    let first = render_class(&class, "com.example.generated");
    let second = render_class(&class, "com.example.generated");

    assert_eq!(first, second);
}
