//! Factory-method synthesis.
//!
//! One method per annotated declaration: screens get a navigation-intent
//! constructor, fragment-views get an instance constructor. Bodies are
//! assembled as ordered Java statements without trailing semicolons; the
//! renderer owns punctuation and layout.

use crate::{
    AnnotatedDeclaration, DiagnosticSink, GenerateResult, TypeIntrospection, classify,
    collect_param_fields,
};

pub const INTENT_FACTORY_CLASS: &str = "IntentFactory";
pub const INSTANCE_FACTORY_CLASS: &str = "InstanceFactory";

const METHOD_PREFIX_NEW_INTENT: &str = "newIntentFor";
const METHOD_PREFIX_NEW_INSTANCE: &str = "newInstanceOf";

const INTENT_CLASS: &str = "Intent";
const INTENT_IMPORT: &str = "android.content.Intent";
const CONTEXT_CLASS: &str = "Context";
const CONTEXT_IMPORT: &str = "android.content.Context";
const BUNDLE_CLASS: &str = "Bundle";
const BUNDLE_IMPORT: &str = "android.os.Bundle";

const PARAM_NAME_CONTEXT: &str = "context";
const CLASS_SUFFIX: &str = ".class";

/// A formal parameter of a synthesized method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodParam {
    pub ty: String,
    pub name: String,
}

impl MethodParam {
    fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// A synthesized method's shape: name, return type, ordered parameters,
/// ordered body statements, plus the qualified names the statements rely
/// on (the renderer dedupes these into the file's import block).
///
/// All synthesized methods are `public static`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescription {
    pub name: String,
    pub return_type: String,
    pub params: Vec<MethodParam>,
    pub statements: Vec<String>,
    pub imports: Vec<String>,
}

/// An assembled factory class, handed to the class emitter once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    pub name: &'static str,
    pub modifiers: &'static [&'static str],
    pub methods: Vec<MethodDescription>,
}

const CLASS_MODIFIERS: &[&str] = &["public", "final"];

impl GeneratedClass {
    /// Assemble the `IntentFactory` from accumulated intent methods.
    pub fn intent_factory(methods: Vec<MethodDescription>) -> Self {
        Self {
            name: INTENT_FACTORY_CLASS,
            modifiers: CLASS_MODIFIERS,
            methods,
        }
    }

    /// Assemble the `InstanceFactory` from accumulated instance methods.
    pub fn instance_factory(methods: Vec<MethodDescription>) -> Self {
        Self {
            name: INSTANCE_FACTORY_CLASS,
            modifiers: CLASS_MODIFIERS,
            methods,
        }
    }
}

/// Synthesize the navigation-intent constructor for a screen declaration.
///
/// With no valid param fields the body is a single statement returning a
/// minimal intent; the target is spelled with the qualified name there and
/// with the simple name on the parameterized branch. Intent extras ride
/// the overloaded `putExtra`, so this path never consults the classifier.
pub fn synthesize_intent_method(
    declaration: &AnnotatedDeclaration,
    sink: &dyn DiagnosticSink,
) -> MethodDescription {
    let mut params = vec![MethodParam::new(CONTEXT_CLASS, PARAM_NAME_CONTEXT)];
    let mut statements = Vec::new();
    let mut imports = vec![INTENT_IMPORT.to_string(), CONTEXT_IMPORT.to_string()];

    let pairs = collect_param_fields(declaration, sink);
    if pairs.is_empty() {
        statements.push(format!(
            "return new {INTENT_CLASS}({PARAM_NAME_CONTEXT}, {}{CLASS_SUFFIX})",
            declaration.qualified_name
        ));
    } else {
        statements.push(format!(
            "final {INTENT_CLASS} intent = new {INTENT_CLASS}({PARAM_NAME_CONTEXT}, {}{CLASS_SUFFIX})",
            declaration.simple_name
        ));
        if declaration.qualified_name.contains('.') {
            imports.push(declaration.qualified_name.clone());
        }
        for pair in &pairs {
            params.push(MethodParam::new(
                pair.member.ty.simple_name(),
                &pair.member.name,
            ));
            if let Some(import) = pair.member.ty.import_path() {
                imports.push(import.to_string());
            }
            statements.push(format!(
                "intent.putExtra(\"{}\", {})",
                pair.key, pair.member.name
            ));
        }
        statements.push("return intent".to_string());
    }

    MethodDescription {
        name: format!("{METHOD_PREFIX_NEW_INTENT}{}", declaration.simple_name),
        return_type: INTENT_CLASS.to_string(),
        params,
        statements,
        imports,
    }
}

/// Synthesize the instance constructor for a fragment-view declaration.
///
/// Each param field is classified to pick the exact argument-bundle put
/// operation; an unclassifiable field fails the whole run.
pub fn synthesize_instance_method(
    declaration: &AnnotatedDeclaration,
    sink: &dyn DiagnosticSink,
    types: &dyn TypeIntrospection,
) -> GenerateResult<MethodDescription> {
    let mut params = Vec::new();
    let mut statements = Vec::new();
    let mut imports = Vec::new();

    if declaration.qualified_name.contains('.') {
        imports.push(declaration.qualified_name.clone());
    }

    let pairs = collect_param_fields(declaration, sink);
    if pairs.is_empty() {
        statements.push(format!("return new {}()", declaration.simple_name));
    } else {
        imports.push(BUNDLE_IMPORT.to_string());
        statements.push(format!("final {BUNDLE_CLASS} args = new {BUNDLE_CLASS}()"));
        for pair in &pairs {
            let put_op = classify(&pair.member, &declaration.simple_name, types)?;
            params.push(MethodParam::new(
                pair.member.ty.simple_name(),
                &pair.member.name,
            ));
            if let Some(import) = pair.member.ty.import_path() {
                imports.push(import.to_string());
            }
            statements.push(format!(
                "args.{}(\"{}\", {})",
                put_op.method_name(),
                pair.key,
                pair.member.name
            ));
        }
        statements.push(format!(
            "final {name} instance = new {name}()",
            name = declaration.simple_name
        ));
        statements.push("instance.setArguments(args)".to_string());
        statements.push("return instance".to_string());
    }

    Ok(MethodDescription {
        name: format!("{METHOD_PREFIX_NEW_INSTANCE}{}", declaration.simple_name),
        return_type: declaration.simple_name.clone(),
        params,
        statements,
        imports,
    })
}
