//! Java class rendering.

use intentforge_core::{GeneratedClass, MethodDescription};
use std::collections::BTreeSet;

/// Render a generated class to Java source.
///
/// Output is deterministic for a given class and package: imports are
/// deduplicated and sorted, statements keep synthesis order, and the same
/// input always renders byte-identical text.
pub fn render_class(class: &GeneratedClass, package: &str) -> String {
    let mut code = String::new();

    code.push_str(&format!("package {package};\n"));

    let imports = collect_imports(&class.methods);
    if !imports.is_empty() {
        code.push('\n');
        for import in &imports {
            code.push_str(&format!("import {import};\n"));
        }
    }

    code.push('\n');
    code.push_str(&format!(
        "{} class {} {{\n",
        class.modifiers.join(" "),
        class.name
    ));

    for method in &class.methods {
        code.push('\n');
        render_method(&mut code, method);
    }

    code.push_str("}\n");

    code
}

/// Gather the import block: every qualified name the methods rely on,
/// sorted, deduplicated, with always-visible `java.lang` dropped.
// TODO: fall back to qualified in-body spelling when two imports share a simple name
fn collect_imports(methods: &[MethodDescription]) -> BTreeSet<String> {
    methods
        .iter()
        .flat_map(|m| m.imports.iter())
        .filter(|import| !import.starts_with("java.lang."))
        .cloned()
        .collect()
}

fn render_method(code: &mut String, method: &MethodDescription) {
    let params = method
        .params
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(", ");

    code.push_str(&format!(
        "    public static {} {}({}) {{\n",
        method.return_type, method.name, params
    ));
    for statement in &method.statements {
        code.push_str(&format!("        {statement};\n"));
    }
    code.push_str("    }\n");
}

#[cfg(test)]
#[path = "render/render_tests.rs"]
mod render_tests;
