//! The `check` command: validate a compilation model without writing output.

use crate::model::{CompilationModel, RegistryIntrospection};
use anyhow::{Result, bail};
use intentforge_core::{Category, TracingSink, classify, collect_param_fields};
use std::path::Path;

pub fn run(model_path: &str) -> Result<()> {
    let model = CompilationModel::load(Path::new(model_path))?;
    let types = RegistryIntrospection::from_model(&model);
    let sink = TracingSink;

    let mut problems = 0usize;

    for (category, declarations) in [
        (Category::Screen, &model.screens),
        (Category::FragmentView, &model.fragment_views),
    ] {
        for declaration_model in declarations {
            let declaration = declaration_model.to_declaration();

            if !declaration.kind.is_class() {
                tracing::error!(
                    "the {category} marker can only be applied to classes, found {} {}",
                    declaration.kind,
                    declaration.simple_name
                );
                problems += 1;
                continue;
            }

            let pairs = collect_param_fields(&declaration, &sink);

            // Only argument bundles need a typed put operation; intent
            // extras ride the overloaded putExtra and always pass.
            if category == Category::FragmentView {
                for pair in &pairs {
                    if let Err(err) = classify(&pair.member, &declaration.simple_name, &types) {
                        tracing::error!("{err}");
                        problems += 1;
                    }
                }
            }
        }
    }

    if problems > 0 {
        bail!("model check found {problems} problem(s)");
    }

    tracing::info!(
        screens = model.screens.len(),
        fragment_views = model.fragment_views.len(),
        "model ok"
    );
    Ok(())
}
