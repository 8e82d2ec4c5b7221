//! The `generate` command: drive a full generation run over a model.

use crate::model::{CompilationModel, RegistryIntrospection};
use anyhow::{Result, bail};
use intentforge_codegen::DirectoryEmitter;
use intentforge_core::{Coordinator, DiscoveryRound, RunState, TracingSink};
use std::path::Path;

/// Package used when neither the flag nor the model names one.
pub const DEFAULT_PACKAGE: &str = "com.example.generated";

pub fn run(model_path: &str, output: &str, package: Option<String>) -> Result<()> {
    let model = CompilationModel::load(Path::new(model_path))?;

    let package = package
        .or_else(|| model.package.clone())
        .unwrap_or_else(|| DEFAULT_PACKAGE.to_string());

    let mut coordinator = Coordinator::new(
        Box::new(TracingSink),
        Box::new(RegistryIntrospection::from_model(&model)),
        Box::new(DirectoryEmitter::new(output)),
        package.as_str(),
    );

    // Mirror the host protocol: one round of discovered declarations, then
    // an empty closing round carrying the processing-over signal.
    coordinator.process_round(&model.discovery_round());
    if coordinator.state() != RunState::Failed {
        coordinator.process_round(&DiscoveryRound {
            processing_over: true,
            ..DiscoveryRound::default()
        });
    }

    if coordinator.state() != RunState::Done {
        bail!("generation failed; diagnostics were reported above");
    }

    tracing::info!(
        screens = model.screens.len(),
        fragment_views = model.fragment_views.len(),
        package = %package,
        output = %output,
        "generated IntentFactory and InstanceFactory"
    );
    Ok(())
}
