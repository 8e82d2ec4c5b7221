//! Round-driven generation coordination.
//!
//! The host compiler invokes [`Coordinator::process_round`] once per
//! discovery round, synchronously. Methods accumulate across rounds inside
//! the coordinator; the two factories are assembled and emitted only when
//! the host signals that discovery is over.

use crate::{
    AnnotatedDeclaration, Category, ClassEmitter, DiagnosticSink, GenerateError, GenerateResult,
    GeneratedClass, MethodDescription, TypeIntrospection, synthesize_instance_method,
    synthesize_intent_method,
};
use serde::{Deserialize, Serialize};

/// Generation run states
///
/// State transitions:
/// ```text
/// Collecting → Finalizing → Done
///      │
///      └→ Failed (on validation or classification failure)
/// ```
///
/// `Finalizing` never persists across rounds; assembly and emission happen
/// within the round that observes the processing-over signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Accumulating synthesized methods round by round
    #[default]
    Collecting,
    /// Assembling and emitting the two factories
    Finalizing,
    /// Finalization was attempted; nothing further will happen
    Done,
    /// The run halted on a fatal error; no output is emitted
    Failed,
}

impl RunState {
    /// Check if this state can transition to the target state
    pub fn can_transition_to(&self, target: RunState) -> bool {
        use RunState::*;
        matches!(
            (self, target),
            (Collecting, Finalizing) | (Finalizing, Done) | (Collecting, Failed)
        )
    }

    /// Check if the run has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done | RunState::Failed)
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::Collecting => write!(f, "Collecting"),
            RunState::Finalizing => write!(f, "Finalizing"),
            RunState::Done => write!(f, "Done"),
            RunState::Failed => write!(f, "Failed"),
        }
    }
}

/// One discovery round's worth of annotated declarations.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryRound {
    pub screens: Vec<AnnotatedDeclaration>,
    pub fragment_views: Vec<AnnotatedDeclaration>,
    /// The host's signal that no more rounds will occur.
    pub processing_over: bool,
}

/// The two method lists accumulated over a run.
///
/// Owned exclusively by the coordinator until finalization; every screen
/// declaration contributes exactly one intent method and every
/// fragment-view declaration exactly one instance method.
#[derive(Debug, Clone, Default)]
pub struct MethodAccumulator {
    pub intent_methods: Vec<MethodDescription>,
    pub instance_methods: Vec<MethodDescription>,
}

/// Drives one full generation run.
pub struct Coordinator {
    sink: Box<dyn DiagnosticSink>,
    types: Box<dyn TypeIntrospection>,
    emitter: Box<dyn ClassEmitter>,
    package: String,
    accumulator: MethodAccumulator,
    state: RunState,
    round: i64,
}

impl Coordinator {
    /// Create a coordinator for a single run.
    ///
    /// The collaborators are installed here, once; the legacy round-zero
    /// environment setup collapses into construction.
    pub fn new(
        sink: Box<dyn DiagnosticSink>,
        types: Box<dyn TypeIntrospection>,
        emitter: Box<dyn ClassEmitter>,
        package: impl Into<String>,
    ) -> Self {
        Self {
            sink,
            types,
            emitter,
            package: package.into(),
            accumulator: MethodAccumulator::default(),
            state: RunState::Collecting,
            round: -1,
        }
    }

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Methods accumulated so far (exposed for inspection and tests).
    pub fn accumulator(&self) -> &MethodAccumulator {
        &self.accumulator
    }

    /// Process one discovery round and answer the host's "processing
    /// complete?" query: `true` only once finalization has been attempted.
    pub fn process_round(&mut self, round: &DiscoveryRound) -> bool {
        self.round += 1;
        if self.round == 0 {
            tracing::debug!(package = %self.package, "generation run started");
        }

        match self.state {
            RunState::Done => {
                tracing::debug!(round = self.round, "run already finalized, nothing to do");
                return true;
            }
            RunState::Failed => return false,
            RunState::Collecting => {}
            // Finalizing is transient within a round and never observed here.
            RunState::Finalizing => return false,
        }

        if let Err(err) = self.collect_round(round) {
            self.sink.error(&err.to_string());
            self.state = RunState::Failed;
            return false;
        }

        if round.processing_over {
            self.finalize();
            return true;
        }

        false
    }

    fn collect_round(&mut self, round: &DiscoveryRound) -> GenerateResult<()> {
        for declaration in &round.screens {
            ensure_class(declaration, Category::Screen)?;
            let method = synthesize_intent_method(declaration, self.sink.as_ref());
            self.accumulator.intent_methods.push(method);
        }

        for declaration in &round.fragment_views {
            ensure_class(declaration, Category::FragmentView)?;
            let method = synthesize_instance_method(
                declaration,
                self.sink.as_ref(),
                self.types.as_ref(),
            )?;
            self.accumulator.instance_methods.push(method);
        }

        Ok(())
    }

    /// Assemble both factories and hand them to the emitter. An I/O failure
    /// is logged and the run still completes; there is no retry.
    fn finalize(&mut self) {
        self.state = RunState::Finalizing;

        let accumulated = std::mem::take(&mut self.accumulator);
        let factories = [
            GeneratedClass::intent_factory(accumulated.intent_methods),
            GeneratedClass::instance_factory(accumulated.instance_methods),
        ];

        for factory in &factories {
            if let Err(err) = self.emitter.emit(factory, &self.package) {
                self.sink
                    .error(&format!("failed to write {}: {err}", factory.name));
            } else {
                tracing::debug!(class = factory.name, "factory emitted");
            }
        }

        self.state = RunState::Done;
    }
}

fn ensure_class(declaration: &AnnotatedDeclaration, category: Category) -> GenerateResult<()> {
    if declaration.kind.is_class() {
        Ok(())
    } else {
        Err(GenerateError::InvalidElementKind {
            category,
            kind: declaration.kind,
            name: declaration.simple_name.clone(),
        })
    }
}
