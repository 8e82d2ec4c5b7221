//! intentforge-core - IR, type classification, and generation coordination
//!
//! This crate provides the decision logic of the generator:
//! - [`JavaType`] and [`AnnotatedDeclaration`] for modeling host-compiler input
//! - [`classify`] for mapping a param field to its bundle put operation
//! - [`collect_param_fields`] for validated, ordered param-field collection
//! - [`synthesize_intent_method`] / [`synthesize_instance_method`] for the
//!   two factory-method shapes
//! - [`Coordinator`] for driving a full generation run round by round
//!
//! File writing and diagnostic output stay behind the narrow collaborator
//! traits ([`DiagnosticSink`], [`TypeIntrospection`], [`ClassEmitter`]);
//! the host build supplies the implementations.

mod classify;
mod collect;
mod coordinator;
mod decl;
mod error;
mod host;
mod method;
mod types;

pub use classify::{IDENTIFIER_PUT_OPS, PutOp, classify};
pub use collect::{KeyElementPair, collect_param_fields};
pub use coordinator::{Coordinator, DiscoveryRound, MethodAccumulator, RunState};
pub use decl::{AnnotatedDeclaration, Category, ElementKind, Member};
pub use error::{GenerateError, GenerateResult};
pub use host::{ClassEmitter, DiagnosticSink, TracingSink, TypeIntrospection};
pub use method::{
    GeneratedClass, INSTANCE_FACTORY_CLASS, INTENT_FACTORY_CLASS, MethodDescription, MethodParam,
    synthesize_instance_method, synthesize_intent_method,
};
pub use types::{JavaType, Primitive};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AnnotatedDeclaration, Category, ClassEmitter, Coordinator, DiagnosticSink, DiscoveryRound,
        ElementKind, GenerateError, GenerateResult, GeneratedClass, JavaType, Member,
        MethodDescription, Primitive, PutOp, RunState, TracingSink, TypeIntrospection,
    };
}
