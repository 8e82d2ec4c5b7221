//! Collaborator traits supplied by the host build.
//!
//! Generation only needs three things from the outside world: somewhere to
//! report diagnostics, an answer to "what does this type implement", and a
//! place to put finished classes. Each is a narrow trait so tests can swap
//! in recording fakes.

use crate::{GeneratedClass, JavaType};

/// Diagnostic output channel.
///
/// Both methods are fire-and-forget: they never fail and never block.
/// The host decides whether reported errors fail the build.
pub trait DiagnosticSink {
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Supertype capability queries for the classifier's slow path.
pub trait TypeIntrospection {
    fn is_parcelable(&self, ty: &JavaType) -> bool;
    fn is_serializable(&self, ty: &JavaType) -> bool;
}

/// Destination for assembled factory classes.
///
/// Invoked exactly twice per successful run, once per factory; each write
/// is independently fallible and is not retried.
pub trait ClassEmitter {
    fn emit(&self, class: &GeneratedClass, package: &str) -> Result<(), std::io::Error>;
}

/// [`DiagnosticSink`] that forwards to the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
