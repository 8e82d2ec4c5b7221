//! Error types for generation runs

use crate::{Category, ElementKind};
use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Fatal failures of a generation run.
///
/// Both variants halt the run: the coordinator reports them through the
/// diagnostic sink and moves to its failed state, emitting no output.
/// The recoverable empty-key case is a warning, not an error.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A category marker was applied to something other than a class
    #[error("the {category} marker can only be applied to classes, found {kind} {name}")]
    InvalidElementKind {
        category: Category,
        kind: ElementKind,
        name: String,
    },

    /// No classification rule matched a param field's type
    #[error("unsupported param type {ty} for field {field} in {declaration}")]
    UnsupportedType {
        field: String,
        declaration: String,
        ty: String,
    },
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
