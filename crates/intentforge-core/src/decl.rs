//! Host-compiler input model: annotated declarations and their members.

use crate::JavaType;
use serde::{Deserialize, Serialize};

/// Which factory a marked declaration feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A navigable UI destination; source of an intent-construction method.
    Screen,
    /// An embeddable UI unit; source of an instance-construction method.
    FragmentView,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Screen => write!(f, "screen"),
            Category::FragmentView => write!(f, "fragment-view"),
        }
    }
}

/// The source-element kind of a marked declaration.
///
/// Only [`ElementKind::Class`] declarations are valid generation input;
/// everything else is a fatal validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    #[default]
    Class,
    Interface,
    Enum,
    Field,
    Method,
    Other,
}

impl ElementKind {
    pub const fn is_class(self) -> bool {
        matches!(self, ElementKind::Class)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Class => write!(f, "class"),
            ElementKind::Interface => write!(f, "interface"),
            ElementKind::Enum => write!(f, "enum"),
            ElementKind::Field => write!(f, "field"),
            ElementKind::Method => write!(f, "method"),
            ElementKind::Other => write!(f, "other"),
        }
    }
}

/// A member enclosed by a marked declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// The field's identifier.
    pub name: String,
    /// The field's declared type.
    pub ty: JavaType,
    /// The parameter marker's key, if the member carries the marker.
    /// An empty key is a recoverable validation failure.
    pub param_key: Option<String>,
}

impl Member {
    /// Create a member without a parameter marker.
    pub fn new(name: impl Into<String>, ty: JavaType) -> Self {
        Self {
            name: name.into(),
            ty,
            param_key: None,
        }
    }

    /// Attach a parameter marker with the given key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.param_key = Some(key.into());
        self
    }
}

/// A class-like declaration carrying a category marker.
///
/// Immutable input from the host compiler; one per marked class; lives for
/// a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedDeclaration {
    /// The declaration's simple name (`DetailActivity`).
    pub simple_name: String,
    /// The declaration's qualified name (`com.example.DetailActivity`).
    pub qualified_name: String,
    /// The source-element kind the marker was applied to.
    pub kind: ElementKind,
    /// Enclosed members in declaration order.
    pub members: Vec<Member>,
}

impl AnnotatedDeclaration {
    /// Create a class declaration with no members.
    pub fn new(simple_name: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        Self {
            simple_name: simple_name.into(),
            qualified_name: qualified_name.into(),
            kind: ElementKind::Class,
            members: Vec::new(),
        }
    }

    /// Append a member, preserving declaration order.
    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Override the element kind (used to model misapplied markers).
    #[must_use]
    pub fn with_kind(mut self, kind: ElementKind) -> Self {
        self.kind = kind;
        self
    }
}

#[cfg(test)]
#[path = "decl/decl_tests.rs"]
mod decl_tests;
