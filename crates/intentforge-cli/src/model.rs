//! Compilation-model input.
//!
//! The host build exports one JSON document per generation run: the
//! declarations discovered under each marker, plus the registries backing
//! the parcelable/serializable introspection queries.
//!
//! ```json
//! {
//!     "package": "com.example.app.nav",
//!     "screens": [
//!         {
//!             "name": "DetailActivity",
//!             "qualified_name": "com.example.app.DetailActivity",
//!             "members": [
//!                 { "name": "id", "type": "String", "param_key": "id" }
//!             ]
//!         }
//!     ],
//!     "fragment_views": [],
//!     "parcelable_types": ["com.example.app.User"],
//!     "serializable_types": ["java.util.Date"]
//! }
//! ```

use anyhow::{Context, Result};
use intentforge_core::{
    AnnotatedDeclaration, DiscoveryRound, ElementKind, JavaType, Member, TypeIntrospection,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// One generation run's worth of host-compiler discovery output.
#[derive(Debug, Clone, Deserialize)]
pub struct CompilationModel {
    /// Target package for the generated factories.
    #[serde(default)]
    pub package: Option<String>,

    /// Declarations carrying the screen marker.
    #[serde(default)]
    pub screens: Vec<DeclarationModel>,

    /// Declarations carrying the fragment-view marker.
    #[serde(default)]
    pub fragment_views: Vec<DeclarationModel>,

    /// Types the host knows to implement Parcelable.
    #[serde(default)]
    pub parcelable_types: Vec<String>,

    /// Types the host knows to implement Serializable.
    #[serde(default)]
    pub serializable_types: Vec<String>,
}

/// A marked declaration as exported by the host.
#[derive(Debug, Clone, Deserialize)]
pub struct DeclarationModel {
    pub name: String,

    #[serde(default)]
    pub qualified_name: Option<String>,

    #[serde(default)]
    pub kind: ElementKind,

    #[serde(default)]
    pub members: Vec<MemberModel>,
}

/// A declaration member as exported by the host.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberModel {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    /// Present when the member carries the parameter marker.
    #[serde(default)]
    pub param_key: Option<String>,
}

impl CompilationModel {
    /// Load a model from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read compilation model {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse compilation model {}", path.display()))
    }

    /// The model's declarations as one discovery round.
    pub fn discovery_round(&self) -> DiscoveryRound {
        DiscoveryRound {
            screens: self.screens.iter().map(DeclarationModel::to_declaration).collect(),
            fragment_views: self
                .fragment_views
                .iter()
                .map(DeclarationModel::to_declaration)
                .collect(),
            processing_over: false,
        }
    }
}

impl DeclarationModel {
    /// Convert to the core input model. A missing qualified name falls back
    /// to the simple name (a declaration in the default package).
    pub fn to_declaration(&self) -> AnnotatedDeclaration {
        AnnotatedDeclaration {
            simple_name: self.name.clone(),
            qualified_name: self.qualified_name.clone().unwrap_or_else(|| self.name.clone()),
            kind: self.kind,
            members: self
                .members
                .iter()
                .map(|member| Member {
                    name: member.name.clone(),
                    ty: JavaType::parse(&member.ty),
                    param_key: member.param_key.clone(),
                })
                .collect(),
        }
    }
}

/// [`TypeIntrospection`] backed by the model's type registries.
///
/// A registry entry matches a declared type by qualified name, or by simple
/// name for entries written without a package.
#[derive(Debug, Clone)]
pub struct RegistryIntrospection {
    parcelable: HashSet<String>,
    serializable: HashSet<String>,
}

impl RegistryIntrospection {
    pub fn from_model(model: &CompilationModel) -> Self {
        Self {
            parcelable: model.parcelable_types.iter().cloned().collect(),
            serializable: model.serializable_types.iter().cloned().collect(),
        }
    }

    fn contains(registry: &HashSet<String>, ty: &JavaType) -> bool {
        match ty {
            JavaType::Declared { simple, qualified } => {
                registry.contains(qualified) || registry.contains(simple)
            }
            JavaType::Primitive(_) | JavaType::Boxed(_) => false,
        }
    }
}

impl TypeIntrospection for RegistryIntrospection {
    fn is_parcelable(&self, ty: &JavaType) -> bool {
        Self::contains(&self.parcelable, ty)
    }

    fn is_serializable(&self, ty: &JavaType) -> bool {
        Self::contains(&self.serializable, ty)
    }
}
