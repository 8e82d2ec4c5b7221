//! Filesystem-backed class emitter.

use crate::render_class;
use intentforge_core::{ClassEmitter, GeneratedClass};
use std::fs;
use std::path::PathBuf;

/// Writes generated classes as `.java` files under a package directory,
/// creating the directory hierarchy on demand.
#[derive(Debug, Clone)]
pub struct DirectoryEmitter {
    output_dir: PathBuf,
}

impl DirectoryEmitter {
    /// Create an emitter rooted at `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The path a class will be written to.
    pub fn target_path(&self, class_name: &str, package: &str) -> PathBuf {
        self.output_dir
            .join(package.replace('.', "/"))
            .join(format!("{class_name}.java"))
    }
}

impl ClassEmitter for DirectoryEmitter {
    fn emit(&self, class: &GeneratedClass, package: &str) -> Result<(), std::io::Error> {
        let path = self.target_path(class.name, package);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, render_class(class, package))?;
        tracing::debug!(path = %path.display(), "wrote generated class");
        Ok(())
    }
}
