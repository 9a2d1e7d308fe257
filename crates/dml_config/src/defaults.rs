//! Default Resolver - Defaults that depend on the process environment

use std::path::{Path, PathBuf};

/// Supplies defaults that cannot be fixed at compile time.
pub trait DefaultResolver {
    /// Root directory holding the training datasets.
    fn source_path(&self) -> PathBuf;

    /// Directory that receives checkpoints and result logs.
    fn save_path(&self) -> PathBuf;
}

/// Resolves path defaults relative to a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDir {
    root: PathBuf,
}

impl WorkingDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Captures the current working directory of the process.
    pub fn from_process() -> std::io::Result<Self> {
        let root = std::env::current_dir()?;
        tracing::debug!("Resolving path defaults against {}", root.display());
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DefaultResolver for WorkingDir {
    fn source_path(&self) -> PathBuf {
        self.root.join("../../Datasets")
    }

    fn save_path(&self) -> PathBuf {
        self.root.join("Training_Results")
    }
}
