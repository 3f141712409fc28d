// Workflow Tools — Preview and validate AI workflow JSON documents
// License: Apache-2.0

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot locate the running executable: {0}")]
    CurrentExe(#[from] std::io::Error),
    #[error("executable path has no parent directory: {}", .0.display())]
    NoToolDir(PathBuf),
}

// ---------------------------------------------------------------------------
// Validator paths
// ---------------------------------------------------------------------------

/// Where the validator finds its schema and candidate documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub schema_file: PathBuf,
    /// Scanned in order, non-recursively.
    pub search_dirs: Vec<PathBuf>,
}

impl ToolPaths {
    /// Layout below a repository root: `schemas/`, `models/`, `examples/`.
    pub fn from_root(root: &Path) -> Self {
        Self {
            schema_file: root.join("schemas").join("workflow.schema.json"),
            search_dirs: vec![root.join("models"), root.join("examples")],
        }
    }

    /// Paths relative to the directory holding the tool: `<tool-dir>/../...`.
    pub fn from_tool_dir(tool_dir: &Path) -> Self {
        Self::from_root(&tool_dir.join(".."))
    }

    /// Resolve paths for the running executable.
    pub fn resolve() -> Result<Self, ConfigError> {
        let exe = std::env::current_exe()?;
        let tool_dir = exe
            .parent()
            .ok_or_else(|| ConfigError::NoToolDir(exe.clone()))?;
        tracing::debug!(tool_dir = %tool_dir.display(), "Resolved tool directory");
        Ok(Self::from_tool_dir(tool_dir))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
