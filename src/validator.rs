// Workflow Tools — Workflow validator
//
// Checks every `.json` document in the search directories against the
// workflow JSON Schema and reports one line per file plus a summary.

use crate::config::ToolPaths;
use jsonschema::Validator;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures that stop a run before any document is checked.
#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("failed to read {}: {source}", .path.display())]
    SchemaRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    SchemaParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid JSON Schema in {}: {message}", .path.display())]
    SchemaCompile { path: PathBuf, message: String },
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Compiled workflow schema.
pub struct SchemaValidator {
    validator: Validator,
}

impl SchemaValidator {
    /// Compile a schema document. The draft is taken from `$schema`.
    pub fn new(schema: &Value) -> Result<Self, String> {
        let validator = jsonschema::validator_for(schema).map_err(|e| e.to_string())?;
        Ok(Self { validator })
    }

    /// Read, parse and compile the schema file.
    pub async fn load(path: &Path) -> Result<Self, ValidateError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ValidateError::SchemaRead {
                path: path.to_path_buf(),
                source,
            })?;
        let schema: Value =
            serde_json::from_str(&content).map_err(|source| ValidateError::SchemaParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(&schema).map_err(|message| ValidateError::SchemaCompile {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Check a document, returning the first violation's message.
    pub fn check(&self, document: &Value) -> Result<(), String> {
        self.validator.validate(document).map_err(|e| e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

/// List `.json` files directly inside each directory.
///
/// Missing directories contribute nothing. Within a directory, files are
/// sorted by name so output is stable across runs.
pub async fn discover(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for dir in dirs {
        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(dir = %dir.display(), "Search directory does not exist");
                continue;
            }
            Err(e) => {
                tracing::warn!("Failed to list {}: {}", dir.display(), e);
                continue;
            }
        };

        let mut names = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!("Stopped listing {} early: {}", dir.display(), e);
                    break;
                }
            };
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.ends_with(".json") {
                continue;
            }
            let path = entry.path();
            match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => names.push(name),
                _ => tracing::debug!(path = %path.display(), "Skipping non-file entry"),
            }
        }

        names.sort();
        found.extend(names.into_iter().map(|name| dir.join(name)));
    }

    tracing::debug!(count = found.len(), "Discovered candidate files");
    found
}

// ---------------------------------------------------------------------------
// Per-file verdicts
// ---------------------------------------------------------------------------

/// Outcome of checking one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileVerdict {
    Valid,
    /// Parsed, but violates the schema.
    Invalid(String),
    /// Not JSON.
    Malformed(String),
    /// Could not be read as UTF-8 text.
    Unreadable(String),
}

impl FileVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, FileVerdict::Valid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub verdict: FileVerdict,
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match &self.verdict {
            FileVerdict::Valid => write!(f, "[OK] {}", path),
            FileVerdict::Invalid(msg) => write!(f, "[ERROR] {}: {}", path, msg),
            FileVerdict::Malformed(msg) => write!(f, "[ERROR] {}: Invalid JSON - {}", path, msg),
            FileVerdict::Unreadable(msg) => {
                write!(f, "[ERROR] {}: Cannot read file - {}", path, msg)
            }
        }
    }
}

/// Check one file against the schema.
pub async fn validate_file(path: &Path, schema: &SchemaValidator) -> FileVerdict {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(c) => c,
        Err(e) => return FileVerdict::Unreadable(e.to_string()),
    };

    let document: Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => return FileVerdict::Malformed(e.to_string()),
    };

    match schema.check(&document) {
        Ok(()) => FileVerdict::Valid,
        Err(msg) => FileVerdict::Invalid(msg),
    }
}

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

/// Everything one validator run prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    /// The schema could not be loaded; nothing was checked.
    Fatal(String),
    /// No candidate files were found.
    NoFiles,
    Completed(Vec<FileReport>),
}

impl RunReport {
    /// Whether the run should exit successfully.
    pub fn success(&self) -> bool {
        match self {
            RunReport::Fatal(_) => false,
            RunReport::NoFiles => true,
            RunReport::Completed(files) => files.iter().all(|r| r.verdict.is_valid()),
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunReport::Fatal(reason) => writeln!(f, "[FATAL] Cannot load schema: {}", reason),
            RunReport::NoFiles => writeln!(f, "[INFO] No JSON files found to validate."),
            RunReport::Completed(files) => {
                for report in files {
                    writeln!(f, "{}", report)?;
                }
                if self.success() {
                    writeln!(f, "\nAll JSON files are valid ✅")
                } else {
                    writeln!(f, "\nSome JSON files have errors ❌")
                }
            }
        }
    }
}

/// Load the schema, then check every candidate file in order.
pub async fn run(paths: &ToolPaths) -> RunReport {
    let schema = match SchemaValidator::load(&paths.schema_file).await {
        Ok(s) => s,
        Err(e) => {
            tracing::debug!("Cannot load schema: {}", e);
            return RunReport::Fatal(e.to_string());
        }
    };

    let candidates = discover(&paths.search_dirs).await;
    if candidates.is_empty() {
        return RunReport::NoFiles;
    }

    let mut files = Vec::with_capacity(candidates.len());
    for path in candidates {
        let verdict = validate_file(&path, &schema).await;
        tracing::debug!(path = %path.display(), valid = verdict.is_valid(), "Checked file");
        files.push(FileReport { path, verdict });
    }

    RunReport::Completed(files)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
