// Workflow Tools — Workflow previewer
//
// Renders a workflow document's title, description, fields, outputs and
// command as plain text.

use crate::workflow::parser::{from_document, parse_document, ParseError};
use crate::workflow::{display_or, display_value, CommandSection, Workflow};
use serde_json::Value;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: malformed JSON: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: {source}", .path.display())]
    Shape {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// What the previewer prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    /// Header, fields, outputs and the command block.
    #[default]
    Full,
    /// The command block alone.
    CommandOnly,
}

/// Read a document from disk and check its JSON syntax.
async fn load_document(path: &Path) -> Result<Value, PreviewError> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Err(PreviewError::NotFound(path.to_path_buf()));
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PreviewError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    parse_document(&content).map_err(|e| with_path(e, path))
}

/// Load a workflow document from disk.
pub async fn load_workflow(path: &Path) -> Result<Workflow, PreviewError> {
    let document = load_document(path).await?;
    from_document(document).map_err(|e| with_path(e, path))
}

/// Load and render in one step. Nothing is rendered unless the document loads.
///
/// Command-only mode reads nothing but `command`, so broken fields do not
/// stop it.
pub async fn preview_file(path: &Path, mode: PreviewMode) -> Result<String, PreviewError> {
    match mode {
        PreviewMode::Full => {
            let workflow = load_workflow(path).await?;
            tracing::debug!(
                path = %path.display(),
                fields = workflow.fields.len(),
                outputs = workflow.output.len(),
                "Loaded workflow"
            );
            Ok(render(&workflow, mode))
        }
        PreviewMode::CommandOnly => {
            let document = load_document(path).await?;
            let section: CommandSection =
                from_document(document).map_err(|e| with_path(e, path))?;
            let mut out = String::new();
            render_command(section.command_text(), &mut out);
            Ok(out)
        }
    }
}

fn with_path(err: ParseError, path: &Path) -> PreviewError {
    match err {
        ParseError::Malformed(source) => PreviewError::Malformed {
            path: path.to_path_buf(),
            source,
        },
        ParseError::Shape(source) => PreviewError::Shape {
            path: path.to_path_buf(),
            source,
        },
    }
}

/// Render the preview text for `mode`.
pub fn render(workflow: &Workflow, mode: PreviewMode) -> String {
    let mut out = String::new();
    if mode == PreviewMode::Full {
        render_fields(workflow, &mut out);
    }
    render_command(workflow.command_text(), &mut out);
    out
}

fn render_fields(workflow: &Workflow, out: &mut String) {
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Workflow: {}",
        display_or(workflow.title.as_ref(), "<no title>")
    );
    let _ = writeln!(
        out,
        "Description: {}\n",
        display_or(workflow.description.as_ref(), "<no description>")
    );

    out.push_str("Fields:\n");
    for (i, field) in workflow.fields.iter().enumerate() {
        let extra = field
            .range()
            .map(|(min, max, step)| {
                format!(
                    ", min:{}, max:{}, step:{}",
                    display_value(min),
                    display_value(max),
                    display_value(step)
                )
            })
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{}. {} ({}) - {} [required: {}{}, default: {}]",
            i + 1,
            display_value(&field.id),
            display_value(&field.r#type),
            display_or(field.label.as_ref(), ""),
            field.required_text(),
            extra,
            display_or(field.default.as_ref(), "")
        );
    }

    out.push_str("\nOutput:\n");
    for output in &workflow.output {
        let _ = writeln!(
            out,
            "{} ({}, {})",
            display_or(output.id.as_ref(), "None"),
            display_or(output.r#type.as_ref(), "None"),
            display_or(output.format.as_ref(), "N/A")
        );
    }
}

fn render_command(command: Option<String>, out: &mut String) {
    if let Some(cmd) = command {
        out.push_str("\nCommand to run:\n");
        out.push_str(&cmd);
        out.push('\n');
    }
}
