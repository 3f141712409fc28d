// Workflow Tools — Workflow document model
//
// A workflow document describes a configurable AI task: the fields a user
// fills in, the outputs it produces and the shell command that runs it.

pub mod parser;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A workflow document. Every top-level key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub output: Vec<Output>,
    #[serde(default)]
    pub command: Option<Value>,
}

/// The part of a workflow document the command-only preview reads.
///
/// Every other key, well-formed or not, is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandSection {
    #[serde(default)]
    pub command: Option<Value>,
}

impl CommandSection {
    pub fn command_text(&self) -> Option<String> {
        command_text(self.command.as_ref())
    }
}

/// One user-configurable input of a workflow.
///
/// `id` and `type` must be present but may hold any JSON value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub id: Value,
    pub r#type: Value,
    #[serde(default)]
    pub label: Option<Value>,
    #[serde(default)]
    pub required: Option<Value>,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub min: Option<Value>,
    #[serde(default)]
    pub max: Option<Value>,
    #[serde(default)]
    pub step: Option<Value>,
}

impl Field {
    /// The numeric range, only when `min`, `max` and `step` are all set.
    pub fn range(&self) -> Option<(&Value, &Value, &Value)> {
        match (&self.min, &self.max, &self.step) {
            (Some(min), Some(max), Some(step)) => Some((min, max, step)),
            _ => None,
        }
    }

    pub fn required_text(&self) -> String {
        self.required
            .as_ref()
            .map(display_value)
            .unwrap_or_else(|| display_value(&Value::Bool(false)))
    }
}

/// One declared result artifact of a workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub r#type: Option<Value>,
    #[serde(default)]
    pub format: Option<Value>,
}

impl Workflow {
    /// The command string, if the document carries a non-blank one.
    pub fn command_text(&self) -> Option<String> {
        command_text(self.command.as_ref())
    }
}

fn command_text(command: Option<&Value>) -> Option<String> {
    command.filter(|v| !is_blank(v)).map(display_value)
}

/// Render a JSON value for console output.
///
/// Strings print bare, booleans as `True`/`False` and null as `None`.
/// Numbers, arrays and objects print as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// Render an optional value, falling back to `missing` when absent.
pub fn display_or(value: Option<&Value>, missing: &str) -> String {
    value.map(display_value).unwrap_or_else(|| missing.to_string())
}

/// Whether a value counts as "nothing there" for the command block.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
