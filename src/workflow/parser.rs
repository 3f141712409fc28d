use crate::workflow::{CommandSection, Workflow};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    /// The text is not JSON at all.
    #[error("invalid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
    /// Valid JSON that is not a workflow document (e.g. a field without `id`).
    #[error("invalid workflow document: {0}")]
    Shape(#[source] serde_json::Error),
}

/// First pass: JSON syntax only.
pub fn parse_document(content: &str) -> Result<Value, ParseError> {
    serde_json::from_str(content).map_err(ParseError::Malformed)
}

/// Second pass: read the parts of a parsed document a preview needs.
///
/// `Workflow` checks every field; `CommandSection` looks at `command` alone.
pub fn from_document<T: DeserializeOwned>(document: Value) -> Result<T, ParseError> {
    serde_json::from_value(document).map_err(ParseError::Shape)
}

/// Parse workflow JSON text in two passes so syntax and shape errors stay distinct.
pub fn parse_workflow(content: &str) -> Result<Workflow, ParseError> {
    from_document(parse_document(content)?)
}

/// Parse only the command of a workflow document.
pub fn parse_command(content: &str) -> Result<CommandSection, ParseError> {
    from_document(parse_document(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let wf = parse_workflow("{}").unwrap();
        assert!(wf.title.is_none());
        assert!(wf.fields.is_empty());
        assert!(wf.output.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_workflow(r#"{"title": "#).unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
        let err = parse_command(r#"{"command": "#).unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
    }

    #[test]
    fn test_field_without_id_is_shape_error() {
        let err = parse_workflow(r#"{"fields": [{"type": "string"}]}"#).unwrap_err();
        assert!(matches!(err, ParseError::Shape(_)));
        assert!(err.to_string().contains("`id`"));
    }

    #[test]
    fn test_command_ignores_broken_fields() {
        let section = parse_command(r#"{"fields": [{"type": "int"}], "command": "run.sh"}"#).unwrap();
        assert_eq!(section.command_text().as_deref(), Some("run.sh"));
    }

    #[test]
    fn test_top_level_array_is_shape_error() {
        let err = parse_workflow("[1, 2]").unwrap_err();
        assert!(matches!(err, ParseError::Shape(_)));
        let err = parse_command("[1, 2]").unwrap_err();
        assert!(matches!(err, ParseError::Shape(_)));
    }
}
