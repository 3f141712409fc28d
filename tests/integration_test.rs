use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use workflow_tools::config::ToolPaths;
use workflow_tools::validator::{self, FileVerdict, RunReport};

fn write_json(path: &Path, value: &serde_json::Value) {
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn workflow_schema() -> serde_json::Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["title", "fields"],
        "properties": {
            "title": { "type": "string" },
            "fields": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["id", "type"]
                }
            }
        }
    })
}

/// Lay out `schemas/`, `models/` and `examples/` under a temp root.
fn setup_root() -> (TempDir, ToolPaths) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    std::fs::create_dir(root.join("schemas")).unwrap();
    std::fs::create_dir(root.join("models")).unwrap();
    std::fs::create_dir(root.join("examples")).unwrap();
    write_json(
        &root.join("schemas").join("workflow.schema.json"),
        &workflow_schema(),
    );
    let paths = ToolPaths::from_root(root);
    (tmp, paths)
}

#[tokio::test]
async fn test_mixed_run_reports_every_file() {
    let (tmp, paths) = setup_root();
    let models = tmp.path().join("models");
    let examples = tmp.path().join("examples");

    write_json(
        &models.join("a.json"),
        &json!({"title": "A", "fields": [{"id": "x", "type": "int"}]}),
    );
    write_json(&models.join("b.json"), &json!({"title": "B"}));
    std::fs::write(examples.join("c.json"), "{ \"title\": \"C\", ").unwrap();
    write_json(&examples.join("d.json"), &json!({"title": "D", "fields": []}));
    std::fs::write(examples.join("README.md"), "not a candidate").unwrap();

    let report = validator::run(&paths).await;
    let RunReport::Completed(files) = &report else {
        panic!("expected a completed run, got {report:?}");
    };

    assert_eq!(files.len(), 4);
    assert_eq!(files[0].verdict, FileVerdict::Valid);
    assert!(matches!(files[1].verdict, FileVerdict::Invalid(_)));
    assert!(matches!(files[2].verdict, FileVerdict::Malformed(_)));
    assert_eq!(files[3].verdict, FileVerdict::Valid);
    assert!(!report.success());

    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();
    // four file lines, a blank separator, one summary line
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("[OK] "));
    assert!(lines[1].starts_with("[ERROR] "));
    assert!(lines[2].contains("Invalid JSON - "));
    assert_eq!(lines[5], "Some JSON files have errors ❌");
}

#[tokio::test]
async fn test_all_valid_run() {
    let (tmp, paths) = setup_root();
    for name in ["one.json", "two.json"] {
        write_json(
            &tmp.path().join("models").join(name),
            &json!({"title": name, "fields": []}),
        );
    }

    let report = validator::run(&paths).await;
    assert!(report.success());
    assert!(report.to_string().ends_with("\nAll JSON files are valid ✅\n"));
}

#[tokio::test]
async fn test_no_files_found() {
    let (_tmp, paths) = setup_root();
    let report = validator::run(&paths).await;
    assert_eq!(report, RunReport::NoFiles);
    assert_eq!(
        report.to_string(),
        "[INFO] No JSON files found to validate.\n"
    );
}

#[tokio::test]
async fn test_missing_directories_are_skipped() {
    let (tmp, _) = setup_root();
    let paths = ToolPaths {
        schema_file: tmp.path().join("schemas").join("workflow.schema.json"),
        search_dirs: vec![tmp.path().join("nowhere"), tmp.path().join("also-nowhere")],
    };
    assert_eq!(validator::run(&paths).await, RunReport::NoFiles);
}

#[tokio::test]
async fn test_missing_schema_is_fatal() {
    let (tmp, mut paths) = setup_root();
    write_json(
        &tmp.path().join("models").join("a.json"),
        &json!({"title": "A", "fields": []}),
    );
    paths.schema_file = tmp.path().join("schemas").join("absent.schema.json");

    let report = validator::run(&paths).await;
    assert!(matches!(report, RunReport::Fatal(_)));
    assert!(!report.success());
    let text = report.to_string();
    assert!(text.starts_with("[FATAL] Cannot load schema: "));
    assert_eq!(text.lines().count(), 1);
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let (tmp, paths) = setup_root();
    for (name, doc) in [
        ("z.json", json!({"title": "Z", "fields": []})),
        ("m.json", json!({"fields": []})),
        ("a.json", json!({"title": 1, "fields": []})),
    ] {
        write_json(&tmp.path().join("models").join(name), &doc);
    }

    let first = validator::run(&paths).await.to_string();
    let second = validator::run(&paths).await.to_string();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_bundled_models_match_bundled_schema() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let paths = ToolPaths {
        schema_file: root.join("schemas").join("workflow.schema.json"),
        search_dirs: vec![root.join("models")],
    };

    let report = validator::run(&paths).await;
    assert!(report.success(), "bundled models failed:\n{report}");
    assert!(matches!(report, RunReport::Completed(ref files) if !files.is_empty()));
}
