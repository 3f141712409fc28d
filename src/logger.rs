// Workflow Tools — Structured logging via tracing

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "WORKFLOW_TOOLS_LOG";

/// Initialize the global tracing subscriber.
///
/// Log level is controlled by the `WORKFLOW_TOOLS_LOG` env var (default: `warn`).
/// Events are written to stderr; stdout carries only the tool's report.
/// Examples:
///   WORKFLOW_TOOLS_LOG=debug
///   WORKFLOW_TOOLS_LOG=workflow_tools::validator=trace,warn
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

/// Initialize logger for tests (does not panic if called multiple times).
#[cfg(test)]
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
