// Workflow Tools — Preview and validate AI workflow JSON documents
// License: Apache-2.0

use clap::Parser;
use workflow_tools::config::ToolPaths;
use workflow_tools::validator;

#[derive(Parser)]
#[command(
    name = "validate-json",
    about = "Validate all workflow JSON files in models/ and examples/ against the workflow schema",
    version
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    workflow_tools::logger::init();

    let _cli = Cli::parse();

    let paths = ToolPaths::resolve()?;
    tracing::debug!(
        schema = %paths.schema_file.display(),
        dirs = ?paths.search_dirs,
        "Resolved validator paths"
    );

    let report = validator::run(&paths).await;
    print!("{}", report);

    if !report.success() {
        std::process::exit(1);
    }
    Ok(())
}
