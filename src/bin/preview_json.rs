// Workflow Tools — Preview and validate AI workflow JSON documents
// License: Apache-2.0

use clap::Parser;
use std::path::PathBuf;
use workflow_tools::preview::{preview_file, PreviewError, PreviewMode};

#[derive(Parser)]
#[command(
    name = "preview-json",
    about = "Preview AI workflow JSON fields, outputs, and commands",
    version
)]
struct Cli {
    /// Path to workflow JSON file
    json_file: PathBuf,
    /// Only show command
    #[arg(long)]
    command: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    workflow_tools::logger::init();

    let cli = Cli::parse();
    let mode = if cli.command {
        PreviewMode::CommandOnly
    } else {
        PreviewMode::Full
    };

    match preview_file(&cli.json_file, mode).await {
        Ok(text) => {
            print!("{}", text);
            Ok(())
        }
        Err(e @ PreviewError::NotFound(_)) => {
            println!("[ERROR] {}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
