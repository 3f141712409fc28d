// Workflow Tools — Preview and validate AI workflow JSON documents
// License: Apache-2.0

pub mod config;
pub mod logger;
pub mod preview;
pub mod validator;
pub mod workflow;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
