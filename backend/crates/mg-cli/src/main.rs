//! mg - project mutation gateway CLI
//!
//! Runs one mutation (or read) against the configured SQLite database and
//! prints the JSON payload.
//!
//! # Examples
//!
//! ```bash
//! # Create a project
//! mg create-project --tenant-id <uuid> --name "Apollo" --description "Moonshot"
//!
//! # Rename it, bound to the owning tenant
//! mg --tenant-scope <uuid> set-project-name <project-id> --name "Artemis"
//!
//! # Raw mutation through the decoder
//! mg execute --operation delete_project --input '{"project_id":"<uuid>"}'
//! ```

use mg_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match mg_cli::run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {} (code: {})", e, e.error_code());
            ExitCode::FAILURE
        }
    }
}
