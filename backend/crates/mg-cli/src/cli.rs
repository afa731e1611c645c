use crate::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mg")]
#[command(about = "Multi-tenant project mutation gateway")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Bind the request to one tenant; other tenants' projects look absent
    #[arg(long, global = true)]
    pub tenant_scope: Option<String>,

    /// Replay key making create-project safe to retry
    #[arg(long, global = true)]
    pub idempotency_key: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
