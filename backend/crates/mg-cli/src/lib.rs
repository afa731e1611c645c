pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;

pub use app::run;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
pub use runner::Runner;

#[cfg(test)]
mod tests;
