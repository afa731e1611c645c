use crate::{Cli, Result as CliErrorResult, Runner, logger, runner::request_context};

use mg_config::Config;
use mg_db::{IdempotencyRepository, ProjectRepository};
use mg_gateway::MutationDispatcher;

use std::sync::Arc;

use log::{info, warn};

/// Load config, start logging, open the database and run the command.
/// Returns the JSON text to print on stdout.
pub async fn run(cli: Cli) -> CliErrorResult<String> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    let colored = config.logging.colored && log_file.is_none();
    logger::initialize(config.logging.level, log_file, colored)?;
    config.log_summary();

    let ctx = request_context(cli.tenant_scope.as_deref(), cli.idempotency_key.as_deref())?;

    let db_path = config.database_path()?;
    let pool = mg_db::create_pool(&db_path, config.database.max_connections).await?;

    let mut dispatcher = MutationDispatcher::new(
        Arc::new(ProjectRepository::new(pool.clone())),
        &config.validation,
    );

    if config.idempotency.enabled {
        dispatcher = dispatcher.with_idempotency(IdempotencyRepository::new(pool.clone()));
        if let Err(e) = dispatcher
            .purge_idempotency(config.idempotency.retention_secs)
            .await
        {
            warn!("Failed to purge idempotency cache: {}", e);
        }
    }

    let runner = Runner::new(dispatcher);
    let value = runner.run(cli.command, ctx).await?;

    pool.close().await;
    info!("Database closed");

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    Ok(output)
}
