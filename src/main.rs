//! # Tapeline Main Entry Point
//!
//! Terminal calculator client backed by a remote calculation service.

use std::sync::Arc;

use anyhow::Result;
use tapeline::cmd_args::CommandLineArgs;
use tapeline::config;
use tapeline::AppController;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_logging(&cmd_args)?;

    let endpoint = config::resolve_endpoint(cmd_args.endpoint(), cmd_args.legacy_multiply());
    tracing::info!("starting tapeline against {}", endpoint);

    let mut app = AppController::new(&cmd_args)?;
    app.set_endpoint_label(endpoint);
    app.run().await?;

    Ok(())
}

/// Set up tracing. The TUI owns the screen, so logs go to a file, and
/// only when asked for via `--verbose` or the log environment variable.
fn init_logging(cmd_args: &CommandLineArgs) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let env_filter = std::env::var(config::LOG_ENV_VAR).ok();
    if !cmd_args.verbose() && env_filter.is_none() {
        return Ok(());
    }

    let filter = match env_filter {
        Some(spec) => EnvFilter::new(spec),
        None => EnvFilter::new("debug"),
    };
    let log_file = std::fs::File::create(config::LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
