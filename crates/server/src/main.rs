mod api;
mod cli;
mod normalize;
mod router;
mod state;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use goldmedal_storage::{Dataset, PgStore};

use crate::cli::{Cli, Command};
use crate::state::AppState;

fn load_config() -> goldmedal_core::Config {
    goldmedal_core::config::load_dotenv();
    goldmedal_core::Config::from_env()
}

async fn serve(config: &goldmedal_core::Config) -> anyhow::Result<()> {
    let state = AppState::from_config(config)
        .await
        .context("failed to open dataset backend")?;
    let app = router::build_router(Arc::new(state));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://localhost:{}", config.server.port);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn import(config: &goldmedal_core::Config, path: &Path) -> anyhow::Result<()> {
    info!("Importing {} into PostgreSQL", path.display());
    let dataset = Dataset::load(path).with_context(|| format!("failed to read {}", path.display()))?;
    let store = PgStore::connect(&config.postgres).await?;
    store.import(&dataset).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = load_config();
    config.log_summary();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config).await?,
        Command::Import { path } => {
            let path = path.unwrap_or_else(|| config.dataset.path.clone());
            import(&config, &path).await?;
        }
    }

    Ok(())
}
