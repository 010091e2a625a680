//! Vitrine site API server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), merges the
//! `VITRINE_*` environment, seeds the in-memory contact store, and serves
//! the site API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use vitrine_server::ServerConfig;
use vitrine_store_mem::MemStore;

#[derive(Parser)]
#[command(author, version, about = "Vitrine site API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration. The file is optional; every field has a default.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("VITRINE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Contact submissions live in memory for the life of the process.
  let store = MemStore::new();
  let app = vitrine_server::app(Arc::new(store), &server_cfg);

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  tracing::info!(
    environment = server_cfg.environment.as_str(),
    "Listening on http://{address}"
  );
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
