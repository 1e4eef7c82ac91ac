use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use freshen_core::AppConfig;

mod app;

#[derive(Parser)]
#[command(name = "freshen")]
#[command(author, version, about = "Article update worker triggered over HTTP")]
struct Cli {
    /// Path to a configuration file (defaults to ~/.config/freshen/config.toml)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Override the configured listen port
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = match cli.config {
        Some(path) => AppConfig::load_from(&path)?,
        None => AppConfig::load()?,
    };
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let addr = config.listen_addr();
    let app = app::build_app(Arc::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
