//! Santrilogy chat engine server binary.

use anyhow::Context;
use clap::Parser;
use santrilogy::{create_router, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Santrilogy chat engine
///
/// A retrieval-augmented question answering server for Islamic reference
/// works, backed by Gemini and a Supabase document store.
#[derive(Parser, Debug)]
#[command(
    name = "santrilogy-engine",
    version,
    about = "Santrilogy chat engine",
    long_about = "A retrieval-augmented question answering server for Islamic reference works.\n\
                  Configuration is read from the environment (a .env file is honored);\n\
                  run with --check to validate configuration without starting the server."
)]
struct Cli {
    /// Bind address (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Validate configuration and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("santrilogy=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env().context("configuration error")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    if cli.check {
        println!("configuration OK");
        return Ok(());
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::from_config(config)?;

    tracing::info!(
        model = state.engine.model_name(),
        threshold = state.config.rag.retrieval.threshold,
        match_count = state.config.rag.retrieval.count,
        "engine wired"
    );

    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "santrilogy engine listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
