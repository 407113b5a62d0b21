use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use codecoach::config::Config;
use codecoach::llm::ProviderRegistry;
use codecoach::server::{AppState, build_app};

#[derive(Parser)]
#[command(name = "codecoach", version, about = "Web chat gateway for a coding tutor LLM")]
struct Args {
    /// Path to the YAML config file
    #[arg(long, default_value = "codecoach.yaml")]
    config: PathBuf,

    /// Override the configured listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the configured listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let mut config = Config::load(&args.config)
        .await
        .with_context(|| format!("loading config from {}", args.config.display()))?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.llm.credentials_from_env();

    let providers = ProviderRegistry::from_config(&config.llm);
    let request_timeout_secs = config.server.request_timeout_seconds;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        providers,
    };
    let app = build_app(state, request_timeout_secs);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
