//! MOORA Ranker server
//!
//! Run with: cargo run --bin moora-ranker

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use moora_ranker::adapters::{build_app, CsvDatasetReader, CsvRankingExporter, RankingAppState};
use moora_ranker::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let addr = config.server.resolve_addr().await?;
    let state = RankingAppState::new(
        config.ranking.clone(),
        Arc::new(CsvDatasetReader::new()),
        Arc::new(CsvRankingExporter::new()),
    );
    let app = build_app(state, &config.server);

    info!(
        %addr,
        environment = ?config.server.environment,
        identity_column = %config.ranking.identity_column,
        "Starting MOORA ranker"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if server.wants_json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
