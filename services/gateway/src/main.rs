mod auth;
mod config;
mod error;
mod handlers;
mod models;
mod rate_limit;
mod router;
mod seed;
mod state;

use clap::Parser;
use config::GatewayConfig;
use rate_limit::BUCKET_IDLE_TTL;
use reconciliation_engine::InMemoryStores;
use router::create_router;
use seed::SeedData;
use state::AppState;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let env_file_loaded = dotenvy::dotenv().is_ok();
    let config = GatewayConfig::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "info,gateway=debug,reconciliation_engine=debug,tower_http=warn".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Gateway API service");
    if env_file_loaded {
        tracing::info!("loaded .env file");
    }

    let stores = InMemoryStores::new();
    match &config.seed_file {
        Some(path) => {
            let summary = SeedData::load(path)?.apply(&stores)?;
            tracing::info!(
                items = summary.items,
                identities = summary.identities,
                "Seed data loaded from {}",
                path.display()
            );
        }
        None => tracing::warn!("No SEED_FILE configured; item catalog starts empty"),
    }

    let state = AppState::new(&config, stores.stores());

    // Evict idle rate-limit buckets
    let limiter = state.rate_limiter.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(60));
        loop {
            ticker.tick().await;
            let pruned = limiter.prune_idle(BUCKET_IDLE_TTL);
            if pruned > 0 {
                tracing::debug!(pruned, "Pruned idle rate-limit buckets");
            }
        }
    });
    let app = create_router(state);

    // Bind and serve
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
