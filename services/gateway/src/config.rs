use clap::Parser;
use reconciliation_engine::EngineConfig;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::rate_limit::RateLimits;

/// Gateway settings: command-line flags with environment fallbacks
#[derive(Parser, Debug, Clone)]
#[command(name = "gateway")]
#[command(about = "Marketplace gateway: seller catalogs and buyer orders over HTTP")]
pub struct GatewayConfig {
    /// Interface to bind
    #[arg(long, env = "GATEWAY_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to bind
    #[arg(short, long, env = "GATEWAY_PORT", default_value_t = 8080)]
    pub port: u16,

    /// HS256 secret used to verify bearer tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// JSON file with the initial item catalog and identities
    #[arg(long, env = "SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Upper bound for a single store call, in milliseconds
    #[arg(long, env = "STORE_TIMEOUT_MS", default_value_t = 5_000)]
    pub store_timeout_ms: u64,

    /// Burst capacity of the per-identity write bucket
    #[arg(long, env = "ORDER_RATE_LIMIT", default_value_t = 20)]
    pub order_rate_limit: u32,

    /// Tokens per second refilled into the per-identity write bucket
    #[arg(long, env = "ORDER_RATE_REFILL", default_value_t = 20.0)]
    pub order_rate_refill: f64,
}

impl GatewayConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::with_store_timeout(Duration::from_millis(self.store_timeout_ms))
    }

    pub fn rate_limits(&self) -> RateLimits {
        RateLimits {
            capacity: self.order_rate_limit,
            refill_per_sec: self.order_rate_refill,
        }
    }
}
