use crate::auth::TokenVerifier;
use crate::config::GatewayConfig;
use crate::rate_limit::RateLimiter;
use reconciliation_engine::{EngineConfig, Marketplace, Stores};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub market: Arc<Marketplace>,
    pub rate_limiter: Arc<RateLimiter>,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(config: &GatewayConfig, stores: Stores) -> Self {
        Self::from_parts(
            stores,
            config.engine_config(),
            RateLimiter::new(config.rate_limits()),
            TokenVerifier::new(&config.jwt_secret),
        )
    }

    pub fn from_parts(
        stores: Stores,
        engine: EngineConfig,
        rate_limiter: RateLimiter,
        verifier: TokenVerifier,
    ) -> Self {
        Self {
            market: Arc::new(Marketplace::new(stores, engine)),
            rate_limiter: Arc::new(rate_limiter),
            verifier: Arc::new(verifier),
        }
    }
}
