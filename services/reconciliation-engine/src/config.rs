//! Engine configuration

use std::time::Duration;

/// Default bound on a single store call
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Tunables shared by the builders and queries
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Upper bound for any one store call; exceeding it surfaces as `Unavailable`
    pub store_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }
}

impl EngineConfig {
    pub fn with_store_timeout(store_timeout: Duration) -> Self {
        Self { store_timeout }
    }
}
