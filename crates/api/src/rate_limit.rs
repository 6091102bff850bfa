//! Rate Limiting Middleware using GCRA Algorithm
//!
//! Per-IP rate limiting for the public API via tower_governor. Requires the
//! service to be built with `into_make_service_with_connect_info::<SocketAddr>()`
//! so peer addresses are available for key extraction.

use crate::Settings;
use governor::middleware::StateInformationMiddleware;
use std::sync::Arc;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;

/// Governor config with X-RateLimit-* response headers enabled
pub type DefaultGovernorConfig =
    tower_governor::governor::GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

/// Rate limiting configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Seconds per replenished request
    pub per_second: u64,
    /// Max requests that can be made immediately
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 2,
            burst_size: 5,
        }
    }
}

impl RateLimitConfig {
    /// Build the limiter config from server settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            per_second: settings.rate_limit_per_second,
            burst_size: settings.rate_limit_burst,
        }
    }
}

/// Create a governor config for use with `GovernorLayer`.
///
/// Adds X-RateLimit-Limit / X-RateLimit-Remaining / X-RateLimit-After
/// headers so clients can see their quota.
pub fn create_governor_config(config: &RateLimitConfig) -> Arc<DefaultGovernorConfig> {
    Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.per_second)
            .burst_size(config.burst_size)
            .use_headers()
            .finish()
            .expect("rate limit config must be nonzero"),
    )
}
