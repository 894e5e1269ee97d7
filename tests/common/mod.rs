//! Shared helpers for the integration tests.

use std::time::{Duration, Instant};

use tokio::sync::watch;

use gateway_loadgen::config;
use gateway_loadgen::gateway::GatewayClient;
use gateway_loadgen::metrics::MetricsCollector;
use gateway_loadgen::scenarios::SessionContext;
use gateway_loadgen::session::ThinkTime;

/// A session context against `host` with zero think time and a far deadline.
pub fn test_context(host: &str) -> SessionContext {
    let (_tx, shutdown) = watch::channel(false);
    SessionContext {
        gateway: test_gateway(host),
        collector: MetricsCollector::new(),
        think_time: ThinkTime::zero(),
        deadline: Instant::now() + Duration::from_secs(60),
        shutdown,
    }
}

pub fn test_gateway(host: &str) -> GatewayClient {
    let profile = config::get_load_profile("dev");
    GatewayClient::new(host, &profile).expect("valid test host")
}
