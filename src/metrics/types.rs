//! Metric types

use std::collections::BTreeMap;

/// Outcome counters for one logical request name.
#[derive(Debug, Clone, Default)]
pub struct RequestMetrics {
    pub success: usize,
    pub degraded: usize,
    pub failed: usize,
    /// Steps that issued no request at all (fetch_order without an order id).
    pub skipped: usize,
}

impl RequestMetrics {
    /// Requests actually issued (skips excluded).
    pub fn total(&self) -> usize {
        self.success + self.degraded + self.failed
    }

    /// Failure share of issued requests. Degraded outcomes count as passes.
    pub fn failure_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.failed as f64 / total as f64
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionMetrics {
    pub started: usize,
    pub active: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SystemMetrics {
    pub cpu_usage: f32,
    pub memory_used_mb: u64,
    pub memory_total_mb: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TestMetrics {
    /// Keyed by logical name; BTreeMap keeps report ordering stable.
    pub requests: BTreeMap<&'static str, RequestMetrics>,
    pub sessions: SessionMetrics,
    pub system: SystemMetrics,
}

impl TestMetrics {
    pub fn total_requests(&self) -> usize {
        self.requests.values().map(RequestMetrics::total).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.requests.values().map(|r| r.failed).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_outcomes_do_not_count_as_failures() {
        let metrics = RequestMetrics {
            success: 6,
            degraded: 3,
            failed: 1,
            skipped: 5,
        };
        assert_eq!(metrics.total(), 10);
        assert!((metrics.failure_rate() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn failure_rate_of_idle_name_is_zero() {
        assert_eq!(RequestMetrics::default().failure_rate(), 0.0);
    }
}
