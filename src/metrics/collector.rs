//! Metrics collector - thread-safe collection with latency tracking

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use hdrhistogram::Histogram;
use parking_lot::RwLock;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use super::types::TestMetrics;
use crate::session::Outcome;

#[derive(Clone)]
pub struct MetricsCollector {
    metrics: Arc<RwLock<TestMetrics>>,
    latencies: Arc<RwLock<HashMap<&'static str, Histogram<u64>>>>,
    system: Arc<RwLock<System>>,
    start_time: Instant,
}

impl MetricsCollector {
    pub fn new() -> Self {
        // Initialize system monitor
        let system = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything()),
        );

        Self {
            metrics: Arc::new(RwLock::new(TestMetrics::default())),
            latencies: Arc::new(RwLock::new(HashMap::new())),
            system: Arc::new(RwLock::new(system)),
            start_time: Instant::now(),
        }
    }

    /// Record one classified request under its logical name.
    ///
    /// Latency is recorded for every issued request, failures included.
    pub fn record(&self, name: &'static str, outcome: &Outcome, duration_ms: u64) {
        let mut metrics = self.metrics.write();
        let entry = metrics.requests.entry(name).or_default();
        match outcome {
            Outcome::Success => entry.success += 1,
            Outcome::Degraded => entry.degraded += 1,
            Outcome::Failed(_) => entry.failed += 1,
        }
        drop(metrics);

        let mut latencies = self.latencies.write();
        let hist = latencies.entry(name).or_insert_with(|| {
            // 3 significant digits of precision
            Histogram::new(3).expect("failed to create latency histogram")
        });
        let _ = hist.record(duration_ms);
    }

    /// Record a step that issued no request; contributes no latency sample.
    pub fn record_skipped(&self, name: &'static str) {
        let mut metrics = self.metrics.write();
        metrics.requests.entry(name).or_default().skipped += 1;
    }

    pub fn session_started(&self) {
        let mut metrics = self.metrics.write();
        metrics.sessions.started += 1;
        metrics.sessions.active += 1;
    }

    pub fn session_finished(&self) {
        let mut metrics = self.metrics.write();
        metrics.sessions.active = metrics.sessions.active.saturating_sub(1);
    }

    /// Update system metrics (CPU, memory)
    pub fn update_system_metrics(&self) {
        let mut system = self.system.write();
        system.refresh_cpu_all();
        system.refresh_memory();

        let mut metrics = self.metrics.write();
        metrics.system.cpu_usage = system.global_cpu_usage();
        metrics.system.memory_used_mb = system.used_memory() / 1024 / 1024;
        metrics.system.memory_total_mb = system.total_memory() / 1024 / 1024;
    }

    pub fn get_snapshot(&self) -> TestMetrics {
        self.metrics.read().clone()
    }

    /// Latency percentiles for one logical name; `None` before its first sample.
    pub fn latency_percentiles(&self, name: &str) -> Option<LatencyStats> {
        let latencies = self.latencies.read();
        let hist = latencies.get(name)?;
        Some(LatencyStats {
            min: hist.min(),
            p50: hist.value_at_quantile(0.50),
            p95: hist.value_at_quantile(0.95),
            p99: hist.value_at_quantile(0.99),
            max: hist.max(),
            mean: hist.mean(),
            count: hist.len(),
        })
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct LatencyStats {
    pub min: u64,
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
    pub max: u64,
    pub mean: f64,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::names;

    #[test]
    fn outcomes_aggregate_under_their_logical_name() {
        let collector = MetricsCollector::new();
        collector.record(names::PRODUCTS_LIST, &Outcome::Success, 12);
        collector.record(names::PRODUCTS_LIST, &Outcome::Success, 20);
        collector.record(names::ORDERS_CREATE, &Outcome::Degraded, 35);
        collector.record(
            names::ORDERS_CREATE,
            &Outcome::Failed("unexpected status 500".into()),
            40,
        );

        let snapshot = collector.get_snapshot();
        let list = &snapshot.requests[names::PRODUCTS_LIST];
        assert_eq!(list.success, 2);
        assert_eq!(list.failed, 0);

        let create = &snapshot.requests[names::ORDERS_CREATE];
        assert_eq!(create.degraded, 1);
        assert_eq!(create.failed, 1);
        assert!((create.failure_rate() - 0.5).abs() < 1e-9);
        assert_eq!(snapshot.total_requests(), 4);
        assert_eq!(snapshot.total_failed(), 1);
    }

    #[test]
    fn skipped_steps_contribute_no_latency_sample() {
        let collector = MetricsCollector::new();
        collector.record_skipped(names::ORDERS_DETAIL);
        collector.record_skipped(names::ORDERS_DETAIL);

        let snapshot = collector.get_snapshot();
        assert_eq!(snapshot.requests[names::ORDERS_DETAIL].skipped, 2);
        assert_eq!(snapshot.requests[names::ORDERS_DETAIL].total(), 0);
        assert!(collector.latency_percentiles(names::ORDERS_DETAIL).is_none());
    }

    #[test]
    fn latency_percentiles_cover_recorded_samples() {
        let collector = MetricsCollector::new();
        for ms in [10, 20, 30, 40, 50] {
            collector.record(names::CATALOGUE_BROWSE, &Outcome::Success, ms);
        }
        let stats = collector
            .latency_percentiles(names::CATALOGUE_BROWSE)
            .expect("samples recorded");
        assert_eq!(stats.count, 5);
        assert_eq!(stats.min, 10);
        assert_eq!(stats.max, 50);
        assert!(stats.p50 >= 20 && stats.p50 <= 40);
    }

    #[test]
    fn session_counters_track_active_sessions() {
        let collector = MetricsCollector::new();
        collector.session_started();
        collector.session_started();
        collector.session_finished();

        let snapshot = collector.get_snapshot();
        assert_eq!(snapshot.sessions.started, 2);
        assert_eq!(snapshot.sessions.active, 1);
    }
}
