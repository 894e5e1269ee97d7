// Metrics module
// Per-logical-name counters, latency histograms, and console reporting

pub mod collector;
pub mod reporter;
pub mod types;

pub use collector::MetricsCollector;
