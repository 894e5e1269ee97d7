// Scenarios module
// Contains the two behavior profiles and the shared per-session context

pub mod catalogue_browsing;
pub mod shopping_journey;

use std::time::Instant;

use rand::rngs::StdRng;
use tokio::sync::watch;

use crate::gateway::GatewayClient;
use crate::metrics::MetricsCollector;
use crate::session::{Outcome, ThinkTime};
use crate::weighted::WeightedTable;

/// A named behavior profile a session runs for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    ShoppingJourney,
    CatalogueBrowsing,
}

/// Weighted assignment table for the mixed profile (defaults 2:1).
pub fn behavior_table(shopping_weight: u32, browsing_weight: u32) -> WeightedTable<Behavior> {
    let mut table = WeightedTable::new();
    table.push(Behavior::ShoppingJourney, shopping_weight);
    table.push(Behavior::CatalogueBrowsing, browsing_weight);
    table
}

/// Everything a session task needs besides its own state and RNG.
///
/// Cloned once per session; the gateway client and collector share their
/// internals, the deadline and think-time range are plain values.
#[derive(Clone)]
pub struct SessionContext {
    pub gateway: GatewayClient,
    pub collector: MetricsCollector,
    pub think_time: ThinkTime,
    pub deadline: Instant,
    pub shutdown: watch::Receiver<bool>,
}

impl SessionContext {
    /// True once the run deadline passed or shutdown was signalled.
    /// Checked between steps only; an in-flight step always finishes.
    pub fn should_stop(&self) -> bool {
        Instant::now() >= self.deadline || *self.shutdown.borrow()
    }

    pub async fn think(&self, rng: &mut StdRng) {
        let pause = self.think_time.sample(rng);
        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
    }

    /// Record a classified step, warning on failures.
    pub fn record(&self, name: &'static str, outcome: &Outcome, started: Instant) {
        if let Outcome::Failed(message) = outcome {
            tracing::warn!("{} failed: {}", name, message);
        }
        let duration_ms = started.elapsed().as_millis() as u64;
        self.collector.record(name, outcome, duration_ms);
    }
}
