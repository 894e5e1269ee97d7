//! Session runner - spawns sessions, enforces the deadline, drains on shutdown

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::watch;

use crate::error::Result;
use crate::gateway::GatewayClient;
use crate::metrics::reporter;
use crate::metrics::types::TestMetrics;
use crate::metrics::MetricsCollector;
use crate::scenarios::{catalogue_browsing, shopping_journey, Behavior, SessionContext};
use crate::session::ThinkTime;
use crate::weighted::WeightedTable;

/// Immutable description of one load run.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub sessions: usize,
    pub duration: Duration,
    pub report_interval_secs: u64,
    pub think_time: ThinkTime,
    pub behaviors: WeightedTable<Behavior>,
    pub catalogue_size: u64,
}

/// Run the plan to completion and return the final metrics snapshot.
///
/// Each session is one tokio task owning its state and RNG. The run ends
/// when the duration elapses or Ctrl+C arrives; sessions observe the
/// shutdown flag between steps and finish their in-flight step first.
pub async fn run(gateway: GatewayClient, plan: RunPlan) -> Result<TestMetrics> {
    let collector = MetricsCollector::new();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Start periodic metrics reporter
    let reporter_handle = tokio::spawn(reporter::run_periodic_reporter(
        collector.clone(),
        plan.report_interval_secs,
        shutdown_rx.clone(),
    ));

    let deadline = Instant::now() + plan.duration;
    let mut assignment_rng = StdRng::from_entropy();
    let mut handles = Vec::with_capacity(plan.sessions);

    for _ in 0..plan.sessions {
        let behavior = plan
            .behaviors
            .choose(&mut assignment_rng)
            .copied()
            .unwrap_or(Behavior::ShoppingJourney);

        let ctx = SessionContext {
            gateway: gateway.clone(),
            collector: collector.clone(),
            think_time: plan.think_time,
            deadline,
            shutdown: shutdown_rx.clone(),
        };
        let session_collector = collector.clone();
        let session_rng = StdRng::from_entropy();
        let catalogue_size = plan.catalogue_size;

        handles.push(tokio::spawn(async move {
            session_collector.session_started();
            match behavior {
                Behavior::ShoppingJourney => {
                    shopping_journey::run_session(ctx, session_rng).await;
                }
                Behavior::CatalogueBrowsing => {
                    catalogue_browsing::run_session(ctx, catalogue_size, session_rng).await;
                }
            }
            session_collector.session_finished();
        }));
    }

    tracing::info!("Spawned {} sessions", handles.len());

    // Wait until the duration elapses or Ctrl+C arrives
    tokio::select! {
        _ = tokio::time::sleep(plan.duration) => {
            tracing::info!("Run duration elapsed, winding down sessions");
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("Ctrl+C received, winding down sessions");
        }
    }
    let _ = shutdown_tx.send(true);

    // Wait for every session to finish its in-flight step
    for (idx, handle) in handles.into_iter().enumerate() {
        if let Err(e) = handle.await {
            tracing::error!("Session task {} panicked: {}", idx, e);
        }
    }
    tracing::info!("All sessions finished");

    let _ = reporter_handle.await;

    // Print final report
    collector.update_system_metrics();
    reporter::print_final_report(&collector);

    Ok(collector.get_snapshot())
}
