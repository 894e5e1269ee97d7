//! Console reporter for metrics with real-time updates

use std::io::{self, Write};

use tokio::sync::watch;
use tokio::time::{interval, Duration};

use super::collector::MetricsCollector;

/// Run periodic metrics reporting (every N seconds) until shutdown flips.
pub async fn run_periodic_reporter(
    collector: MetricsCollector,
    interval_secs: u64,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = interval(Duration::from_secs(interval_secs));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // Update system metrics before printing
                collector.update_system_metrics();
                print_live_metrics(&collector);
            }
            _ = shutdown.changed() => break,
        }
    }
}

/// Print live metrics (clears screen and updates in place)
pub fn print_live_metrics(collector: &MetricsCollector) {
    // Clear screen and move cursor to top
    print!("\x1B[2J\x1B[1;1H");

    let metrics = collector.get_snapshot();
    let elapsed = collector.elapsed_seconds();

    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║            Gateway Load Test - Live Metrics                    ║");
    println!("╚════════════════════════════════════════════════════════════════╝");

    // Time elapsed
    println!(
        "\n⏱️  Elapsed Time: {:02}:{:02}:{:02}",
        elapsed / 3600,
        (elapsed % 3600) / 60,
        elapsed % 60
    );

    // Sessions
    println!("\n┌─ SESSIONS ──────────────────────────────────────────────────┐");
    println!(
        "│  Started:      {:>8}    Active:     {:>8}              │",
        metrics.sessions.started, metrics.sessions.active
    );
    println!("└─────────────────────────────────────────────────────────────┘");

    // Requests by logical name
    if !metrics.requests.is_empty() {
        println!("\n┌─ REQUESTS ──────────────────────────────────────────────────┐");
        println!("│  name                 ok   degraded  failed  skipped  p95ms │");
        for (name, request) in &metrics.requests {
            let p95 = collector
                .latency_percentiles(name)
                .map(|stats| stats.p95)
                .unwrap_or(0);
            println!(
                "│  {:<18} {:>6}  {:>8}  {:>6}  {:>7}  {:>5} │",
                name, request.success, request.degraded, request.failed, request.skipped, p95
            );
        }
        println!("└─────────────────────────────────────────────────────────────┘");

        let total = metrics.total_requests();
        let failed = metrics.total_failed();
        if total > 0 {
            let error_rate = (failed as f64 / total as f64) * 100.0;
            let throughput = if elapsed > 0 {
                total as f64 / elapsed as f64
            } else {
                0.0
            };
            println!(
                "\n  Error Rate: {:>6.2}%    Throughput: {:>8.2} req/sec",
                error_rate, throughput
            );
        }
    }

    // System metrics
    println!("\n┌─ SYSTEM ────────────────────────────────────────────────────┐");
    println!(
        "│  CPU Usage:    {:>6.1}%    Memory: {:>6} / {:>6} MB       │",
        metrics.system.cpu_usage, metrics.system.memory_used_mb, metrics.system.memory_total_mb
    );
    println!("└─────────────────────────────────────────────────────────────┘");

    println!("\n  [Press Ctrl+C to stop test]");

    // Flush stdout to ensure immediate display
    let _ = io::stdout().flush();
}

/// Print final summary report
pub fn print_final_report(collector: &MetricsCollector) {
    let metrics = collector.get_snapshot();
    let elapsed = collector.elapsed_seconds();

    println!("\n╔════════════════════════════════════════════════════════════════╗");
    println!("║                    FINAL TEST REPORT                           ║");
    println!("╚════════════════════════════════════════════════════════════════╝");

    println!("\n📊 REQUESTS BY LOGICAL NAME");
    for (name, request) in &metrics.requests {
        println!("\n   {}", name);
        println!("     Issued:          {:>10}", request.total());
        println!("     Success:         {:>10}", request.success);
        println!("     Degraded:        {:>10}", request.degraded);
        println!("     Failed:          {:>10}", request.failed);
        if request.skipped > 0 {
            println!("     Skipped:         {:>10}", request.skipped);
        }
        println!(
            "     Failure Rate:    {:>10.2}%",
            request.failure_rate() * 100.0
        );

        if let Some(stats) = collector.latency_percentiles(name) {
            println!(
                "     Latency (ms):    p50 {:>6}  p95 {:>6}  p99 {:>6}  max {:>6}  mean {:>8.2}",
                stats.p50, stats.p95, stats.p99, stats.max, stats.mean
            );
        }
    }

    let total = metrics.total_requests();
    println!("\n📈 OVERALL");
    println!("   Total Requests:       {:>10}", total);
    println!("   Total Failed:         {:>10}", metrics.total_failed());
    println!("   Sessions Started:     {:>10}", metrics.sessions.started);

    if elapsed > 0 {
        let throughput = total as f64 / elapsed as f64;
        println!("   Throughput:           {:>10.2} req/sec", throughput);
    }

    println!("\n⏱️  Test Duration: {} seconds", elapsed);
    println!("════════════════════════════════════════════════════════════════\n");
}
