use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use gateway_loadgen::cli::{Cli, Scenario};
use gateway_loadgen::config;
use gateway_loadgen::gateway::GatewayClient;
use gateway_loadgen::runner::{self, RunPlan};
use gateway_loadgen::scenarios::behavior_table;
use gateway_loadgen::session::ThinkTime;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.run.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let profile = config::get_load_profile(&cli.run.load_profile);
    let sessions = cli.run.sessions.unwrap_or(profile.sessions);

    tracing::info!("Gateway Load Generator Starting...");
    tracing::info!("Host: {}", cli.run.host);
    tracing::info!("Sessions: {}", sessions);
    tracing::info!("Duration: {}s", cli.run.duration);
    tracing::info!("Profile: {}", profile.name);
    tracing::info!(
        "Think Time: {:.1}-{:.1}s",
        cli.run.think_min,
        cli.run.think_max
    );

    // Resolve the behavior mix and scenario-local settings
    let (behaviors, catalogue_size) = match &cli.scenario {
        Scenario::Mixed(args) => {
            tracing::info!("Running Mixed scenario");
            tracing::info!("  Shopping Weight: {}", args.shopping_weight);
            tracing::info!("  Browsing Weight: {}", args.browsing_weight);
            tracing::info!("  Catalogue Size: {}", args.catalogue_size);
            (
                behavior_table(args.shopping_weight, args.browsing_weight),
                args.catalogue_size,
            )
        }
        Scenario::Shopping => {
            tracing::info!("Running Shopping scenario");
            (behavior_table(1, 0), 20)
        }
        Scenario::Browsing(args) => {
            tracing::info!("Running Browsing scenario");
            tracing::info!("  Catalogue Size: {}", args.catalogue_size);
            (behavior_table(0, 1), args.catalogue_size)
        }
    };

    let gateway = GatewayClient::new(&cli.run.host, &profile)?;
    let plan = RunPlan {
        sessions,
        duration: Duration::from_secs(cli.run.duration),
        report_interval_secs: cli.run.report_interval,
        think_time: ThinkTime::new(cli.run.think_min, cli.run.think_max),
        behaviors,
        catalogue_size,
    };

    runner::run(gateway, plan).await?;

    tracing::info!("Load test complete");
    Ok(())
}
