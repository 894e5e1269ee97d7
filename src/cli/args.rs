use clap::{Args, Parser, Subcommand};

/// Gateway Load Generator
#[derive(Parser, Debug)]
#[command(name = "gateway-loadgen")]
#[command(about = "Load generator for the e-commerce API gateway")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub scenario: Scenario,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Gateway base URL, e.g. http://gateway.local:8080
    #[arg(long, env = "GATEWAY_HOST")]
    pub host: String,

    /// Number of concurrent sessions (overrides the load profile)
    #[arg(long)]
    pub sessions: Option<usize>,

    /// Test duration in seconds
    #[arg(long, default_value = "60")]
    pub duration: u64,

    /// Metrics reporting interval in seconds
    #[arg(long, default_value = "5")]
    pub report_interval: u64,

    /// Minimum think time between steps in seconds
    #[arg(long, default_value = "1.0")]
    pub think_min: f64,

    /// Maximum think time between steps in seconds
    #[arg(long, default_value = "3.0")]
    pub think_max: f64,

    /// Load configuration profile: dev, steady, stress
    #[arg(long, default_value = "steady")]
    pub load_profile: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Scenario {
    /// Assign each session a behavior profile by weight (shopping vs browsing)
    Mixed(MixedArgs),

    /// Run the ordered shopping journey in every session
    Shopping,

    /// Run the read-only catalogue browsing mix in every session
    Browsing(BrowsingArgs),
}

#[derive(Args, Debug, Clone)]
pub struct MixedArgs {
    /// Relative weight of the shopping journey profile
    #[arg(long, default_value = "2")]
    pub shopping_weight: u32,

    /// Relative weight of the catalogue browsing profile
    #[arg(long, default_value = "1")]
    pub browsing_weight: u32,

    /// Upper bound for random product ids in browsing sessions
    #[arg(long, default_value = "20")]
    pub catalogue_size: u64,
}

#[derive(Args, Debug, Clone)]
pub struct BrowsingArgs {
    /// Upper bound for random product ids
    #[arg(long, default_value = "20")]
    pub catalogue_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_defaults_reproduce_the_profile_weights() {
        let cli = Cli::parse_from(["gateway-loadgen", "--host", "http://localhost:8080", "mixed"]);
        match cli.scenario {
            Scenario::Mixed(args) => {
                assert_eq!(args.shopping_weight, 2);
                assert_eq!(args.browsing_weight, 1);
                assert_eq!(args.catalogue_size, 20);
            }
            other => panic!("expected mixed, got {other:?}"),
        }
        assert_eq!(cli.run.duration, 60);
        assert_eq!(cli.run.think_min, 1.0);
        assert_eq!(cli.run.think_max, 3.0);
    }

    #[test]
    fn host_is_required() {
        // The env fallback would satisfy the flag, so clear it first.
        std::env::remove_var("GATEWAY_HOST");
        assert!(Cli::try_parse_from(["gateway-loadgen", "mixed"]).is_err());
    }

    #[test]
    fn browsing_catalogue_size_is_overridable() {
        let cli = Cli::parse_from([
            "gateway-loadgen",
            "--host",
            "http://localhost:8080",
            "browsing",
            "--catalogue-size",
            "50",
        ]);
        match cli.scenario {
            Scenario::Browsing(args) => assert_eq!(args.catalogue_size, 50),
            other => panic!("expected browsing, got {other:?}"),
        }
    }
}
