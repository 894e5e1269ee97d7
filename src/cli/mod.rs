// CLI module
// Command line argument definitions

pub mod args;

pub use args::{BrowsingArgs, Cli, MixedArgs, RunArgs, Scenario};
