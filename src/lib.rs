//! Load generator for an e-commerce API gateway.
//!
//! Replays simulated shopper sessions against a gateway fronting a product
//! service and an order service. Each session is an isolated tokio task that
//! runs one behavior profile (an ordered shopping journey or a weighted
//! catalogue-browsing mix) until the run deadline, while a shared collector
//! aggregates latency and outcome counts under fixed logical request names.

pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod metrics;
pub mod runner;
pub mod scenarios;
pub mod session;
pub mod weighted;

pub use error::{Error, Result};
