//! Error types for the load generator library.

use thiserror::Error;

/// Errors raised while setting up or driving a load run.
#[derive(Debug, Error)]
pub enum Error {
    /// The target host could not be parsed as a base URL.
    #[error("invalid gateway host: {0}")]
    InvalidHost(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Waiting for the shutdown signal failed.
    #[error("signal handler error: {0}")]
    Signal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
