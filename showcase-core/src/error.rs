/// Error types for the carousel data load and configuration
use thiserror::Error;

/// Why the post list could not be loaded. Every variant ends in the
/// placeholder being shown; none is retried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed post list: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(serde_json::Error),
}
