//! Error types surfaced by the generator and the config loader

use std::path::PathBuf;
use thiserror::Error;

use crate::constants::{GENERIC_ERROR_MESSAGE, VALIDATION_MESSAGE};

/// The two ways a submit can fail.
///
/// The `Display` text is exactly what the user sees, so request failures never
/// leak transport or server detail. The cause is logged instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("{}", VALIDATION_MESSAGE)]
    EmptyPrompt,
    #[error("{}", GENERIC_ERROR_MESSAGE)]
    RequestFailed,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("config file {} does not exist", .path.display())]
    NotFound { path: PathBuf },
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("timeout must be at least 1 second")]
    ZeroTimeout,
}
