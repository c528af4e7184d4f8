//! Error types for pscanner.
//!
//! Uses `thiserror` for ergonomic error definitions. Individual dial failures
//! never show up here: a port that does not accept a connection is simply not
//! reported as open.

use crate::types::PortError;
use std::path::PathBuf;
use thiserror::Error;

/// Largest worker pool the command line accepts.
pub const MAX_WORKERS: i64 = 10_000;

/// Errors raised by the scan engine itself.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Worker task failed: {0}")]
    WorkerFailed(String),
}

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Invalid command-line or settings-file configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("--host is required")]
    MissingHost,

    #[error("--workers must be > 0 (got {0})")]
    WorkersNotPositive(i64),

    #[error("--workers too large (max 10000, got {0})")]
    WorkersTooLarge(i64),

    #[error("could not locate a configuration directory")]
    DirectoryNotFound,

    #[error("failed to read settings file {}: {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings file {}: {reason}", .path.display())]
    InvalidFormat { path: PathBuf, reason: String },
}

/// Result type alias for configuration handling.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error surfaced by the command-line front end.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("error parsing ports: {0}")]
    Ports(#[from] PortError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Bad user input exits with 2, anything that goes wrong after the scan
    /// has been accepted exits with 1.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Ports(_) | Self::Config(_) => 2,
            Self::Scan(_) | Self::Io(_) | Self::Json(_) => 1,
        }
    }
}

/// Result type alias for command-line handling.
pub type CliResult<T> = Result<T, CliError>;
