//! CLI error types

use rng_engine::RngError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `rngbench` commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine rejected an operation or its parameters
    #[error("Engine error: {0}")]
    Engine(#[from] RngError),

    /// Configuration could not be loaded or validated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command-line arguments are inconsistent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Worker pool could not be started
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
