//! Error types for the dualdiff CLI.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Non-finite evaluation result
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] dual_core::DualError),

    /// Verification found mismatches
    #[error("Verification failed: {failed} of {total} checks")]
    Verification {
        /// Number of failed checks
        failed: usize,
        /// Number of checks run
        total: usize,
    },

    /// Output serialisation error
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
