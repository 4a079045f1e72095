//! Error types for the Rostrum CLI.

use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error (reading or writing files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Description file could not be loaded or validated
    #[error("{0}")]
    Config(#[from] rostrum_config::ConfigError),

    /// Document could not be built or rendered
    #[error("{0}")]
    Swagger(#[from] rostrum_swagger::SwaggerError),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
