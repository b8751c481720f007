//! Error types for the quadra binary.

use quadra_grid::GridError;
use quadra_session::SessionError;
use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that stop or interrupt a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    /// A flag or variable expected a non-negative integer
    #[error("invalid value for {name}: {value:?}")]
    InvalidNumber { name: String, value: String },

    /// A flag was given without its value
    #[error("missing value for {0}")]
    MissingValue(String),

    /// Unrecognised flag
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    /// Unparseable command line on stdin
    #[error("bad command: {0}")]
    BadCommand(String),

    /// Invalid grid configuration
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// Session error
    #[error(transparent)]
    Session(#[from] SessionError),

    /// JSON output error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
