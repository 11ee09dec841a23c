//! Error types for the hexgrid CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad or missing command-line arguments
    #[error("{0}")]
    Usage(String),

    /// An environment variable held an unusable value
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// Board file could not be read
    #[error("failed to read board {path:?}: {source}")]
    BoardIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Board file or output was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Engine rejected the input
    #[error(transparent)]
    Grid(#[from] critfumble_hexgrid::Error),
}
