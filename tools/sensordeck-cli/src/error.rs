//! CLI Error Types

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI-specific errors with helpful messages and hints
#[derive(Debug, Error)]
#[allow(dead_code)] // Some variants are for future use
pub enum CliError {
    /// Could not reach the sensor backend
    #[error("{0}\n  Hint: Check that the sensor backend is running and reachable")]
    Connection(#[from] sensordeck_ws_client::WsClientError),

    /// Replay input could not be read
    #[error("Cannot read '{path}': {source}")]
    ReplayInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a replay input error
    pub fn replay_input(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReplayInput {
            path: path.into(),
            source,
        }
    }
}
