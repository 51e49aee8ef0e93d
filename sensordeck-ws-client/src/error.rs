//! Error types for the WebSocket channel.

use thiserror::Error;

/// Result type for WS client operations.
pub type WsClientResult<T> = Result<T, WsClientError>;

/// Errors that can occur while establishing the channel.
///
/// After `connect` returns, failures are handled internally by the
/// reconnect watcher rather than surfaced to the caller.
#[derive(Debug, Error)]
pub enum WsClientError {
    /// Initial connection to the backend failed.
    #[error("WebSocket connection failed to {url}: {source}")]
    ConnectionFailed {
        url: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },
}

impl WsClientError {
    pub(crate) fn connection_failed(
        url: impl Into<String>,
        source: tokio_tungstenite::tungstenite::Error,
    ) -> Self {
        Self::ConnectionFailed {
            url: url.into(),
            source,
        }
    }
}
