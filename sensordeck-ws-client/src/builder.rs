//! Builder for the WebSocket channel.
//!
//! # Lifecycle
//!
//! ```text
//! WsClientBuilder::new(url)
//!   └─ connect(handler)
//!        ├─ connect to the backend
//!        ├─ spawn read loop (handler dispatch)
//!        ├─ spawn write loop + keepalive
//!        ├─ spawn reconnect watcher
//!        └─ return WsClient
//! ```

use std::{sync::Arc, time::Duration};

use crate::connector::{WsClient, WsClientConfig};
use crate::{MessageHandler, WsClientResult};

/// Builder for the panel's WebSocket channel.
///
/// # Example
///
/// ```rust,ignore
/// let client = WsClientBuilder::new("ws://sensors.local:8000")
///     .with_auto_reconnect(true)
///     .with_keepalive_ms(30_000)
///     .connect(handler)
///     .await?;
/// ```
pub struct WsClientBuilder {
    /// WebSocket URL to connect to (e.g., `wss://sensors.example.com`).
    url: String,
    /// Re-connect automatically on close (default: true).
    auto_reconnect: bool,
    /// Maximum reconnect attempts before giving up (0 = unlimited, default: 0).
    max_reconnect_attempts: usize,
    /// Keepalive ping interval in milliseconds (default: 30_000).
    keepalive_ms: u64,
}

impl WsClientBuilder {
    /// Create a new builder targeting the given WebSocket URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auto_reconnect: true,
            max_reconnect_attempts: 0,
            keepalive_ms: 30_000,
        }
    }

    /// Enable or disable automatic reconnection on disconnect (default: `true`).
    pub fn with_auto_reconnect(mut self, enabled: bool) -> Self {
        self.auto_reconnect = enabled;
        self
    }

    /// Set maximum reconnect attempts (0 = unlimited, default: 0).
    pub fn with_max_reconnect_attempts(mut self, max: usize) -> Self {
        self.max_reconnect_attempts = max;
        self
    }

    /// Set the keepalive ping interval in milliseconds (default: 30 000).
    ///
    /// Set to 0 to disable keepalive pings.
    pub fn with_keepalive_ms(mut self, ms: u64) -> Self {
        self.keepalive_ms = ms;
        self
    }

    /// Connect to the backend, wiring every inbound text frame into
    /// `handler`, and spawn the channel's background tasks.
    pub async fn connect(self, handler: impl MessageHandler) -> WsClientResult<WsClient> {
        let config = WsClientConfig {
            url: self.url,
            auto_reconnect: self.auto_reconnect,
            max_reconnect_attempts: self.max_reconnect_attempts,
            keepalive_interval: if self.keepalive_ms > 0 {
                Some(Duration::from_millis(self.keepalive_ms))
            } else {
                None
            },
        };

        WsClient::connect(config, Arc::new(handler)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = WsClientBuilder::new("ws://localhost:8000");
        assert!(builder.auto_reconnect);
        assert_eq!(builder.max_reconnect_attempts, 0);
        assert_eq!(builder.keepalive_ms, 30_000);
    }

    #[test]
    fn builder_knobs() {
        let builder = WsClientBuilder::new("ws://localhost:8000")
            .with_auto_reconnect(false)
            .with_max_reconnect_attempts(3)
            .with_keepalive_ms(0);
        assert!(!builder.auto_reconnect);
        assert_eq!(builder.max_reconnect_attempts, 3);
        assert_eq!(builder.keepalive_ms, 0);
    }
}
