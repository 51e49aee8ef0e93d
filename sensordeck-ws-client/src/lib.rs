//! # sensordeck-ws-client
//!
//! The panel's transport channel: a reconnecting `tokio-tungstenite`
//! WebSocket client that delivers each inbound text frame to an injected
//! [`MessageHandler`].
//!
//! The handler seam is the whole point — panel logic never sees a socket,
//! so it can be driven in tests (or by the `replay` command) with plain
//! strings. Connection lifecycle stays in here:
//!
//! - **Reconnection**: fixed backoff ladder (500 ms → 8 s, capped) with a
//!   configurable attempt limit
//! - **Keepalive**: periodic WebSocket `Ping` frames
//! - **Status**: [`ConnectionStatus`] observable on the live client
//!
//! # Example
//!
//! ```rust,ignore
//! use sensordeck_ws_client::{panel_url, WsClientBuilder};
//!
//! let client = WsClientBuilder::new(panel_url("sensors.local:8000", false))
//!     .with_keepalive_ms(30_000)
//!     .connect(handler)
//!     .await?;
//! ```

mod builder;
mod connector;
mod error;

pub use builder::WsClientBuilder;
pub use connector::{ConnectionStatus, WsClient};
pub use error::{WsClientError, WsClientResult};

/// Receives each inbound text frame from the channel.
///
/// Invoked from the client's read task, one frame at a time, in delivery
/// order; never concurrently with itself.
pub trait MessageHandler: Send + Sync + 'static {
    fn on_message(&self, payload: &str);
}

impl<F> MessageHandler for F
where
    F: Fn(&str) + Send + Sync + 'static,
{
    fn on_message(&self, payload: &str) {
        self(payload)
    }
}

/// Build the panel's WebSocket URL for a host, choosing `wss://` or
/// `ws://` to match the caller's own transport security.
pub fn panel_url(host: &str, tls: bool) -> String {
    let scheme = if tls { "wss" } else { "ws" };
    format!("{scheme}://{host}")
}
