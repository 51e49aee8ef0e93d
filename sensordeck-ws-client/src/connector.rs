//! WebSocket channel implementation.
//!
//! [`WsClient`] manages a `tokio-tungstenite` connection to the
//! sensor-reporting backend, with:
//!
//! - **Inbound dispatch**: text frame → `MessageHandler::on_message`
//! - **Reconnection**: fixed backoff ladder with configurable limits
//! - **Keepalive**: periodic WebSocket `Ping` frames

use std::{sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, Mutex};
use tokio_tungstenite::tungstenite::{Bytes, Message};

use crate::{MessageHandler, WsClientError, WsClientResult};

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;
type WsWriteHalf = futures_util::stream::SplitSink<WsStream, Message>;
type WsReadHalf = futures_util::stream::SplitStream<WsStream>;

// ════════════════════════════════════════════════════════════════════
// Configuration
// ════════════════════════════════════════════════════════════════════

/// Internal configuration assembled by the builder.
pub(crate) struct WsClientConfig {
    pub url: String,
    pub auto_reconnect: bool,
    pub max_reconnect_attempts: usize,
    pub keepalive_interval: Option<Duration>,
}

// ════════════════════════════════════════════════════════════════════
// Connection status
// ════════════════════════════════════════════════════════════════════

/// Connection state of the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Disconnected,
    Reconnecting,
}

/// Shared mutable state protected by a Mutex.
struct SharedState {
    status: ConnectionStatus,
}

// ════════════════════════════════════════════════════════════════════
// Client implementation
// ════════════════════════════════════════════════════════════════════

/// Live WebSocket channel to the backend.
///
/// Created by [`WsClientBuilder::connect()`][crate::WsClientBuilder::connect].
/// Spawns background tasks for:
///
/// - Receiving frames and dispatching them to the handler
/// - Draining outbound frames (keepalive pings only — the panel never
///   publishes data)
/// - Automatic reconnection
pub struct WsClient {
    state: Arc<Mutex<SharedState>>,
}

impl WsClient {
    /// Connect to the backend and spawn the background tasks.
    pub(crate) async fn connect(
        config: WsClientConfig,
        handler: Arc<dyn MessageHandler>,
    ) -> WsClientResult<Self> {
        let state = Arc::new(Mutex::new(SharedState {
            status: ConnectionStatus::Connecting,
        }));

        let (ws_stream, _response) = tokio_tungstenite::connect_async(&config.url)
            .await
            .map_err(|e| WsClientError::connection_failed(&config.url, e))?;

        #[cfg(feature = "tracing")]
        tracing::info!("WS client: connected to {}", config.url);

        Self::spawn_io_tasks(ws_stream, &state, &handler, config.keepalive_interval).await;

        if config.auto_reconnect {
            tokio::spawn(Self::run_reconnect_watcher(
                state.clone(),
                config.url,
                handler,
                config.keepalive_interval,
                config.max_reconnect_attempts,
            ));
        }

        Ok(Self { state })
    }

    /// Current connection status.
    pub async fn status(&self) -> ConnectionStatus {
        self.state.lock().await.status
    }

    /// Split a fresh socket, mark the channel connected, and spawn the
    /// read/write/keepalive tasks against it. Used for the initial
    /// connection and again by the reconnect watcher.
    async fn spawn_io_tasks(
        ws_stream: WsStream,
        state: &Arc<Mutex<SharedState>>,
        handler: &Arc<dyn MessageHandler>,
        keepalive_interval: Option<Duration>,
    ) {
        let (ws_write, ws_read) = ws_stream.split();
        let (write_tx, write_rx) = mpsc::unbounded_channel::<Message>();

        state.lock().await.status = ConnectionStatus::Connected;

        tokio::spawn(Self::run_write_loop(ws_write, write_rx));

        tokio::spawn({
            let state = state.clone();
            let handler = handler.clone();
            async move {
                Self::run_read_loop(ws_read, &*handler).await;

                // Read loop ended — the connection is gone. The write loop
                // and keepalive unwind on their own once the channel closes.
                #[cfg(feature = "tracing")]
                tracing::warn!("WS client: read loop ended");

                state.lock().await.status = ConnectionStatus::Disconnected;
            }
        });

        if let Some(interval) = keepalive_interval {
            tokio::spawn(Self::run_keepalive(write_tx, interval));
        }
    }

    // ════════════════════════════════════════════════════════════════
    // Background task implementations
    // ════════════════════════════════════════════════════════════════

    /// Write loop: drains the mpsc channel and sends frames.
    async fn run_write_loop(mut ws_write: WsWriteHalf, mut write_rx: mpsc::UnboundedReceiver<Message>) {
        while let Some(msg) = write_rx.recv().await {
            if ws_write.send(msg).await.is_err() {
                #[cfg(feature = "tracing")]
                tracing::warn!("WS client: write failed, closing write loop");
                break;
            }
        }
    }

    /// Read loop: dispatches each text frame to the handler.
    async fn run_read_loop(mut ws_read: WsReadHalf, handler: &dyn MessageHandler) {
        while let Some(Ok(msg)) = ws_read.next().await {
            match msg {
                Message::Text(text) => handler.on_message(text.as_str()),
                Message::Close(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::info!("WS client: received close frame");
                    break;
                }
                _ => continue,
            }
        }
    }

    /// Keepalive loop: sends periodic `Ping` frames. Exits once the write
    /// loop (and with it the channel receiver) is gone.
    async fn run_keepalive(write_tx: mpsc::UnboundedSender<Message>, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        ticker.tick().await; // skip first immediate tick

        loop {
            ticker.tick().await;
            if write_tx.send(Message::Ping(Bytes::new())).is_err() {
                break;
            }
        }
    }

    /// Reconnect watcher: monitors connection status and reconnects when
    /// needed.
    ///
    /// Uses a fixed backoff ladder: 500ms, 1s, 2s, 4s, 8s (capped).
    async fn run_reconnect_watcher(
        state: Arc<Mutex<SharedState>>,
        url: String,
        handler: Arc<dyn MessageHandler>,
        keepalive_interval: Option<Duration>,
        max_attempts: usize,
    ) {
        let backoff = [500u64, 1_000, 2_000, 4_000, 8_000];
        let mut attempt = 0usize;

        loop {
            tokio::time::sleep(Duration::from_millis(1_000)).await;

            let status = state.lock().await.status;
            if status == ConnectionStatus::Connected || status == ConnectionStatus::Connecting {
                attempt = 0;
                continue;
            }

            if max_attempts > 0 && attempt >= max_attempts {
                #[cfg(feature = "tracing")]
                tracing::error!(
                    "WS client: max reconnect attempts ({}) reached, giving up",
                    max_attempts
                );
                break;
            }

            let delay_ms = backoff.get(attempt).copied().unwrap_or(8_000);
            attempt += 1;

            #[cfg(feature = "tracing")]
            tracing::info!(
                "WS client: reconnecting in {}ms (attempt {})",
                delay_ms,
                attempt
            );

            state.lock().await.status = ConnectionStatus::Reconnecting;
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;

            // Guard: status may have changed during sleep
            if state.lock().await.status != ConnectionStatus::Reconnecting {
                continue;
            }

            match tokio_tungstenite::connect_async(&url).await {
                Ok((ws_stream, _)) => {
                    #[cfg(feature = "tracing")]
                    tracing::info!("WS client: reconnected to {}", url);

                    Self::spawn_io_tasks(ws_stream, &state, &handler, keepalive_interval).await;
                    attempt = 0;
                }
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("WS client: reconnect failed: {}", _e);
                    state.lock().await.status = ConnectionStatus::Disconnected;
                }
            }
        }
    }
}
