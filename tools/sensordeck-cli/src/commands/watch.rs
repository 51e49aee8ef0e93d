//! Watch Command - Live Sensor Feed Monitoring

use std::sync::Mutex;
use std::time::Duration;

use clap::Args;
use sensordeck_core::{PanelState, Render};
use sensordeck_ws_client::{panel_url, MessageHandler, WsClientBuilder};
use tokio::signal;

use crate::error::CliResult;
use crate::output::live::{self, TermRenderer};

/// Watch the live sensor feed
#[derive(Debug, Args)]
pub struct WatchCommand {
    /// Full WebSocket URL of the backend (e.g. ws://sensors.local:8000)
    #[arg(long)]
    pub url: Option<String>,

    /// Backend host[:port], used when --url is not given
    #[arg(long)]
    pub host: Option<String>,

    /// Connect with TLS (wss://) when building the URL from --host
    #[arg(long)]
    pub tls: bool,

    /// Keepalive ping interval in seconds (0 disables)
    #[arg(long, default_value = "30")]
    pub keepalive: u64,

    /// Maximum reconnect attempts (0 = unlimited)
    #[arg(long, default_value = "0")]
    pub max_reconnects: usize,

    /// Disable automatic reconnection
    #[arg(long)]
    pub no_reconnect: bool,

    /// Retained log entries (0 disables the log region)
    #[arg(long, default_value = "256")]
    pub log_capacity: usize,
}

impl WatchCommand {
    pub async fn execute(self) -> CliResult<()> {
        let url = resolve_url(
            self.url,
            std::env::var("SENSORDECK_URL").ok(),
            self.host,
            self.tls,
        );

        tracing::info!("Connecting to sensor backend: {}", url);

        live::print_panel_start(&url);

        let client = WsClientBuilder::new(&url)
            .with_auto_reconnect(!self.no_reconnect)
            .with_max_reconnect_attempts(self.max_reconnects)
            .with_keepalive_ms(self.keepalive * 1_000)
            .connect(LivePanel::new(self.log_capacity))
            .await?;

        // Until Ctrl+C: frames render from the read task; this loop only
        // surfaces connection status transitions.
        let mut last_status = client.status().await;
        let mut ticker = tokio::time::interval(Duration::from_millis(500));

        loop {
            tokio::select! {
                _ = signal::ctrl_c() => break,
                _ = ticker.tick() => {
                    let status = client.status().await;
                    if status != last_status {
                        tracing::info!("Connection status changed: {:?}", status);
                        live::print_connection_status(status);
                        last_status = status;
                    }
                }
            }
        }

        live::print_panel_stop();

        Ok(())
    }
}

/// URL resolution order: `--url`, then `$SENSORDECK_URL`, then
/// `--host`/`--tls` (defaulting to localhost:8000).
fn resolve_url(
    url: Option<String>,
    env_url: Option<String>,
    host: Option<String>,
    tls: bool,
) -> String {
    if let Some(url) = url {
        return url;
    }
    if let Some(url) = env_url.filter(|u| !u.is_empty()) {
        return url;
    }
    let host = host.unwrap_or_else(|| "localhost:8000".to_string());
    panel_url(&host, tls)
}

/// The live panel: owns the state and re-renders on every inbound frame.
///
/// `on_message` is called from the channel's read task, one frame at a
/// time, so the lock is never contended.
struct LivePanel {
    state: Mutex<PanelState>,
    renderer: TermRenderer,
}

impl LivePanel {
    fn new(log_capacity: usize) -> Self {
        Self {
            state: Mutex::new(PanelState::with_log_capacity(log_capacity)),
            renderer: TermRenderer,
        }
    }
}

impl MessageHandler for LivePanel {
    fn on_message(&self, payload: &str) {
        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        let applied = state.apply(payload);
        self.renderer.render(&state, &applied);
    }
}
