//! Integration tests for sensordeck-ws-client
//!
//! These tests run a real in-process tungstenite server and verify frame
//! delivery through the handler seam.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::SinkExt;
use sensordeck_ws_client::{ConnectionStatus, MessageHandler, WsClientBuilder};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;

/// Spawn a one-shot WebSocket server that pushes `frames` to the first
/// client and then closes. Returns the bound address.
async fn spawn_server(frames: Vec<&'static str>) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("Failed to accept");
        let mut ws = tokio_tungstenite::accept_async(stream)
            .await
            .expect("WS handshake failed");

        for frame in frames {
            ws.send(Message::Text(frame.into()))
                .await
                .expect("Failed to send frame");
        }

        // Leave the socket open long enough for the client to drain it.
        tokio::time::sleep(Duration::from_millis(200)).await;
        let _ = ws.close(None).await;
    });

    addr
}

/// Poll until `check` passes or the timeout elapses.
async fn wait_for(mut check: impl FnMut() -> bool) {
    for _ in 0..200 {
        if check() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Condition not met within timeout");
}

/// Frames arrive at the handler in delivery order.
#[tokio::test]
async fn delivers_text_frames_in_order() {
    let addr = spawn_server(vec![
        r#"{"deviceParameter":"Temperature","deviceValue":30}"#,
        r#"{"deviceParameter":"Humidity","deviceValue":40}"#,
        r#"{"deviceParameter":"Temperature","deviceValue":25}"#,
    ])
    .await;

    let received = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = received.clone();

    let _client = WsClientBuilder::new(format!("ws://{addr}"))
        .with_auto_reconnect(false)
        .with_keepalive_ms(0)
        .connect(move |payload: &str| {
            sink.lock().expect("Lock poisoned").push(payload.to_string());
        })
        .await
        .expect("Failed to connect");

    wait_for(|| received.lock().expect("Lock poisoned").len() == 3).await;

    let frames = received.lock().expect("Lock poisoned").clone();
    assert_eq!(
        frames,
        vec![
            r#"{"deviceParameter":"Temperature","deviceValue":30}"#,
            r#"{"deviceParameter":"Humidity","deviceValue":40}"#,
            r#"{"deviceParameter":"Temperature","deviceValue":25}"#,
        ]
    );
}

/// A hand-written handler type works through the builder as well.
#[tokio::test]
async fn accepts_struct_handler() {
    struct Counter {
        hits: Arc<Mutex<usize>>,
    }
    impl MessageHandler for Counter {
        fn on_message(&self, _payload: &str) {
            *self.hits.lock().expect("Lock poisoned") += 1;
        }
    }

    let addr = spawn_server(vec![r#"{"deviceParameter":"Temperature","deviceValue":10}"#]).await;

    let hits = Arc::new(Mutex::new(0));
    let handler = Counter { hits: hits.clone() };

    let _client = WsClientBuilder::new(format!("ws://{addr}"))
        .with_auto_reconnect(false)
        .with_keepalive_ms(0)
        .connect(handler)
        .await
        .expect("Failed to connect");

    wait_for(|| *hits.lock().expect("Lock poisoned") == 1).await;
}

/// Status is Connected after connect and Disconnected once the server
/// closes the socket.
#[tokio::test]
async fn tracks_connection_status() {
    let addr = spawn_server(vec![]).await;

    let client = WsClientBuilder::new(format!("ws://{addr}"))
        .with_auto_reconnect(false)
        .with_keepalive_ms(0)
        .connect(|_payload: &str| {})
        .await
        .expect("Failed to connect");

    assert_eq!(client.status().await, ConnectionStatus::Connected);

    // Server closes after ~200ms; the read loop should notice.
    for _ in 0..200 {
        if client.status().await == ConnectionStatus::Disconnected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Client never observed the disconnect");
}

/// Connecting to a dead port surfaces a ConnectionFailed error.
#[tokio::test]
async fn initial_connect_failure_is_an_error() {
    // Bind then immediately drop to get a port with no listener.
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);

    let result = WsClientBuilder::new(format!("ws://{addr}"))
        .with_auto_reconnect(false)
        .connect(|_payload: &str| {})
        .await;

    let err = result.err().expect("Connect should have failed");
    assert!(err.to_string().contains("connection failed"));
}
