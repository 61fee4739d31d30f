//! Shared utilities for integration tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use deploy_canary::{HttpServer, RequestCounter, ServiceConfig, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A service instance running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub counter: Arc<RequestCounter>,
    pub handle: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Test configuration with a recognisable environment label.
pub fn test_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.host = "127.0.0.1".to_string();
    config.listener.port = 0;
    config.environment = "integration".to_string();
    config
}

/// Start a server in the background. The listener is bound before this
/// returns, so requests can be sent immediately.
pub async fn spawn_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(test_config());
    let counter = server.state().counter.clone();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(server.run(listener, server_shutdown));

    TestServer {
        addr,
        shutdown,
        counter,
        handle,
    }
}

/// HTTP client that ignores proxy settings from the environment.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// A request body that is sent chunk by chunk as the test pushes into the
/// returned sender. The body ends when the sender is dropped.
pub fn streamed_body() -> (tokio::sync::mpsc::Sender<&'static str>, reqwest::Body) {
    let (chunk_tx, chunk_rx) = tokio::sync::mpsc::channel::<&'static str>(4);
    let stream = futures_util::stream::unfold(chunk_rx, |mut rx| async move {
        rx.recv()
            .await
            .map(|chunk| (Ok::<_, std::io::Error>(chunk), rx))
    });
    (chunk_tx, reqwest::Body::wrap_stream(stream))
}
