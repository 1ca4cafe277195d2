//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use travel_relay::config::RelayConfig;
use travel_relay::upstream::{TravelApi, TripAdvisorClient, UpstreamError};
use travel_relay::RelayServer;

/// Request line and headers of one request seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Start a mock upstream on an ephemeral port that answers every request
/// with `status` and `body`, reporting each request on the returned channel.
pub async fn start_mock_upstream(
    status: u16,
    body: &'static str,
) -> (SocketAddr, mpsc::UnboundedReceiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let (socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => break,
            };
            let tx = tx.clone();
            tokio::spawn(async move {
                let (read, mut write) = socket.into_split();
                let mut reader = BufReader::new(read);

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).await.unwrap_or(0) == 0 {
                    return;
                }
                let mut headers = Vec::new();
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
                        break;
                    }
                    let line = line.trim_end();
                    if line.is_empty() {
                        break;
                    }
                    if let Some((k, v)) = line.split_once(':') {
                        headers.push((k.trim().to_string(), v.trim().to_string()));
                    }
                }
                let _ = tx.send(CapturedRequest {
                    request_line: request_line.trim_end().to_string(),
                    headers,
                });

                let status_text = match status {
                    200 => "200 OK",
                    404 => "404 Not Found",
                    401 => "401 Unauthorized",
                    500 => "500 Internal Server Error",
                    _ => "200 OK",
                };
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_text,
                    body.len(),
                    body
                );
                let _ = write.write_all(response.as_bytes()).await;
                let _ = write.shutdown().await;
            });
        }
    });

    (addr, rx)
}

/// Client that bypasses any proxy configured in the environment.
pub fn direct_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

pub fn config_with_key(key: Option<&str>) -> RelayConfig {
    match key {
        Some(key) => RelayConfig::default().with_api_key(key),
        None => RelayConfig::default(),
    }
}

/// Spawn a relay on an ephemeral port forwarding to `upstream_base`.
pub async fn start_relay(config: RelayConfig, upstream_base: String) -> SocketAddr {
    let upstream = Arc::new(TripAdvisorClient::with_client(direct_client(), upstream_base));
    let server = RelayServer::with_upstream(config, upstream);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener, std::future::pending()).await;
    });
    addr
}

/// One call observed by [`FakeUpstream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamCall {
    Search { api_key: String, query: String },
    Details { api_key: String, location_id: String },
}

/// In-process upstream that records calls and returns a fixed body.
pub struct FakeUpstream {
    body: Value,
    calls: Mutex<Vec<UpstreamCall>>,
}

impl FakeUpstream {
    pub fn new(body: Value) -> Arc<Self> {
        Arc::new(Self {
            body,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<UpstreamCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TravelApi for FakeUpstream {
    async fn search_locations(&self, api_key: &str, query: &str) -> Result<Value, UpstreamError> {
        self.calls.lock().unwrap().push(UpstreamCall::Search {
            api_key: api_key.to_string(),
            query: query.to_string(),
        });
        Ok(self.body.clone())
    }

    async fn location_details(
        &self,
        api_key: &str,
        location_id: &str,
    ) -> Result<Value, UpstreamError> {
        self.calls.lock().unwrap().push(UpstreamCall::Details {
            api_key: api_key.to_string(),
            location_id: location_id.to_string(),
        });
        Ok(self.body.clone())
    }
}
