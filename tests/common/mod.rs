//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqline::http::{ClientError, HttpClient, HttpResponse};
use reqline::reqline::JsonMap;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A canned upstream reply.
#[allow(dead_code)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

/// Start a programmable raw-TCP backend on an ephemeral port.
///
/// Each connection reads one request (headers only) and answers with the
/// reply produced by `f`. Returns the bound address.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Reply> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let head = String::from_utf8_lossy(&buf[..n]).to_string();

                let reply = f(head).await;
                let status_text = match reply.status {
                    200 => "200 OK",
                    201 => "201 Created",
                    404 => "404 Not Found",
                    500 => "500 Internal Server Error",
                    _ => "200 OK",
                };
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_text,
                    reply.content_type,
                    reply.body.len(),
                    reply.body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
                tokio::time::sleep(Duration::from_millis(10)).await;
            });
        }
    });

    addr
}

/// One call seen by [`StubClient`].
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct StubCall {
    pub method: &'static str,
    pub url: String,
    pub headers: JsonMap,
    pub body: Option<JsonMap>,
}

/// In-process [`HttpClient`] returning a fixed response or failure.
#[allow(dead_code)]
pub struct StubClient {
    pub calls: Mutex<Vec<StubCall>>,
    pub response: Option<HttpResponse>,
}

#[allow(dead_code)]
impl StubClient {
    pub fn ok(status: u16, data: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: Some(HttpResponse { status, data }),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: None,
        })
    }

    pub fn calls(&self) -> Vec<StubCall> {
        self.calls.lock().unwrap().clone()
    }

    fn reply(&self) -> Result<HttpResponse, ClientError> {
        self.response
            .clone()
            .ok_or_else(|| ClientError::Decode("stub failure".into()))
    }
}

#[async_trait]
impl HttpClient for StubClient {
    async fn get(&self, url: &str, headers: &JsonMap) -> Result<HttpResponse, ClientError> {
        self.calls.lock().unwrap().push(StubCall {
            method: "GET",
            url: url.to_string(),
            headers: headers.clone(),
            body: None,
        });
        self.reply()
    }

    async fn post(
        &self,
        url: &str,
        body: &JsonMap,
        headers: &JsonMap,
    ) -> Result<HttpResponse, ClientError> {
        self.calls.lock().unwrap().push(StubCall {
            method: "POST",
            url: url.to_string(),
            headers: headers.clone(),
            body: Some(body.clone()),
        });
        self.reply()
    }
}
