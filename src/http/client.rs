//! Outbound HTTP collaborator.
//!
//! # Responsibilities
//! - Define the `HttpClient` capability the executor dispatches through
//! - Provide the reqwest-backed implementation used in production
//!
//! # Design Decisions
//! - Trait object seam so tests can substitute a stub without sockets
//! - Transport concerns (TLS, pooling, timeouts) belong to reqwest
//! - Header and query values that are not JSON strings are sent as JSON text

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::reqline::parser::JsonMap;
use crate::reqline::query::value_text;

/// Status and decoded payload of an outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub data: Value,
}

/// Failures raised by an [`HttpClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, TLS, timeout or protocol failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A header name or value cannot be sent on the wire.
    #[error("invalid header '{0}'")]
    InvalidHeader(String),

    /// The upstream declared JSON but sent something else.
    #[error("response body is not valid JSON: {0}")]
    Decode(String),

    /// Non-2xx upstream status, when configured to fail on those.
    #[error("upstream responded with status {0}")]
    Status(u16),
}

/// The outbound HTTP capability consumed by the executor.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET with the given headers.
    async fn get(&self, url: &str, headers: &JsonMap) -> Result<HttpResponse, ClientError>;

    /// Issue a POST with a JSON body and the given headers.
    async fn post(
        &self,
        url: &str,
        body: &JsonMap,
        headers: &JsonMap,
    ) -> Result<HttpResponse, ClientError>;
}

/// [`HttpClient`] backed by a pooled `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    fail_on_error_status: bool,
}

impl ReqwestClient {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let inner = builder.build()?;

        Ok(Self {
            inner,
            fail_on_error_status: config.fail_on_error_status,
        })
    }

    async fn finish(&self, response: reqwest::Response) -> Result<HttpResponse, ClientError> {
        let status = response.status();
        if self.fail_on_error_status && !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("json"));
        let text = response.text().await?;

        Ok(HttpResponse {
            status: status.as_u16(),
            data: decode_body(&text, is_json)?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str, headers: &JsonMap) -> Result<HttpResponse, ClientError> {
        let response = self
            .inner
            .get(url)
            .headers(header_map(headers)?)
            .send()
            .await?;
        self.finish(response).await
    }

    async fn post(
        &self,
        url: &str,
        body: &JsonMap,
        headers: &JsonMap,
    ) -> Result<HttpResponse, ClientError> {
        let response = self
            .inner
            .post(url)
            .headers(header_map(headers)?)
            .json(body)
            .send()
            .await?;
        self.finish(response).await
    }
}

/// Convert a JSON header map into wire headers.
pub fn header_map(headers: &JsonMap) -> Result<HeaderMap, ClientError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ClientError::InvalidHeader(name.clone()))?;
        let header_value = HeaderValue::from_str(&value_text(value))
            .map_err(|_| ClientError::InvalidHeader(name.clone()))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// Decode a response body: JSON when declared, otherwise the raw text.
pub fn decode_body(text: &str, is_json: bool) -> Result<Value, ClientError> {
    if text.is_empty() {
        return Ok(Value::Null);
    }
    if is_json {
        serde_json::from_str(text).map_err(|e| ClientError::Decode(e.to_string()))
    } else {
        Ok(Value::String(text.to_string()))
    }
}
