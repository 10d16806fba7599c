//! HTTP client for the upstream service.
//!
//! # Responsibilities
//! - Build one pooled reqwest client at startup
//! - Send the outbound request with its method, headers and body unchanged
//! - Buffer the response body and map failures to `UpstreamError`
//!
//! # Design Decisions
//! - Redirects are never followed; a 3xx goes back to the caller as-is
//! - A single total timeout covers connect, send and body read
//! - System proxy variables are ignored; the upstream is always dialed directly
//! - Compressed bodies are decoded here, which is why the relay drops
//!   `Content-Encoding` on the way back

use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{redirect, Client, Url};

use crate::config::TimeoutConfig;
use crate::upstream::{OutboundRequest, Upstream, UpstreamError, UpstreamResponse};

/// reqwest-backed `Upstream`.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
    timeout: Duration,
}

impl HttpUpstream {
    /// Create a client with redirects disabled and the configured timeout.
    pub fn new(config: &TimeoutConfig) -> Result<Self, UpstreamError> {
        let timeout = Duration::from_secs(config.request_secs);
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .timeout(timeout)
            .no_proxy()
            .build()
            .map_err(|e| UpstreamError::Transport(describe(&e)))?;

        Ok(Self { client, timeout })
    }

    fn map_error(&self, err: reqwest::Error) -> UpstreamError {
        if err.is_timeout() {
            UpstreamError::Timeout(self.timeout)
        } else {
            UpstreamError::Transport(describe(&err))
        }
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn send(&self, request: OutboundRequest) -> Result<UpstreamResponse, UpstreamError> {
        let url = Url::parse(&request.url).map_err(|e| UpstreamError::InvalidTarget {
            url: request.url.clone(),
            reason: e.to_string(),
        })?;

        let response = self
            .client
            .request(request.method, url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| self.map_error(e))?;

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }
}

/// Render an error with its source chain, e.g.
/// `error sending request for url (...): client error (Connect): Connection refused`.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
