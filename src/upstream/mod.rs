//! Upstream dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! OutboundRequest (method, target URL, filtered headers, body)
//!     → Upstream::send
//!         → client.rs (reqwest, redirects disabled, fixed timeout)
//!     → Ok(UpstreamResponse) | Err(UpstreamError)
//! ```
//!
//! # Design Decisions
//! - The handler depends on the `Upstream` trait, not on reqwest, so tests can
//!   substitute a recording double
//! - One attempt per request; no retries
//! - Bodies are fully buffered in both directions

pub mod client;

use std::time::Duration;

use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode};
use thiserror::Error;

pub use client::HttpUpstream;

/// A request ready to be sent to the upstream.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    /// Absolute URL: upstream base + rewritten path (+ query).
    pub url: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// What the upstream answered, fully buffered.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Transport-level failures talking to the upstream.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// No complete response within the request timeout.
    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection, DNS, TLS or protocol failure.
    #[error("{0}")]
    Transport(String),

    /// The target URL could not be turned into a request.
    #[error("invalid target URL '{url}': {reason}")]
    InvalidTarget { url: String, reason: String },
}

/// Sends one request to the upstream and buffers the answer.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn send(&self, request: OutboundRequest) -> Result<UpstreamResponse, UpstreamError>;
}
