//! Per-request spans.
//!
//! # Responsibilities
//! - Open one span per inbound request with a generated request ID
//! - Carry method and path so every relay event is attributable
//!
//! # Design Decisions
//! - The request ID lives in the span only; it is never injected into
//!   forwarded headers
//! - UUID v4, generated as early as possible (at the TraceLayer)
//! - The query string is left out; it may carry credentials

use axum::http::Request;
use tower_http::trace::MakeSpan;
use tracing::Span;
use uuid::Uuid;

/// `MakeSpan` that tags every request with a fresh UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = Uuid::new_v4();
        tracing::info_span!(
            "http_request",
            request_id = %request_id,
            method = %request.method(),
            path = %request.uri().path(),
        )
    }
}
