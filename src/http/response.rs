//! Response handling and transformation.
//!
//! # Responsibilities
//! - Turn a buffered upstream response into the caller's response
//! - Map upstream failures to 502 Bad Gateway
//!
//! # Design Decisions
//! - Status and body bytes are relayed unchanged
//! - Framing headers are dropped; the server recomputes Content-Length
//! - Every transport failure is a 502, including timeouts

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};

use crate::security::headers;
use crate::upstream::{UpstreamError, UpstreamResponse};

/// Relay an upstream response to the caller.
pub fn relay_response(upstream: UpstreamResponse) -> Response {
    let mut response = Response::new(Body::from(upstream.body));
    *response.status_mut() = upstream.status;
    *response.headers_mut() = headers::response_headers(&upstream.headers);
    response
}

/// Plain-text 502 describing why the upstream call failed.
pub fn proxy_error(err: &UpstreamError) -> Response {
    plain_text(StatusCode::BAD_GATEWAY, format!("Proxy error: {}", err))
}

/// Plain-text response with the given status.
pub fn plain_text(status: StatusCode, body: String) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}
