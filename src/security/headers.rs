//! Header filtering in both relay directions.
//!
//! # Responsibilities
//! - Drop `Host` from requests so the upstream client sets its own
//! - Drop framing headers from upstream responses
//!
//! # Design Decisions
//! - Names compare case-insensitively (HeaderName is always lowercase)
//! - Order and duplicate values of every kept header are preserved
//! - Cookies travel in the `Cookie` header untouched

use axum::http::header::{HeaderMap, HeaderName};

/// Headers never forwarded upstream.
pub const REQUEST_EXCLUDED: &[&str] = &["host"];

/// Headers never relayed back to the caller. The relayed body may differ in
/// length or encoding from what the upstream framed.
pub const RESPONSE_EXCLUDED: &[&str] = &[
    "content-encoding",
    "content-length",
    "transfer-encoding",
    "connection",
];

/// Copy `headers`, skipping every name in `excluded` (lowercase).
pub fn filter_headers(headers: &HeaderMap, excluded: &[&str]) -> HeaderMap {
    let mut filtered = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers.iter() {
        if !is_excluded(name, excluded) {
            filtered.append(name.clone(), value.clone());
        }
    }
    filtered
}

fn is_excluded(name: &HeaderName, excluded: &[&str]) -> bool {
    excluded
        .iter()
        .any(|candidate| name.as_str().eq_ignore_ascii_case(candidate))
}

/// Headers to send upstream for an inbound request.
pub fn request_headers(inbound: &HeaderMap) -> HeaderMap {
    filter_headers(inbound, REQUEST_EXCLUDED)
}

/// Headers to return to the caller for an upstream response.
pub fn response_headers(upstream: &HeaderMap) -> HeaderMap {
    filter_headers(upstream, RESPONSE_EXCLUDED)
}
