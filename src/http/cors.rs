//! CORS preflight answered locally.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};

use crate::config::CorsConfig;

/// Build the fixed preflight response. Never touches the upstream.
pub fn preflight_response(config: &CorsConfig) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::OK;

    let headers = response.headers_mut();
    for (name, value) in [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, &config.allow_origin),
        (header::ACCESS_CONTROL_ALLOW_METHODS, &config.allow_methods),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, &config.allow_headers),
    ] {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                headers.insert(name, value);
            }
            Err(_) => tracing::warn!(header = %name, value = %value, "Skipping invalid CORS header value"),
        }
    }

    response
}
