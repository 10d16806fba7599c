//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic checks on a `ProxyConfig` before the server is built
//! - Validate value ranges (timeouts > 0, limits > 0)
//! - Validate addresses and the upstream base URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: &ProxyConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("bind address '{0}' is not a valid socket address")]
    BindAddress(String),

    #[error("upstream base URL '{url}' is invalid: {reason}")]
    UpstreamUrl { url: String, reason: String },

    #[error("upstream base URL '{0}' must not end with '/'")]
    TrailingSlash(String),

    #[error("rewrite pattern must not be empty")]
    EmptyRewrite,

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("body limit must be greater than zero")]
    ZeroBodyLimit,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let base = &config.upstream.base_url;
    match Url::parse(base) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") {
                errors.push(ValidationError::UpstreamUrl {
                    url: base.clone(),
                    reason: format!("unsupported scheme '{}'", url.scheme()),
                });
            } else if url.host_str().is_none() {
                errors.push(ValidationError::UpstreamUrl {
                    url: base.clone(),
                    reason: "missing host".to_string(),
                });
            }
        }
        Err(e) => errors.push(ValidationError::UpstreamUrl {
            url: base.clone(),
            reason: e.to_string(),
        }),
    }
    if base.ends_with('/') {
        errors.push(ValidationError::TrailingSlash(base.clone()));
    }

    if config.rewrite.from.is_empty() {
        errors.push(ValidationError::EmptyRewrite);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
