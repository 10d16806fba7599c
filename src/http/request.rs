//! Request handling and transformation.
//!
//! # Responsibilities
//! - Normalize and rewrite the inbound path
//! - Build the upstream target URL, keeping the query string
//! - Prepare the outbound request (filtered headers, original body)
//!
//! # Design Decisions
//! - The raw (still percent-encoded) path is rewritten, so what the caller
//!   sent is what the upstream sees apart from the rewrite itself
//! - The query string is appended after rewriting and is never rewritten

use axum::body::Bytes;
use axum::http::{request::Parts, Uri};

use crate::routing::{normalize_path, PathRewrite};
use crate::security::headers;
use crate::upstream::OutboundRequest;

/// Where an inbound request goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Normalized inbound path.
    pub original_path: String,
    /// Path after the rewrite rule.
    pub rewritten_path: String,
    /// Whether the rule changed the path.
    pub rewritten: bool,
    /// Absolute upstream URL.
    pub url: String,
}

/// Resolve the upstream target for an inbound URI.
pub fn resolve_target(uri: &Uri, rewrite: &PathRewrite, base_url: &str) -> Target {
    let original_path = normalize_path(uri.path());
    let outcome = rewrite.apply(&original_path);
    let rewritten_path = outcome.path().to_string();
    let rewritten = outcome.is_rewritten();

    let url = match uri.query() {
        Some(query) => format!("{}{}?{}", base_url, rewritten_path, query),
        None => format!("{}{}", base_url, rewritten_path),
    };

    Target {
        original_path: original_path.into_owned(),
        rewritten_path,
        rewritten,
        url,
    }
}

/// Build the request sent upstream from the inbound parts and body.
pub fn build_outbound(parts: &Parts, body: Bytes, target: &Target) -> OutboundRequest {
    OutboundRequest {
        method: parts.method.clone(),
        url: target.url.clone(),
        headers: headers::request_headers(&parts.headers),
        body,
    }
}
