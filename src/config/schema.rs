//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! Every `Default` impl carries the fixed constants this version runs with;
//! there is no file or environment layer on top of them.

/// Root configuration for the relay.
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream service every request is relayed to.
    pub upstream: UpstreamConfig,

    /// Path rewrite rule applied before forwarding.
    pub rewrite: RewriteConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Preflight response headers.
    pub cors: CorsConfig,

    /// Inbound request limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:21435").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:21435".to_string(),
        }
    }
}

/// Upstream configuration.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL the rewritten path is appended to. Never ends in `/`.
    pub base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.z.ai/api/coding/paas".to_string(),
        }
    }
}

/// Literal substring rewrite applied to the request path.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Substring to look for.
    pub from: String,

    /// Replacement for every occurrence of `from`.
    pub to: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            from: "/v1/".to_string(),
            to: "/v4/".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Total time allowed for one upstream exchange, in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Headers returned on CORS preflight.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allow_origin: String,
    pub allow_methods: String,
    pub allow_headers: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_methods: "GET, POST, PUT, DELETE, PATCH, OPTIONS".to_string(),
            allow_headers: "Content-Type, Authorization".to_string(),
        }
    }
}

/// Inbound request limits.
#[derive(Debug, Clone)]
pub struct LimitsConfig {
    /// Largest request body buffered before forwarding, in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 32 * 1024 * 1024, // 32MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "zai_proxy=info,tower_http=warn".to_string(),
        }
    }
}
