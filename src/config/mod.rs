//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ProxyConfig::default() (fixed constants)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → handed to HttpServer, shared via Arc with the handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the server is built
//! - All fields have defaults; tests override individual fields
//! - No file, environment or command-line layer

pub mod schema;
pub mod validation;

pub use schema::{
    CorsConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, ProxyConfig, RewriteConfig,
    TimeoutConfig, UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};
