//! Z.AI path-rewriting relay.
//!
//! A local HTTP proxy that accepts requests written against `/v1/` paths,
//! rewrites them to `/v4/`, forwards them to a fixed upstream and relays the
//! response back with transport-framing headers stripped.

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
