//! Header hygiene subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request headers
//!     → headers.rs (drop Host)
//!     → upstream
//! Upstream response headers
//!     → headers.rs (drop Content-Encoding/Length, Transfer-Encoding, Connection)
//!     → caller
//! ```
//!
//! # Design Decisions
//! - Credentials (Authorization, Cookie) pass through opaquely
//! - No X-Forwarded-* headers are added

pub mod headers;
