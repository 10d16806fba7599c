//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! TraceLayer
//!     → tracing.rs (span per request, request ID)
//! Relay handler
//!     → events: rewrite decision, forward target, upstream status, errors
//! logging.rs
//!     → fmt subscriber on stdout, filtered by RUST_LOG or config
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event; message text stays human-readable
//! - No metrics exporter

pub mod logging;
pub mod tracing;
