//! Request path handling subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound URI path
//!     → rewrite.rs (normalize, apply literal substitution)
//!     → rewritten path handed to http::request for target URL construction
//! ```
//!
//! # Design Decisions
//! - There is a single catch-all route; no route table
//! - The rule is data (from/to strings), not code

pub mod rewrite;

pub use rewrite::{normalize_path, PathRewrite};
