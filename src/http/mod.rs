//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (axum::serve)
//!     → server.rs (router, catch-all relay handler)
//!         → cors.rs (OPTIONS answered locally)
//!         → request.rs (normalize + rewrite path, build outbound request)
//!         → upstream (single dispatch, fixed timeout)
//!         → response.rs (filter headers, or 502 on failure)
//!     → Send to client
//! ```

pub mod cors;
pub mod request;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer, StartupError};
