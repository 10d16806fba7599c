//! HTTP server setup and the relay handler.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all relay route
//! - Wire up middleware (request span)
//! - Bind server to listener with graceful shutdown
//! - Answer CORS preflight locally
//! - Rewrite, forward and relay every other request

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode},
    response::Response,
    routing::{get, MethodRouter},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::{validate_config, ProxyConfig, ValidationError};
use crate::http::{cors, request, response};
use crate::lifecycle::shutdown;
use crate::observability::tracing::RequestSpan;
use crate::routing::PathRewrite;
use crate::upstream::{HttpUpstream, Upstream, UpstreamError};

/// Errors building the server.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ValidationError>),

    #[error("failed to build upstream client: {0}")]
    Client(#[from] UpstreamError),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Application state injected into the handler. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub rewrite: Arc<PathRewrite>,
    pub upstream: Arc<dyn Upstream>,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: Arc<ProxyConfig>,
}

impl HttpServer {
    /// Validate the configuration and build a server backed by the real
    /// HTTP upstream client.
    pub fn new(config: ProxyConfig) -> Result<Self, StartupError> {
        validate_config(&config).map_err(StartupError::InvalidConfig)?;
        let upstream = HttpUpstream::new(&config.timeouts)?;
        Ok(Self::with_upstream(config, Arc::new(upstream)))
    }

    /// Build a server around any `Upstream` implementation.
    pub fn with_upstream(config: ProxyConfig, upstream: Arc<dyn Upstream>) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            rewrite: Arc::new(PathRewrite::from_config(&config.rewrite)),
            config: config.clone(),
            upstream,
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", relay_methods())
            .route("/{*path}", relay_methods())
            .with_state(state)
            .layer(TraceLayer::new_for_http().make_span_with(RequestSpan))
    }

    /// The router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Serve connections until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// GET (with its implicit HEAD), POST, PUT, DELETE, PATCH and OPTIONS.
/// Anything else is answered with 405 by the router.
fn relay_methods() -> MethodRouter<AppState> {
    get(relay_handler)
        .post(relay_handler)
        .put(relay_handler)
        .delete(relay_handler)
        .patch(relay_handler)
        .options(relay_handler)
}

/// Main relay handler.
/// Answers preflight locally; otherwise rewrites the path, forwards the
/// request and relays the upstream response.
async fn relay_handler(State(state): State<AppState>, req: Request<Body>) -> Response {
    if req.method() == Method::OPTIONS {
        tracing::debug!("Answering CORS preflight");
        return cors::preflight_response(&state.config.cors);
    }

    let (parts, body) = req.into_parts();
    let target = request::resolve_target(
        &parts.uri,
        &state.rewrite,
        &state.config.upstream.base_url,
    );

    if target.rewritten {
        tracing::info!(
            from = %target.original_path,
            to = %target.rewritten_path,
            "Rewriting path"
        );
    } else {
        tracing::info!(path = %target.original_path, "No rewrite needed");
    }
    tracing::info!(method = %parts.method, target = %target.url, "Forwarding request");

    let body = match axum::body::to_bytes(body, state.config.limits.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read request body");
            return response::plain_text(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("Request body rejected: {}", e),
            );
        }
    };

    let outbound = request::build_outbound(&parts, body, &target);
    match state.upstream.send(outbound).await {
        Ok(upstream) => {
            tracing::info!(status = upstream.status.as_u16(), "Upstream response");
            response::relay_response(upstream)
        }
        Err(e) => {
            tracing::error!(error = %e, target = %target.url, "Proxy error");
            response::proxy_error(&e)
        }
    }
}
