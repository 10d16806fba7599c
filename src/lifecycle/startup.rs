//! Startup orchestration.
//!
//! # Responsibilities
//! - Print the banner
//! - Bind the listener
//!
//! # Design Decisions
//! - Fail fast: a bind error is fatal
//! - The banner goes to stdout regardless of log filtering

use tokio::net::TcpListener;

use crate::config::ProxyConfig;
use crate::routing::PathRewrite;

const RULE: &str = "============================================================";

/// Lines of the startup banner.
pub fn banner(config: &ProxyConfig) -> Vec<String> {
    let rewrite = PathRewrite::from_config(&config.rewrite);
    vec![
        RULE.to_string(),
        "Z.AI Proxy".to_string(),
        RULE.to_string(),
        format!("Proxy listening on: http://{}", config.listener.bind_address),
        format!("Target endpoint: {}", config.upstream.base_url),
        format!(
            "Path rewriting: {} -> {}",
            rewrite.pattern(),
            rewrite.replacement()
        ),
        RULE.to_string(),
        String::new(),
        "Ready to accept requests...".to_string(),
        "Press Ctrl+C to stop".to_string(),
    ]
}

pub fn print_banner(config: &ProxyConfig) {
    for line in banner(config) {
        println!("{}", line);
    }
}

/// Bind the configured address.
pub async fn bind(config: &ProxyConfig) -> std::io::Result<TcpListener> {
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listener bound");
    Ok(listener)
}
