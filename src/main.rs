use zai_proxy::config::ProxyConfig;
use zai_proxy::http::HttpServer;
use zai_proxy::lifecycle::{signals, startup, Shutdown};
use zai_proxy::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ProxyConfig::default();

    logging::init(&config.observability)?;
    tracing::info!("zai-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        rewrite_from = %config.rewrite.from,
        rewrite_to = %config.rewrite.to,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let server = HttpServer::new(config)?;
    let listener = startup::bind(server.config()).await?;
    startup::print_banner(server.config());

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_listener(shutdown);

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
