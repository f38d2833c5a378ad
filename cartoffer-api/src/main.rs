use std::sync::Arc;
use std::net::SocketAddr;
use cartoffer_api::{app, AppState};
use cartoffer_store::HttpSegmentClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cartoffer_api=debug,cartoffer_offer=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = cartoffer_store::app_config::Config::load()?;
    tracing::info!("Starting cart offer API on port {}", config.server.port);

    let segments = HttpSegmentClient::new(&config.segment_service)?;
    tracing::info!(
        "Segment service at {} (timeout {}ms)",
        segments.base_url(),
        config.segment_service.timeout_ms
    );

    let app = app(AppState::in_memory(Arc::new(segments)));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
