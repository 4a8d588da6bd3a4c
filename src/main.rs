use anyhow::Context;
use std::sync::Arc;
use storefront_rust::cart::AppState;
use storefront_rust::catalog::Catalog;
use storefront_rust::config::Config;
use storefront_rust::router::create_app_router;
use storefront_rust::telemetry;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init(&config);

    // The one catalog for this process
    let state = Arc::new(AppState::new(Catalog::seeded()));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!("Server running on http://{}", config.listen_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
