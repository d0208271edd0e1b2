use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use yeoyeo_realty::api;
use yeoyeo_realty::config::Config;
use yeoyeo_realty::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 Yeoyeo Realty - listing board backend");

    let config = Config::from_env();
    info!("Data directory: {}", config.data_dir.display());
    info!("Sheet export: {}", config.export_url());

    let state = AppState::new(config.clone())?;

    // Periodic refresh of listings and market data, like the site's hourly
    // timer. The first cycle runs shortly after the server is up so the
    // resolver can reach our own proxy route.
    let refresh_state = state.clone();
    let refresh_interval = Duration::from_secs(config.refresh_interval_secs);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(1)).await;
        loop {
            refresh_state.refresh().await;
            tokio::time::sleep(refresh_interval).await;
        }
    });

    // The proxy route is consumed from other origins (the chatbot, the
    // gallery app), hence the permissive CORS layer.
    let app = Router::new()
        .route("/api/health", get(api::health_check))
        .route("/api/sheets", get(api::get_sheet_csv))
        .route("/api/listings", get(api::list_listings))
        .route("/api/listings/suggest", get(api::suggest))
        .route("/api/history", get(api::get_history))
        .route("/api/history/clear", post(api::clear_history))
        .route("/api/market", get(api::get_market))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
