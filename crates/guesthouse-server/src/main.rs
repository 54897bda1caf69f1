//! guesthouse-server
//!
//! Axum server for the guesthouse website: static frontend plus the
//! booking API.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guesthouse_server::{
    config::{ServerConfig, state_from_env},
    router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let state = state_from_env();

    tracing::info!(
        store = state.desk.store_name(),
        email = state.desk.email_configured(),
        analytics = state.desk.analytics_configured(),
        live_ratings = state.ratings.live_configured(),
        "Booking desk ready"
    );

    let app = router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🏠 guesthouse server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health        - Health check");
    tracing::info!("  POST /api/bookings  - Submit booking request");
    tracing::info!("  GET  /api/ratings   - Guest rating summary");
    tracing::info!("  GET  /*             - Website ({})", config.static_dir);
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
