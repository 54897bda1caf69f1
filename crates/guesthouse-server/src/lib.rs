//! guesthouse HTTP server
//!
//! Serves the compiled web frontend and the booking API.

pub mod config;
pub mod handlers;
pub mod state;

use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{create_booking, health_check, rating_summary};
use crate::state::AppState;

/// Build the application router.
///
/// Unknown paths fall through to the static frontend, and anything it does
/// not have is answered with `index.html` so hash links keep working.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let frontend =
        ServeDir::new(static_dir).not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        // Booking API
        .route("/api/bookings", post(create_booking))
        .route("/api/ratings", get(rating_summary))
        // Static files (WASM frontend)
        .fallback_service(frontend)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
