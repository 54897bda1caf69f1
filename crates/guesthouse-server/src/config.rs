//! Server Configuration
//!
//! Reads the listener settings and wires the booking desk and rating board
//! from whichever providers have credentials in the environment.

use std::sync::Arc;

use guesthouse_core::{BookingDesk, MemoryBookingStore, RatingBoard};
use guesthouse_runtime::{EmailJsRelay, FirebaseStore, Ga4Sink, env};

use crate::state::AppState;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Listener and asset settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,

    /// Directory holding the compiled web frontend
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            static_dir: DEFAULT_STATIC_DIR.into(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env::process)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
        }
    }
}

/// Build the application state from the environment.
///
/// Firebase falls back to an in-memory store so the site still runs locally,
/// and ratings then come from the built-in reviews. EmailJS and GA4 are
/// simply left out when their keys are missing.
pub fn state_from_env() -> AppState {
    let (mut desk, ratings) = match FirebaseStore::from_env() {
        Ok(store) => {
            tracing::info!(url = %store.config().collection_url(), "✓ Firebase store configured");
            let store = Arc::new(store);
            (
                BookingDesk::new(store.clone()),
                RatingBoard::new().with_live(store),
            )
        }
        Err(e) => {
            tracing::warn!("⚠ Firebase not configured ({e}) - bookings kept in memory");
            tracing::warn!("  Set FIREBASE_DATABASE_URL in .env");
            (
                BookingDesk::new(Arc::new(MemoryBookingStore::new())),
                RatingBoard::new(),
            )
        }
    };

    match EmailJsRelay::from_env() {
        Ok(relay) => {
            tracing::info!("✓ EmailJS configured");
            desk = desk.with_email(Arc::new(relay));
        }
        Err(e) => tracing::warn!("⚠ EmailJS not configured ({e}) - booking emails disabled"),
    }

    match Ga4Sink::from_env() {
        Ok(sink) => {
            tracing::info!("✓ GA4 configured");
            desk = desk.with_analytics(Arc::new(sink));
        }
        Err(e) => tracing::warn!("⚠ GA4 not configured ({e}) - analytics disabled"),
    }

    AppState::new(desk).with_ratings(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(|key| match key {
            "BIND_ADDR" => Some("127.0.0.1:8080".into()),
            "STATIC_DIR" => Some("dist".into()),
            _ => None,
        });
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.static_dir, "dist");
    }
}
