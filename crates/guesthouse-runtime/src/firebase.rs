//! Firebase Realtime Database Store
//!
//! Implementation of `BookingStore` and `RatingSource` over the Realtime
//! Database REST API. A `POST` to `<db>/<path>.json` appends a child under a
//! generated push key and answers `{"name": "<key>"}`; a `GET` on the ratings
//! node returns its children keyed the same way (or `null` when empty).

use std::time::Duration;

use async_trait::async_trait;
use guesthouse_core::{BookingError, BookingRequest, BookingStore, RatingSource, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::env;

/// Firebase store configuration
#[derive(Clone, Debug)]
pub struct FirebaseConfig {
    /// Database URL, e.g. `https://<project>-default-rtdb.firebaseio.com`
    pub database_url: String,

    /// Database secret or ID token sent as `?auth=`
    pub auth_token: Option<String>,

    /// Collection the bookings are appended under
    pub bookings_path: String,

    /// Node holding guest ratings
    pub ratings_path: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FirebaseConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            auth_token: None,
            bookings_path: "bookings".into(),
            ratings_path: "ratings".into(),
            timeout_secs: 15,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env::process)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = env::required(&lookup, "FIREBASE_DATABASE_URL")?;
        let mut config = Self::new(database_url);
        config.auth_token = lookup("FIREBASE_AUTH_TOKEN");
        if let Some(path) = lookup("FIREBASE_BOOKINGS_PATH") {
            config.bookings_path = path;
        }
        if let Some(path) = lookup("FIREBASE_RATINGS_PATH") {
            config.ratings_path = path;
        }
        Ok(config)
    }

    /// REST endpoint for the bookings collection
    pub fn collection_url(&self) -> String {
        self.node_url(&self.bookings_path)
    }

    /// REST endpoint for the ratings node
    pub fn ratings_url(&self) -> String {
        self.node_url(&self.ratings_path)
    }

    fn node_url(&self, path: &str) -> String {
        format!(
            "{}/{}.json",
            self.database_url.trim_end_matches('/'),
            path.trim_matches('/')
        )
    }
}

/// Receipt key used when Firebase accepted a write without a readable key
pub const UNKNOWN_KEY: &str = "unknown";

#[derive(Debug, Deserialize)]
struct PushResponse {
    name: String,
}

/// Key for an accepted push, or `UNKNOWN_KEY` when the body can't be read
fn push_key(body: &str) -> String {
    match serde_json::from_str::<PushResponse>(body) {
        Ok(pushed) => {
            tracing::debug!(key = %pushed.name, "Firebase push accepted");
            pushed.name
        }
        Err(e) => {
            tracing::warn!(error = %e, body, "Firebase accepted the push but the key is unreadable");
            UNKNOWN_KEY.to_string()
        }
    }
}

/// Star values under the ratings node.
///
/// Children may be bare numbers or objects with a `rating` field; anything
/// else, and values that don't fit 1..=5, is skipped.
fn parse_ratings(node: &Value) -> Vec<u8> {
    let Some(children) = node.as_object() else {
        return Vec::new();
    };

    children
        .values()
        .filter_map(|child| child.as_u64().or_else(|| child.get("rating")?.as_u64()))
        .filter_map(|n| u8::try_from(n).ok())
        .filter(|n| (1..=5).contains(n))
        .collect()
}

/// Firebase Realtime Database booking store
pub struct FirebaseStore {
    client: reqwest::Client,
    config: FirebaseConfig,
}

impl FirebaseStore {
    /// Create from configuration
    pub fn from_config(config: FirebaseConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BookingError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(FirebaseConfig::from_env()?)
    }

    pub const fn config(&self) -> &FirebaseConfig {
        &self.config
    }
}

#[async_trait]
impl BookingStore for FirebaseStore {
    async fn push(&self, request: &BookingRequest) -> Result<String> {
        let mut call = self.client.post(self.config.collection_url()).json(request);
        if let Some(token) = &self.config.auth_token {
            call = call.query(&[("auth", token)]);
        }

        let response = call
            .send()
            .await
            .map_err(|e| BookingError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BookingError::Store(format!("Firebase returned {status}: {body}")));
        }

        // The write is already committed; a garbled body must not make the
        // guest resubmit and create a duplicate.
        let body = response.text().await.unwrap_or_default();
        Ok(push_key(&body))
    }

    fn name(&self) -> &str {
        "firebase"
    }
}

#[async_trait]
impl RatingSource for FirebaseStore {
    async fn ratings(&self) -> Result<Vec<u8>> {
        let mut call = self.client.get(self.config.ratings_url());
        if let Some(token) = &self.config.auth_token {
            call = call.query(&[("auth", token)]);
        }

        let response = call
            .send()
            .await
            .map_err(|e| BookingError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BookingError::Store(format!("Firebase returned {status} for ratings")));
        }

        let node: Value = response
            .json()
            .await
            .map_err(|e| BookingError::Store(format!("Unreadable ratings node: {e}")))?;

        Ok(parse_ratings(&node))
    }

    fn name(&self) -> &str {
        "firebase"
    }
}
