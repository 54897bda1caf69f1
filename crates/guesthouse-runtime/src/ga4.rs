//! GA4 Measurement Protocol Sink
//!
//! Sends analytics events server-side to Google Analytics 4.

use std::time::Duration;

use async_trait::async_trait;
use guesthouse_core::{AnalyticsEvent, AnalyticsSink, BookingError, Result};
use serde_json::{Value, json};

use crate::env;

const DEFAULT_ENDPOINT: &str = "https://www.google-analytics.com/mp/collect";

/// GA4 configuration
#[derive(Clone, Debug)]
pub struct Ga4Config {
    /// `G-XXXXXXX`
    pub measurement_id: String,
    pub api_secret: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Ga4Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env::process)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            measurement_id: env::required(&lookup, "GA_MEASUREMENT_ID")?,
            api_secret: env::required(&lookup, "GA_API_SECRET")?,
            endpoint: lookup("GA_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.into()),
            timeout_secs: 10,
        })
    }
}

/// Measurement Protocol client
pub struct Ga4Sink {
    client: reqwest::Client,
    config: Ga4Config,
    /// Pseudonymous id for this server instance
    client_id: String,
}

impl Ga4Sink {
    pub fn from_config(config: Ga4Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BookingError::Config(e.to_string()))?;

        Ok(Self {
            client,
            config,
            client_id: uuid::Uuid::new_v4().to_string(),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_config(Ga4Config::from_env()?)
    }

    fn payload(&self, event: &AnalyticsEvent) -> Value {
        json!({
            "client_id": self.client_id,
            "events": [{
                "name": event.name,
                "params": {
                    "event_category": event.category,
                    "event_label": event.label,
                },
            }],
        })
    }
}

#[async_trait]
impl AnalyticsSink for Ga4Sink {
    async fn track(&self, event: &AnalyticsEvent) -> Result<()> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .query(&[
                ("measurement_id", self.config.measurement_id.as_str()),
                ("api_secret", self.config.api_secret.as_str()),
            ])
            .json(&self.payload(event))
            .send()
            .await
            .map_err(|e| BookingError::Http(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(BookingError::Analytics(format!(
                "GA4 returned {}",
                response.status()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::from_pairs;

    #[test]
    fn test_payload_shape() {
        let config = Ga4Config::from_lookup(from_pairs(&[
            ("GA_MEASUREMENT_ID", "G-TEST123"),
            ("GA_API_SECRET", "secret"),
        ]))
        .unwrap();
        let sink = Ga4Sink::from_config(config).unwrap();

        let json = sink.payload(&AnalyticsEvent::booking_submitted());
        assert_eq!(json["client_id"], sink.client_id.as_str());
        assert_eq!(json["events"][0]["name"], "booking_request_submitted");
        assert_eq!(json["events"][0]["params"]["event_category"], "engagement");
        assert_eq!(json["events"][0]["params"]["event_label"], "contact_form");
    }

    #[test]
    fn test_config_defaults_endpoint() {
        let config = Ga4Config::from_lookup(from_pairs(&[
            ("GA_MEASUREMENT_ID", "G-TEST123"),
            ("GA_API_SECRET", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_config_requires_secret() {
        let result = Ga4Config::from_lookup(from_pairs(&[("GA_MEASUREMENT_ID", "G-TEST123")]));
        assert!(result.is_err());
    }
}
