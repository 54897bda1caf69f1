//! External Collaborators
//!
//! The booking flow talks to three outside services: a datastore, an email
//! relay and an analytics sink. The reviews page also reads guest ratings
//! from the datastore. Each is a trait so the site can run against
//! Firebase/EmailJS/GA4 in production and against in-memory doubles in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::booking::BookingRequest;
use crate::error::Result;

/// Append-only store for booking requests
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Create-append one record and return the key the store assigned
    async fn push(&self, request: &BookingRequest) -> Result<String>;

    /// Short name for logs and health output
    fn name(&self) -> &str;
}

/// Sends the host a notification for each new booking
#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, request: &BookingRequest) -> Result<()>;
}

/// Receives named engagement events
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn track(&self, event: &AnalyticsEvent) -> Result<()>;
}

/// Star ratings left by guests
#[async_trait]
pub trait RatingSource: Send + Sync {
    /// Every rating currently recorded; values outside 1..=5 may be present
    async fn ratings(&self) -> Result<Vec<u8>>;

    fn name(&self) -> &str;
}

/// A single analytics event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub category: String,
    pub label: String,
}

impl AnalyticsEvent {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            label: label.into(),
        }
    }

    /// Fired once a booking request has been stored
    pub fn booking_submitted() -> Self {
        Self::new("booking_request_submitted", "engagement", "contact_form")
    }
}
