//! Booking Desk
//!
//! Runs a booking submission end to end:
//!
//! ```text
//! form ──validate──▶ store.push ──▶ email.send ──▶ analytics.track ──▶ form.reset
//!          │              │
//!          ▼              ▼
//!    Validation err   Store err (form kept, nothing else sent)
//! ```
//!
//! The store write and the email send happen one after the other, never
//! concurrently. Email and analytics failures are logged and swallowed.

use std::sync::Arc;

use crate::booking::{BookingForm, BookingReceipt, BookingRequest};
use crate::error::{BookingError, Result};
use crate::provider::{AnalyticsEvent, AnalyticsSink, BookingStore, EmailRelay};

/// Orchestrates persistence and notifications for booking requests
#[derive(Clone)]
pub struct BookingDesk {
    store: Arc<dyn BookingStore>,
    email: Option<Arc<dyn EmailRelay>>,
    analytics: Option<Arc<dyn AnalyticsSink>>,
}

impl BookingDesk {
    /// Create a desk that only persists
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self {
            store,
            email: None,
            analytics: None,
        }
    }

    pub fn with_email(mut self, relay: Arc<dyn EmailRelay>) -> Self {
        self.email = Some(relay);
        self
    }

    pub fn with_analytics(mut self, sink: Arc<dyn AnalyticsSink>) -> Self {
        self.analytics = Some(sink);
        self
    }

    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    pub const fn email_configured(&self) -> bool {
        self.email.is_some()
    }

    pub const fn analytics_configured(&self) -> bool {
        self.analytics.is_some()
    }

    /// Validate the form, place the booking and clear the form on success.
    ///
    /// On any error the form keeps its values so the guest can retry.
    pub async fn submit(&self, form: &mut BookingForm) -> Result<BookingReceipt> {
        let request = form.validate()?;
        let receipt = self.place(request).await?;
        form.reset();
        Ok(receipt)
    }

    /// Store an already-validated request, then notify and track
    pub async fn place(&self, request: BookingRequest) -> Result<BookingReceipt> {
        let key = self.store.push(&request).await.map_err(|e| {
            tracing::error!(store = self.store.name(), error = %e, "Booking write failed");
            match e {
                BookingError::Store(_) => e,
                other => BookingError::Store(other.to_string()),
            }
        })?;

        tracing::info!(
            key = %key,
            guests = request.guests,
            check_in = %request.check_in,
            check_out = %request.check_out,
            "Booking request stored"
        );

        if let Some(relay) = &self.email {
            if let Err(e) = relay.send(&request).await {
                tracing::warn!(key = %key, error = %e, "Booking notification email failed");
            }
        }

        if let Some(sink) = &self.analytics {
            let event = AnalyticsEvent::booking_submitted();
            if let Err(e) = sink.track(&event).await {
                tracing::warn!(event = %event.name, error = %e, "Analytics event failed");
            }
        }

        Ok(BookingReceipt {
            key,
            status: request.status,
        })
    }
}
