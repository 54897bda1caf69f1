//! # guesthouse-runtime
//!
//! HTTP implementations of the booking collaborators.
//!
//! ## Providers
//!
//! - **Firebase** (`firebase`): Realtime Database REST store for booking requests
//!   and source of live guest ratings
//! - **EmailJS** (`emailjs`): transactional notification email to the host
//! - **GA4** (`ga4`): Measurement Protocol analytics events
//!
//! ## Usage
//!
//! ```rust,ignore
//! use guesthouse_runtime::{EmailJsRelay, FirebaseStore};
//!
//! let desk = BookingDesk::new(Arc::new(FirebaseStore::from_env()?))
//!     .with_email(Arc::new(EmailJsRelay::from_env()?));
//! ```

pub mod env;

#[cfg(feature = "firebase")]
pub mod firebase;

#[cfg(feature = "emailjs")]
pub mod emailjs;

#[cfg(feature = "ga4")]
pub mod ga4;

#[cfg(feature = "firebase")]
pub use firebase::{FirebaseConfig, FirebaseStore};

#[cfg(feature = "emailjs")]
pub use emailjs::{EmailJsConfig, EmailJsRelay};

#[cfg(feature = "ga4")]
pub use ga4::{Ga4Config, Ga4Sink};

// Re-export core types for convenience
pub use guesthouse_core::{
    AnalyticsEvent, AnalyticsSink, BookingDesk, BookingError, BookingRequest, BookingStore,
    EmailRelay, RatingBoard, RatingSource, Result,
};
