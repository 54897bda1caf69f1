//! # guesthouse-core
//!
//! Behavior behind the guesthouse website, independent of any UI or HTTP
//! framework.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        BookingDesk                            │
//! │  ┌─────────────┐  ┌──────────────┐  ┌──────────────────────┐  │
//! │  │ BookingForm │──│ BookingStore │──│ EmailRelay           │  │
//! │  │ (validate)  │  │  (persist)   │  │ AnalyticsSink        │  │
//! │  └─────────────┘  └──────────────┘  └──────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//!
//!   Page (navigation)     Chatbot (scripted FAQ)     content (static data)
//!   RatingBoard (live ratings, falling back to the built-in reviews)
//! ```
//!
//! The collaborator traits let the desk run against Firebase, EmailJS and
//! GA4 (see `guesthouse-runtime`) or against `MemoryBookingStore` in tests.

pub mod booking;
pub mod chatbot;
pub mod content;
pub mod desk;
pub mod error;
pub mod page;
pub mod provider;
pub mod ratings;
pub mod store;

pub use booking::{BookingForm, BookingReceipt, BookingRequest, BookingStatus, FormField};
pub use chatbot::{ChatMessage, Chatbot, Sender, Transcript};
pub use desk::BookingDesk;
pub use error::{BookingError, FormError, Result};
pub use page::Page;
pub use provider::{AnalyticsEvent, AnalyticsSink, BookingStore, EmailRelay, RatingSource};
pub use ratings::{RatingBoard, RatingReport, StaticRatings};
pub use store::MemoryBookingStore;
