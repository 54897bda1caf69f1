//! Error Types

use thiserror::Error;

use crate::booking::FormField;

/// Result type alias for booking operations
pub type Result<T> = std::result::Result<T, BookingError>;

/// Reasons a booking form cannot be turned into a request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field is empty
    #[error("{0} is required")]
    MissingField(FormField),

    /// Guest count is not a positive integer
    #[error("Number of guests must be a positive whole number, got '{0}'")]
    InvalidGuests(String),

    /// Date field is not an ISO `YYYY-MM-DD` date
    #[error("{field} is not a valid date: '{value}'")]
    InvalidDate { field: FormField, value: String },

    /// Stay has zero or negative length
    #[error("Check-out date must be after check-in date")]
    CheckOutNotAfterCheckIn,
}

impl FormError {
    /// Field the error points at, if any
    pub const fn field(&self) -> Option<FormField> {
        match self {
            Self::MissingField(field) | Self::InvalidDate { field, .. } => Some(*field),
            Self::InvalidGuests(_) => Some(FormField::Guests),
            Self::CheckOutNotAfterCheckIn => Some(FormField::CheckOut),
        }
    }
}

/// Booking error types
#[derive(Error, Debug)]
pub enum BookingError {
    /// Form failed validation; nothing was written
    #[error("Validation error: {0}")]
    Validation(#[from] FormError),

    /// Datastore rejected the write or read
    #[error("Store error: {0}")]
    Store(String),

    /// Email relay failed
    #[error("Email error: {0}")]
    Email(String),

    /// Analytics sink failed
    #[error("Analytics error: {0}")]
    Analytics(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure talking to a remote service
    #[error("HTTP error: {0}")]
    Http(String),
}

impl BookingError {
    /// Check if the user may simply resubmit
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Http(_))
    }

    /// Convert to a message suitable for the guest
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Store(_) | Self::Http(_) => {
                "There was an error submitting your booking request. Please try again.".into()
            }
            _ => "An unexpected error occurred. Please try again later.".into(),
        }
    }
}
