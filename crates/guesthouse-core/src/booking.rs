//! Booking Form and Requests
//!
//! `BookingForm` holds what the guest has typed so far, as raw strings.
//! `BookingForm::validate` turns it into a typed `BookingRequest`, the record
//! that is handed to the datastore.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Lifecycle status of a booking request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Submitted, not yet handled by the host
    #[default]
    Pending,
}

impl BookingStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of the booking form, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Guests,
    CheckIn,
    CheckOut,
    Message,
}

impl FormField {
    /// All fields in form order
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Guests,
        Self::CheckIn,
        Self::CheckOut,
        Self::Message,
    ];

    /// HTML input `name`/`id`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Guests => "guests",
            Self::CheckIn => "checkIn",
            Self::CheckOut => "checkOut",
            Self::Message => "message",
        }
    }

    /// Visible label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Guests => "Number of Guests",
            Self::CheckIn => "Check-in Date",
            Self::CheckOut => "Check-out Date",
            Self::Message => "Special Requests",
        }
    }

    /// Everything except the free-text message must be filled in
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("unknown form field: {s}"))
    }
}

/// In-progress booking form values
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: String,
    pub check_in: String,
    pub check_out: String,
    pub message: String,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Guests => &self.guests,
            FormField::CheckIn => &self.check_in,
            FormField::CheckOut => &self.check_out,
            FormField::Message => &self.message,
        }
    }

    /// Set one field; no validation happens here
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Guests => &mut self.guests,
            FormField::CheckIn => &mut self.check_in,
            FormField::CheckOut => &mut self.check_out,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Clear every field back to empty
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when nothing has been typed
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// First required field that is still blank
    pub fn missing_field(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .find(|field| self.get(*field).trim().is_empty())
    }

    /// Check the form and build the request that would be stored.
    ///
    /// Trimming only decides emptiness and parsing; the text fields are
    /// stored exactly as typed.
    pub fn validate(&self) -> Result<BookingRequest, FormError> {
        if let Some(field) = self.missing_field() {
            return Err(FormError::MissingField(field));
        }

        let guests = self
            .guests
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| FormError::InvalidGuests(self.guests.clone()))?;

        let check_in = parse_date(FormField::CheckIn, &self.check_in)?;
        let check_out = parse_date(FormField::CheckOut, &self.check_out)?;
        if check_out <= check_in {
            return Err(FormError::CheckOutNotAfterCheckIn);
        }

        Ok(BookingRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            guests,
            check_in,
            check_out,
            message: self.message.clone(),
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        })
    }
}

fn parse_date(field: FormField, value: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| FormError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// A guest's submitted reservation inquiry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl BookingRequest {
    /// Length of the stay in nights
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// What the guest gets back once the request is stored
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReceipt {
    /// Key assigned by the datastore
    pub key: String,

    pub status: BookingStatus,
}
