//! API Client

use guesthouse_core::{BookingForm, BookingReceipt, RatingReport};
use serde::Deserialize;

const SUBMIT_ERROR: &str = "There was an error submitting your booking request. Please try again.";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Absolute URL on the serving origin
fn endpoint(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());
    format!("{origin}{path}")
}

/// Submit the booking form to the backend
pub async fn submit_booking(form: &BookingForm) -> Result<BookingReceipt, String> {
    let response = reqwest::Client::new()
        .post(endpoint("/api/bookings"))
        .json(form)
        .send()
        .await
        .map_err(|_| SUBMIT_ERROR.to_string())?;

    if response.status().is_success() {
        response
            .json::<BookingReceipt>()
            .await
            .map_err(|_| SUBMIT_ERROR.to_string())
    } else {
        let rejected = response.status() == reqwest::StatusCode::UNPROCESSABLE_ENTITY;
        let body = response.json::<ErrorBody>().await.ok();
        Err(match body {
            Some(b) if rejected => format!("There was an error in your booking request: {}", b.error),
            Some(b) => b.error,
            None => SUBMIT_ERROR.to_string(),
        })
    }
}

/// Current guest rating summary
pub async fn fetch_ratings() -> Result<RatingReport, String> {
    let response = reqwest::Client::new()
        .get(endpoint("/api/ratings"))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("ratings request failed: {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}
