//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use guesthouse_core::{BookingError, BookingForm, BookingStatus, FormField, RatingReport};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: String,
    pub email_configured: bool,
    pub analytics_configured: bool,
    pub live_ratings: bool,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub key: String,
    pub status: BookingStatus,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    /// Form field the error refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn booking_error(err: &BookingError) -> ApiError {
    let (status, code, field) = match err {
        BookingError::Validation(form_err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "INVALID_BOOKING",
            form_err.field().map(FormField::name),
        ),
        // Nothing was stored, so the guest may resubmit
        _ if err.is_retryable() => (StatusCode::BAD_GATEWAY, "STORE_ERROR", None),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", None),
    };

    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
            field,
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        store: state.desk.store_name().to_string(),
        email_configured: state.desk.email_configured(),
        analytics_configured: state.desk.analytics_configured(),
        live_ratings: state.ratings.live_configured(),
    })
}

/// Rating summary for the reviews page
pub async fn rating_summary(State(state): State<AppState>) -> Json<RatingReport> {
    Json(state.ratings.report().await)
}

/// Accept a booking request from the contact form
pub async fn create_booking(
    State(state): State<AppState>,
    Json(mut form): Json<BookingForm>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let receipt = state.desk.submit(&mut form).await.map_err(|e| {
        match &e {
            BookingError::Validation(form_err) => {
                tracing::debug!(error = %form_err, "Rejected booking form");
            }
            _ => tracing::error!(error = %e, "Booking submission failed"),
        }
        booking_error(&e)
    })?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            key: receipt.key,
            status: receipt.status,
        }),
    ))
}
