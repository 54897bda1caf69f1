use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use guesthouse_core::{
    BookingDesk, BookingError, BookingRequest, BookingStore, MemoryBookingStore, RatingBoard,
    RatingSource,
};
use guesthouse_server::{router, state::AppState};

// ── Mock Providers ──

struct FailingStore;

#[async_trait]
impl BookingStore for FailingStore {
    async fn push(&self, _request: &BookingRequest) -> guesthouse_core::Result<String> {
        Err(BookingError::Store("permission denied".into()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

struct LiveRatings(Vec<u8>);

#[async_trait]
impl RatingSource for LiveRatings {
    async fn ratings(&self) -> guesthouse_core::Result<Vec<u8>> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &str {
        "live"
    }
}

// ── Helpers ──

fn app_with(store: Arc<dyn BookingStore>) -> Router {
    router(AppState::new(BookingDesk::new(store)), "static")
}

fn valid_form() -> Value {
    json!({
        "name": "Test User",
        "email": "test@example.com",
        "phone": "1234567890",
        "guests": "2",
        "checkIn": "2025-12-01",
        "checkOut": "2025-12-05",
        "message": "Test"
    })
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let res = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_booking(app: Router, body: &Value) -> (StatusCode, Value) {
    let res = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/bookings")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

// ── Tests ──

#[tokio::test]
async fn test_health_reports_collaborators() {
    let app = app_with(Arc::new(MemoryBookingStore::new()));

    let (status, json) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["store"], "memory");
    assert_eq!(json["email_configured"], false);
    assert_eq!(json["analytics_configured"], false);
    assert_eq!(json["live_ratings"], false);
}

#[tokio::test]
async fn test_valid_booking_is_stored() {
    let store = Arc::new(MemoryBookingStore::new());
    let app = app_with(store.clone());

    let (status, json) = post_booking(app, &valid_form()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["status"], "pending");
    assert!(json["key"].as_str().is_some_and(|k| !k.is_empty()));

    let records = store.records();
    assert_eq!(records.len(), 1);
    let (key, request) = &records[0];
    assert_eq!(json["key"], key.as_str());
    assert_eq!(request.name, "Test User");
    assert_eq!(request.guests, 2);
    assert_eq!(request.nights(), 4);
}

#[tokio::test]
async fn test_empty_form_is_rejected_without_write() {
    let store = Arc::new(MemoryBookingStore::new());
    let app = app_with(store.clone());

    let (status, json) = post_booking(app, &json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "INVALID_BOOKING");
    assert_eq!(json["field"], "name");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_missing_check_out_names_field() {
    let store = Arc::new(MemoryBookingStore::new());
    let app = app_with(store.clone());

    let mut form = valid_form();
    form["checkOut"] = json!("");

    let (status, json) = post_booking(app, &form).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["field"], "checkOut");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_reversed_dates_are_rejected() {
    let store = Arc::new(MemoryBookingStore::new());
    let app = app_with(store.clone());

    let mut form = valid_form();
    form["checkIn"] = json!("2025-12-05");
    form["checkOut"] = json!("2025-12-01");

    let (status, json) = post_booking(app, &form).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "INVALID_BOOKING");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_store_failure_returns_bad_gateway() {
    let app = app_with(Arc::new(FailingStore));

    let (status, json) = post_booking(app, &valid_form()).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "STORE_ERROR");
    assert!(json["error"].as_str().unwrap().contains("error"));
}

#[tokio::test]
async fn test_unknown_fields_are_ignored() {
    let store = Arc::new(MemoryBookingStore::new());
    let app = app_with(store.clone());

    let mut form = valid_form();
    form["roomType"] = json!("deluxe");

    let (status, _) = post_booking(app, &form).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_padded_values_are_stored_as_typed() {
    let store = Arc::new(MemoryBookingStore::new());
    let app = app_with(store.clone());

    let mut form = valid_form();
    form["name"] = json!(" Test User ");

    let (status, _) = post_booking(app, &form).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(store.records()[0].1.name, " Test User ");
}

#[tokio::test]
async fn test_ratings_default_to_reviews() {
    let app = app_with(Arc::new(MemoryBookingStore::new()));

    let (status, json) = get_json(app, "/api/ratings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "static");
    assert_eq!(json["count"], 5);
    assert_eq!(json["average"], "4.6");
}

#[tokio::test]
async fn test_ratings_from_live_source() {
    let state = AppState::new(BookingDesk::new(Arc::new(MemoryBookingStore::new())))
        .with_ratings(RatingBoard::new().with_live(Arc::new(LiveRatings(vec![5, 5, 2]))));
    let app = router(state, "static");

    let (status, json) = get_json(app, "/api/ratings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "live");
    assert_eq!(json["count"], 3);
    assert_eq!(json["distribution"], json!([0, 1, 0, 0, 2]));
}
