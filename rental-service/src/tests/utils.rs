use axum::{body::Body, Router};
use chrono::NaiveDate;
use http::Request;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;

use rental_shared::models::{Booking, Car};
use rental_shared::services::FixedClock;
use rental_shared::test_utils::mock_rental_store::MockRentalStore;
use rental_shared::test_utils::test_logging::init_test_logging;

use crate::handlers::AppState;
use crate::routes::create_router_with_state;

/// "Today" for every router test, safely before the December dates they book
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
}

/// Builds a router over a mock store seeded with `cars` and `bookings`
pub fn create_test_app(cars: Vec<Car>, bookings: Vec<Booking>) -> (Router, Arc<MockRentalStore>) {
    init_test_logging();
    let store = Arc::new(MockRentalStore::with_data(cars, bookings));
    let state = AppState::with_clock(store.clone(), Arc::new(FixedClock(test_today())), "test-data");
    (create_router_with_state(state, ""), store)
}

/// Extracts the JSON body of a response
pub async fn response_to_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
