pub mod booking_handlers;
pub mod car_handlers;

use axum::{extract::State, Json};
use log::info;
use std::sync::Arc;

use rental_shared::models::MessageResponse;
use rental_shared::services::{AvailabilityService, BookingService, Clock, SystemClock};
use rental_shared::store::RentalStore;

use crate::models::DataPathResponse;

/// Shared handler state: both services over one store instance.
pub struct AppState<S: RentalStore> {
    pub availability: Arc<AvailabilityService<S>>,
    pub bookings: Arc<BookingService<S>>,
    pub data_path: String,
}

// Manual impl: derive would require S: Clone
impl<S: RentalStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            availability: self.availability.clone(),
            bookings: self.bookings.clone(),
            data_path: self.data_path.clone(),
        }
    }
}

impl<S: RentalStore> AppState<S> {
    pub fn new(store: Arc<S>, data_path: impl Into<String>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock), data_path)
    }

    pub fn with_clock(store: Arc<S>, clock: Arc<dyn Clock>, data_path: impl Into<String>) -> Self {
        Self {
            availability: Arc::new(AvailabilityService::new(store.clone())),
            bookings: Arc::new(BookingService::with_clock(store, clock)),
            data_path: data_path.into(),
        }
    }
}

// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Car Rental API".to_string(),
    })
}

// GET /data-path
pub async fn data_path<S>(State(state): State<AppState<S>>) -> Json<DataPathResponse>
where
    S: RentalStore,
{
    info!("Data path is set to: {}", state.data_path);
    Json(DataPathResponse {
        data_path: state.data_path.clone(),
    })
}
