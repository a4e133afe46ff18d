use axum::{extract::State, http::StatusCode, Json};
use log::info;

use rental_shared::models::Booking;
use rental_shared::store::RentalStore;

use super::AppState;
use crate::error::Result;
use crate::models::CreateBookingRequest;

// POST /bookings
pub async fn create_booking<S>(
    State(state): State<AppState<S>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>)>
where
    S: RentalStore,
{
    let booking = state.bookings.create_booking(payload.into()).await?;
    info!("Booking created successfully: {}", booking.id);

    Ok((StatusCode::CREATED, Json(booking)))
}
