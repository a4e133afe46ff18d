use axum::{
    extract::{Query, State},
    Json,
};
use log::info;

use rental_shared::models::Car;
use rental_shared::store::RentalStore;

use super::AppState;
use crate::models::AvailabilityQuery;

// GET /cars/available?date=YYYY-MM-DD
pub async fn get_available_cars<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<AvailabilityQuery>,
) -> Json<Vec<Car>>
where
    S: RentalStore,
{
    let cars = state.availability.list_available_cars(query.date).await;

    match query.date {
        Some(date) => info!("Available cars on {}: {} cars", date, cars.len()),
        None => info!("Available cars: {} cars", cars.len()),
    }

    Json(cars)
}
