use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use crate::models::{Booking, Car};
use crate::store::RentalStore;

/// Answers which cars can be rented, optionally on a given day.
pub struct AvailabilityService<S: RentalStore> {
    store: Arc<S>,
}

impl<S: RentalStore> AvailabilityService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Cars flagged available, in storage order. With `on_date`, cars that
    /// have a confirmed booking covering that day are left out.
    pub async fn list_available_cars(&self, on_date: Option<NaiveDate>) -> Vec<Car> {
        let cars = self.store.list_cars().await;

        let available = match on_date {
            None => cars.into_iter().filter(|car| car.available).collect(),
            Some(day) => {
                let bookings = self.store.list_bookings().await;
                free_on(cars, &bookings, day)
            }
        };

        debug!(
            "{} cars available{}",
            available.len(),
            on_date.map(|d| format!(" on {}", d)).unwrap_or_default()
        );
        available
    }
}

fn free_on(cars: Vec<Car>, bookings: &[Booking], day: NaiveDate) -> Vec<Car> {
    cars.into_iter()
        .filter(|car| car.available)
        .filter(|car| {
            !bookings
                .iter()
                .any(|b| b.car_id == car.id && b.is_confirmed() && b.covers(day))
        })
        .collect()
}
