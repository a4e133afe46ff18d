use chrono::{NaiveDate, Utc};
use log::{debug, error, info};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use super::clock::{Clock, SystemClock};
use crate::models::{midnight, Booking, Car, STATUS_CONFIRMED};
use crate::store::RentalStore;

pub const BOOKING_ID_PREFIX: &str = "BOOKING-";

/// Reasons a booking request is turned down.
///
/// Everything except `PersistenceFailure` is the caller's to fix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Car {0} not found")]
    CarNotFound(String),

    #[error("Car {0} is not available")]
    CarUnavailable(String),

    #[error("Car {car_id} is already booked from {start} to {end}")]
    DateConflict {
        car_id: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Cannot book dates in the past")]
    PastDate,

    #[error("End date must be after start date")]
    InvalidDateRange,

    #[error("Customer name must not be empty")]
    EmptyCustomerName,

    #[error("Failed to create booking")]
    PersistenceFailure,
}

impl BookingError {
    pub fn is_user_error(&self) -> bool {
        !matches!(self, BookingError::PersistenceFailure)
    }
}

/// A booking request as it arrives from the boundary.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub car_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Validates booking requests and records the ones that pass.
///
/// There is no isolation between the overlap check and the append: two
/// concurrent requests for the same car and days can both succeed. Closing
/// that needs a per-car lock or a store with conditional writes.
pub struct BookingService<S: RentalStore> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S: RentalStore> BookingService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Runs the booking rules in order and persists the result.
    ///
    /// The order is fixed: car exists, car available, no overlap with a
    /// confirmed booking, start not in the past, positive duration, non-empty
    /// customer name. A request that is both past and overlapping reports
    /// `DateConflict`.
    pub async fn create_booking(&self, request: NewBooking) -> Result<Booking, BookingError> {
        let cars = self.store.list_cars().await;
        let car = find_car(&cars, &request.car_id)?;

        if !car.available {
            return Err(BookingError::CarUnavailable(car.id.clone()));
        }

        let bookings = self.store.list_bookings().await;
        check_overlap(&bookings, &request)?;

        if request.start_date < self.clock.today() {
            return Err(BookingError::PastDate);
        }

        let duration_days = (request.end_date - request.start_date).num_days();
        if duration_days <= 0 {
            return Err(BookingError::InvalidDateRange);
        }

        if request.customer_name.is_empty() {
            return Err(BookingError::EmptyCustomerName);
        }

        let total_price = duration_days as f64 * car.daily_price;
        debug!(
            "Pricing car {}: {} days x {} = {}",
            car.id, duration_days, car.daily_price, total_price
        );

        let booking = Booking {
            id: format!("{}{}", BOOKING_ID_PREFIX, Uuid::new_v4()),
            car_id: request.car_id,
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            start_date: midnight(request.start_date),
            end_date: midnight(request.end_date),
            status: STATUS_CONFIRMED.to_string(),
            total_price,
            created_at: Utc::now(),
        };

        if !self.store.append_booking(&booking).await {
            error!("Store rejected booking {} for car {}", booking.id, booking.car_id);
            return Err(BookingError::PersistenceFailure);
        }

        info!(
            "Booked car {} from {} to {} as {}",
            booking.car_id,
            booking.start_day(),
            booking.end_day(),
            booking.id
        );
        Ok(booking)
    }
}

fn find_car<'a>(cars: &'a [Car], car_id: &str) -> Result<&'a Car, BookingError> {
    cars.iter()
        .find(|c| c.id == car_id)
        .ok_or_else(|| BookingError::CarNotFound(car_id.to_string()))
}

fn check_overlap(bookings: &[Booking], request: &NewBooking) -> Result<(), BookingError> {
    let conflict = bookings.iter().find(|b| {
        b.car_id == request.car_id
            && b.is_confirmed()
            && b.overlaps(request.start_date, request.end_date)
    });

    match conflict {
        Some(existing) => Err(BookingError::DateConflict {
            car_id: request.car_id.clone(),
            start: existing.start_day(),
            end: existing.end_day(),
        }),
        None => Ok(()),
    }
}
