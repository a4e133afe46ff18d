use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use crate::models::{Booking, Car};
use crate::store::RentalStore;

/// MockRentalStore is a simple in-memory implementation of RentalStore for testing
pub struct MockRentalStore {
    cars: Mutex<Vec<Car>>,
    bookings: Mutex<Vec<Booking>>,
    error_mode: AtomicBool,
    append_calls: AtomicUsize,
}

impl MockRentalStore {
    /// Create a new empty MockRentalStore
    pub fn new() -> Self {
        Self {
            cars: Mutex::new(Vec::new()),
            bookings: Mutex::new(Vec::new()),
            error_mode: AtomicBool::new(false),
            append_calls: AtomicUsize::new(0),
        }
    }

    /// Create a MockRentalStore with initial test data
    pub fn with_data(cars: Vec<Car>, bookings: Vec<Booking>) -> Self {
        let store = Self::new();
        *store.cars.lock().unwrap() = cars;
        *store.bookings.lock().unwrap() = bookings;
        store
    }

    /// Make every subsequent append report failure
    pub fn set_error_mode(&self, enabled: bool) {
        self.error_mode.store(enabled, Ordering::SeqCst);
    }

    /// Number of times append_booking has been called, failed calls included
    pub fn append_calls(&self) -> usize {
        self.append_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockRentalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RentalStore for MockRentalStore {
    async fn list_cars(&self) -> Vec<Car> {
        self.cars.lock().unwrap().clone()
    }

    async fn list_bookings(&self) -> Vec<Booking> {
        self.bookings.lock().unwrap().clone()
    }

    async fn append_booking(&self, booking: &Booking) -> bool {
        self.append_calls.fetch_add(1, Ordering::SeqCst);

        if self.error_mode.load(Ordering::SeqCst) {
            return false;
        }

        self.bookings.lock().unwrap().push(booking.clone());
        true
    }
}
