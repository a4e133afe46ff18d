use async_trait::async_trait;

use crate::models::{Booking, Car};

// Expose the flat-file JSON store module
pub mod json;

/// RentalStore trait defining the persistence gateway for cars and bookings.
///
/// Reads never fail from the caller's point of view: an implementation that
/// cannot load a collection logs the cause and returns an empty one.
#[async_trait]
pub trait RentalStore: Send + Sync + 'static {
    /// Loads the whole fleet in storage order
    async fn list_cars(&self) -> Vec<Car>;

    /// Loads every booking in storage order
    async fn list_bookings(&self) -> Vec<Booking>;

    /// Appends a booking and rewrites the collection.
    ///
    /// Returns `false` if anything went wrong; readers never observe a
    /// partially written collection.
    async fn append_booking(&self, booking: &Booking) -> bool;
}
