//! Business rules sitting between the HTTP handlers and the store.
//!
//! Both services are generic over [`RentalStore`](crate::store::RentalStore)
//! and share one store instance through an `Arc`.

pub mod availability;
pub mod booking;
pub mod clock;

pub use availability::AvailabilityService;
pub use booking::{BookingError, BookingService, NewBooking};
pub use clock::{Clock, FixedClock, SystemClock};
