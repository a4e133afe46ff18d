use chrono::{NaiveDate, Utc};

use crate::models::{midnight, Booking, Car, STATUS_CONFIRMED};

/// Builds a car with plausible fleet data around the given id, price and flag
pub fn sample_car(id: &str, daily_price: f64, available: bool) -> Car {
    Car {
        id: id.to_string(),
        brand: "Porsche".to_string(),
        model: "GT3".to_string(),
        year: 2023,
        daily_price,
        available,
        plate: format!("PLATE-{}", id),
        color: "White".to_string(),
        kilometers: 1000,
        created_at: Utc::now(),
    }
}

/// Builds a confirmed booking covering `start..=end`
pub fn sample_booking(id: &str, car_id: &str, start: NaiveDate, end: NaiveDate) -> Booking {
    let days = (end - start).num_days().max(1);
    Booking {
        id: id.to_string(),
        car_id: car_id.to_string(),
        customer_name: "Test Customer".to_string(),
        customer_email: "test@test.com".to_string(),
        start_date: midnight(start),
        end_date: midnight(end),
        status: STATUS_CONFIRMED.to_string(),
        total_price: days as f64 * 100.0,
        created_at: Utc::now(),
    }
}

/// Same as `sample_booking` with a different status
pub fn booking_with_status(
    id: &str,
    car_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    status: &str,
) -> Booking {
    Booking {
        status: status.to_string(),
        ..sample_booking(id, car_id, start, end)
    }
}
