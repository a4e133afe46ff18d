use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

pub mod timestamps;

pub const STATUS_CONFIRMED: &str = "confirmed";
pub const MIN_CAR_YEAR: i32 = 1900;
pub const MAX_CAR_YEAR: i32 = 2030;

/// An individual vehicle in the rental fleet.
///
/// The `available` flag belongs to inventory management; bookings never
/// change it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Car {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    #[serde(rename = "dailyPrice", alias = "daily_price")]
    pub daily_price: f64,
    #[serde(default = "default_available")]
    pub available: bool,
    pub plate: String,
    pub color: String,
    pub kilometers: u64,
    #[serde(
        rename = "createdAt",
        alias = "created_at",
        default = "Utc::now",
        deserialize_with = "timestamps::utc"
    )]
    pub created_at: DateTime<Utc>,
}

impl Car {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_CAR_YEAR..=MAX_CAR_YEAR).contains(&self.year) {
            return Err(StoreError::InvalidRecord(format!(
                "Car {} has year {} outside {}-{}",
                self.id, self.year, MIN_CAR_YEAR, MAX_CAR_YEAR
            )));
        }
        if self.daily_price.is_nan() || self.daily_price <= 0.0 {
            return Err(StoreError::InvalidRecord(format!(
                "Car {} has non-positive daily price {}",
                self.id, self.daily_price
            )));
        }
        Ok(())
    }
}

fn default_available() -> bool {
    true
}

/// A reservation of one car for an inclusive range of calendar days.
///
/// `start_date` and `end_date` are stored as midnight date-times; every
/// comparison works on the date part only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Booking {
    pub id: String,
    #[serde(rename = "carId", alias = "car_id")]
    pub car_id: String,
    #[serde(rename = "customerName", alias = "customer_name")]
    pub customer_name: String,
    #[serde(rename = "customerEmail", alias = "customer_email")]
    pub customer_email: String,
    #[serde(rename = "startDate", alias = "start_date", deserialize_with = "timestamps::naive")]
    pub start_date: NaiveDateTime,
    #[serde(rename = "endDate", alias = "end_date", deserialize_with = "timestamps::naive")]
    pub end_date: NaiveDateTime,
    // Free text: statuses other than "confirmed" are carried through untouched
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(rename = "totalPrice", alias = "total_price")]
    pub total_price: f64,
    #[serde(
        rename = "createdAt",
        alias = "created_at",
        default = "Utc::now",
        deserialize_with = "timestamps::utc"
    )]
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_confirmed(&self) -> bool {
        self.status == STATUS_CONFIRMED
    }

    pub fn start_day(&self) -> NaiveDate {
        self.start_date.date()
    }

    pub fn end_day(&self) -> NaiveDate {
        self.end_date.date()
    }

    /// True when `day` falls inside this booking, both ends included.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_day() <= day && day <= self.end_day()
    }

    /// Inclusive overlap against the requested `[start, end]` range.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        ranges_overlap(self.start_day(), self.end_day(), start, end)
    }

    pub fn validate(&self) -> Result<()> {
        if self.customer_name.is_empty() {
            return Err(StoreError::InvalidRecord(format!(
                "Booking {} has an empty customer name",
                self.id
            )));
        }
        if self.total_price.is_nan() || self.total_price <= 0.0 {
            return Err(StoreError::InvalidRecord(format!(
                "Booking {} has non-positive total price {}",
                self.id, self.total_price
            )));
        }
        Ok(())
    }
}

fn default_status() -> String {
    STATUS_CONFIRMED.to_string()
}

/// `[s1, e1]` and `[s2, e2]` overlap iff `s1 <= e2 && e1 >= s2`.
pub fn ranges_overlap(s1: NaiveDate, e1: NaiveDate, s2: NaiveDate, e2: NaiveDate) -> bool {
    s1 <= e2 && e1 >= s2
}

pub fn midnight(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

// Response DTOs for general use across services
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}
