use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use rental_shared::services::NewBooking;

// Request DTOs
#[derive(Deserialize, Debug)]
pub struct CreateBookingRequest {
    #[serde(alias = "carId")]
    pub car_id: String,
    #[serde(alias = "customerName")]
    pub customer_name: String,
    #[serde(alias = "customerEmail")]
    pub customer_email: String,
    #[serde(alias = "startDate")]
    pub start_date: NaiveDate,
    #[serde(alias = "endDate")]
    pub end_date: NaiveDate,
}

impl From<CreateBookingRequest> for NewBooking {
    fn from(req: CreateBookingRequest) -> Self {
        NewBooking {
            car_id: req.car_id,
            customer_name: req.customer_name,
            customer_email: req.customer_email,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct AvailabilityQuery {
    pub date: Option<NaiveDate>,
}

// Response DTOs
#[derive(Serialize, Debug)]
pub struct DataPathResponse {
    pub data_path: String,
}
