use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Vehicle;
use crate::fares::FareQuote;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingType {
    Join,
    Full,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub token: Uuid,
    pub vehicle: Vehicle,
    pub booking_type: BookingType,
    pub seats: u32,
    pub breakdown: FareQuote,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    pub fn new(vehicle: Vehicle, booking_type: BookingType, seats: u32, breakdown: FareQuote) -> Self {
        Self {
            token: Uuid::new_v4(),
            vehicle,
            booking_type,
            seats,
            breakdown,
            created_at: Utc::now(),
        }
    }
}
