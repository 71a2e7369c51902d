use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Booking, BookingType};

// Read model for the ride history view. Only bookings that were actually
// charged produce a receipt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Receipt {
    pub booking_id: Uuid,
    pub vehicle_name: String,
    pub booking_type: BookingType,
    pub seats: u32,
    pub total: i64,
    pub reference: String,
    pub paid_at: DateTime<Utc>,
}

impl Receipt {
    pub fn from_booking(booking: &Booking) -> Option<Self> {
        let reference = booking.payment_reference.clone()?;
        let paid_at = booking.paid_at?;

        Some(Self {
            booking_id: booking.id,
            vehicle_name: booking.vehicle.name.clone(),
            booking_type: booking.booking_type,
            seats: booking.seats,
            total: booking.breakdown.total,
            reference,
            paid_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Quote, Vehicle};
    use crate::fares;

    #[test]
    fn unpaid_bookings_have_no_receipt() {
        let vehicle = Vehicle::new("sedan", "Sedan", 4, 3500, &[]);
        let breakdown = fares::checkout_total(&vehicle, BookingType::Full, 4).unwrap();
        let quote = Quote::new(vehicle, BookingType::Full, 4, breakdown);
        let mut booking = Booking::new(
            Uuid::new_v4(),
            quote,
            "Lagos".into(),
            "Ikeja".into(),
            "Yaba".into(),
        );

        assert!(Receipt::from_booking(&booking).is_none());

        booking.mark_paid("ref_100".into()).unwrap();
        let receipt = Receipt::from_booking(&booking).unwrap();

        assert_eq!(receipt.booking_id, booking.id);
        assert_eq!(receipt.total, 8500);
        assert_eq!(receipt.reference, "ref_100");
    }
}
