use chrono::{DateTime, Utc};
use oso::PolarClass;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{BookingType, Quote, Vehicle};
use crate::error::{invalid_invocation_error, Error};
use crate::fares::FareQuote;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub status: Status,
    pub passenger_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub vehicle: Vehicle,
    pub booking_type: BookingType,
    pub seats: u32,
    pub breakdown: FareQuote,
    pub region: String,
    pub pickup: String,
    pub destination: String,
    pub payment_reference: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    AwaitingPayment,
    Paid {
        reference: String,
        paid_at: DateTime<Utc>,
    },
    Completed,
    Cancelled,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::AwaitingPayment => "awaiting_payment".into(),
            Self::Paid {
                reference: _,
                paid_at: _,
            } => "paid".into(),
            Self::Completed => "completed".into(),
            Self::Cancelled => "cancelled".into(),
        }
    }
}

impl Booking {
    pub fn new(passenger_id: Uuid, quote: Quote, region: String, pickup: String, destination: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            status: Status::AwaitingPayment,
            passenger_id,
            driver_id: None,
            vehicle: quote.vehicle,
            booking_type: quote.booking_type,
            seats: quote.seats,
            breakdown: quote.breakdown,
            region,
            pickup,
            destination,
            payment_reference: None,
            paid_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_awaiting_payment(&self) -> bool {
        match self.status {
            Status::AwaitingPayment => true,
            _ => false,
        }
    }

    pub fn is_paid(&self) -> bool {
        match self.status {
            Status::Paid {
                reference: _,
                paid_at: _,
            } => true,
            _ => false,
        }
    }

    #[tracing::instrument]
    pub fn mark_paid(&mut self, reference: String) -> Result<(), Error> {
        match self.status {
            Status::AwaitingPayment => {
                let paid_at = Utc::now();

                self.payment_reference = Some(reference.clone());
                self.paid_at = Some(paid_at);
                self.status = Status::Paid { reference, paid_at };

                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    #[tracing::instrument]
    pub fn assign_driver(&mut self, driver_id: Uuid) -> Result<(), Error> {
        match self.status {
            Status::Paid {
                reference: _,
                paid_at: _,
            } => {
                self.driver_id = Some(driver_id);
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    #[tracing::instrument]
    pub fn complete(&mut self) -> Result<(), Error> {
        match self.status {
            Status::Paid {
                reference: _,
                paid_at: _,
            } => {
                self.status = Status::Completed;
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    #[tracing::instrument]
    pub fn cancel(&mut self) -> Result<(), Error> {
        match self.status {
            Status::AwaitingPayment
            | Status::Paid {
                reference: _,
                paid_at: _,
            } => {
                self.status = Status::Cancelled;
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }
}

impl PolarClass for Booking {
    fn get_polar_class_builder() -> oso::ClassBuilder<Booking> {
        oso::Class::builder()
            .name("Booking")
            .add_attribute_getter("id", |recv: &Booking| recv.id.clone())
            .add_attribute_getter("status", |recv: &Booking| recv.status.name())
            .add_attribute_getter("passenger_id", |recv: &Booking| {
                Some(recv.passenger_id.clone())
            })
            .add_attribute_getter("driver_id", |recv: &Booking| recv.driver_id.clone())
    }

    fn get_polar_class() -> oso::Class {
        let builder = Booking::get_polar_class_builder();
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{BookingType, Quote, Vehicle};
    use crate::fares;

    fn paid_booking() -> Booking {
        let mut booking = awaiting_booking();
        booking.mark_paid("ref_001".into()).unwrap();
        booking
    }

    fn awaiting_booking() -> Booking {
        let vehicle = Vehicle::new("minibus", "Minibus", 14, 7000, &[]);
        let breakdown = fares::checkout_total(&vehicle, BookingType::Join, 3).unwrap();
        let quote = Quote::new(vehicle, BookingType::Join, 3, breakdown);

        Booking::new(
            Uuid::new_v4(),
            quote,
            "Lagos".into(),
            "Unilag Main Gate".into(),
            "Yaba".into(),
        )
    }

    #[test]
    fn payment_moves_booking_out_of_awaiting() {
        let mut booking = awaiting_booking();
        assert!(booking.is_awaiting_payment());

        booking.mark_paid("ref_001".into()).unwrap();

        assert!(booking.is_paid());
        assert_eq!(booking.payment_reference.as_deref(), Some("ref_001"));
        assert!(booking.paid_at.is_some());
    }

    #[test]
    fn double_payment_is_rejected() {
        let mut booking = paid_booking();

        let err = booking.mark_paid("ref_002".into()).unwrap_err();
        assert_eq!(err.code, 100);
        assert_eq!(booking.payment_reference.as_deref(), Some("ref_001"));
    }

    #[test]
    fn driver_assignment_requires_payment() {
        let mut booking = awaiting_booking();
        let driver_id = Uuid::new_v4();

        assert_eq!(booking.assign_driver(driver_id).unwrap_err().code, 100);

        booking.mark_paid("ref_001".into()).unwrap();
        booking.assign_driver(driver_id).unwrap();

        assert_eq!(booking.driver_id, Some(driver_id));
    }

    #[test]
    fn completion_requires_payment() {
        let mut booking = awaiting_booking();
        assert_eq!(booking.complete().unwrap_err().code, 100);

        let mut booking = paid_booking();
        booking.complete().unwrap();
        assert_eq!(booking.status.name(), "completed");
    }

    #[test]
    fn cancellation_is_allowed_until_completion() {
        let mut booking = awaiting_booking();
        booking.cancel().unwrap();
        assert_eq!(booking.status.name(), "cancelled");

        let mut booking = paid_booking();
        booking.cancel().unwrap();
        assert_eq!(booking.status.name(), "cancelled");

        let mut booking = paid_booking();
        booking.complete().unwrap();
        assert_eq!(booking.cancel().unwrap_err().code, 100);
    }
}
