use serde::{Deserialize, Serialize};

use crate::entities::{BookingType, Vehicle};
use crate::error::{
    invalid_input_error, invalid_vehicle_error, seats_exceed_capacity_error, Error,
};

pub const BOOKING_FEE: i64 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareQuote {
    pub fare: i64,
    pub fee: i64,
    pub total: i64,
}

// Catalog price as shown next to a vehicle: a whole-vehicle booking is
// advertised with 10% off, a shared booking with its per-seat price.
pub fn display_price(vehicle: &Vehicle, booking_type: BookingType) -> Result<i64, Error> {
    check_vehicle(vehicle)?;

    let price = match booking_type {
        BookingType::Full => (vehicle.base_price as f64 * 0.9).round() as i64,
        BookingType::Join => seat_price(vehicle),
    };

    Ok(price)
}

// Amount actually charged at checkout. A full booking pays the undiscounted
// list price here; the 10% off figure is display-only.
pub fn checkout_total(
    vehicle: &Vehicle,
    booking_type: BookingType,
    seats: u32,
) -> Result<FareQuote, Error> {
    check_vehicle(vehicle)?;

    let fare = match booking_type {
        BookingType::Full => vehicle.base_price,
        BookingType::Join => {
            if seats == 0 {
                return Err(invalid_input_error());
            }

            if seats > vehicle.capacity {
                return Err(seats_exceed_capacity_error());
            }

            seat_price(vehicle) * seats as i64
        }
    };

    Ok(FareQuote {
        fare,
        fee: BOOKING_FEE,
        total: fare + BOOKING_FEE,
    })
}

// Half-away-from-zero rounding, so displayed and charged seat prices agree.
fn seat_price(vehicle: &Vehicle) -> i64 {
    (vehicle.base_price as f64 / vehicle.capacity as f64).round() as i64
}

fn check_vehicle(vehicle: &Vehicle) -> Result<(), Error> {
    if vehicle.capacity == 0 || vehicle.base_price < 0 {
        return Err(invalid_vehicle_error());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn vehicle(capacity: u32, base_price: i64) -> Vehicle {
        Vehicle::new("test", "Test", capacity, base_price, &[])
    }

    #[test]
    fn full_display_price_takes_ten_percent_off() {
        let price = display_price(&vehicle(4, 3500), BookingType::Full).unwrap();
        assert_eq!(price, 3150);
    }

    #[test]
    fn join_display_price_is_rounded_seat_price() {
        let price = display_price(&vehicle(6, 5000), BookingType::Join).unwrap();
        assert_eq!(price, 833);
    }

    #[test]
    fn join_checkout_multiplies_the_rounded_seat_price() {
        let quote = checkout_total(&vehicle(14, 7000), BookingType::Join, 3).unwrap();

        assert_eq!(quote.fare, 1500);
        assert_eq!(quote.fee, 500);
        assert_eq!(quote.total, 2000);
    }

    #[test]
    fn full_checkout_charges_the_list_price() {
        let quote = checkout_total(&vehicle(18, 8000), BookingType::Full, 18).unwrap();

        assert_eq!(quote.fare, 8000);
        assert_eq!(quote.total, 8500);
    }

    // The catalog shows a discounted full price while checkout charges list
    // price. Both figures are correct per their own contract; this pins the
    // difference so it is not "fixed" on one side only.
    #[test]
    fn full_display_and_checkout_prices_disagree() {
        let v = vehicle(18, 8000);

        let display = display_price(&v, BookingType::Full).unwrap();
        let quote = checkout_total(&v, BookingType::Full, 18).unwrap();

        assert_eq!(display, 7200);
        assert_eq!(quote.fare, 8000);
    }

    #[test]
    fn fee_is_additive_across_the_catalog() {
        for v in catalog::vehicles() {
            for booking_type in [BookingType::Join, BookingType::Full] {
                let quote = checkout_total(&v, booking_type, 1).unwrap();

                assert_eq!(quote.total, quote.fare + BOOKING_FEE);
                assert!(quote.fare >= 0);
            }
        }
    }

    #[test]
    fn zero_capacity_vehicle_is_rejected() {
        let err = display_price(&vehicle(0, 3500), BookingType::Join).unwrap_err();
        assert_eq!(err.code, 102);

        let err = checkout_total(&vehicle(0, 3500), BookingType::Full, 1).unwrap_err();
        assert_eq!(err.code, 102);
    }

    #[test]
    fn negative_price_vehicle_is_rejected() {
        let err = display_price(&vehicle(4, -1), BookingType::Full).unwrap_err();
        assert_eq!(err.code, 102);
    }

    #[test]
    fn seats_above_capacity_are_rejected() {
        let err = checkout_total(&vehicle(4, 3500), BookingType::Join, 5).unwrap_err();
        assert_eq!(err.code, 103);
    }

    #[test]
    fn zero_seats_are_rejected_for_shared_bookings() {
        let err = checkout_total(&vehicle(4, 3500), BookingType::Join, 0).unwrap_err();
        assert_eq!(err.code, 101);
    }

    #[test]
    fn seats_are_ignored_for_full_bookings() {
        let quote = checkout_total(&vehicle(4, 3500), BookingType::Full, 0).unwrap();
        assert_eq!(quote.fare, 3500);
    }

    #[test]
    fn repeated_calls_agree() {
        let v = vehicle(6, 5000);

        for _ in 0..3 {
            assert_eq!(display_price(&v, BookingType::Join).unwrap(), 833);
            assert_eq!(
                checkout_total(&v, BookingType::Join, 2).unwrap(),
                checkout_total(&v, BookingType::Join, 2).unwrap()
            );
        }
    }
}
