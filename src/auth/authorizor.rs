use oso::{Oso, PolarClass};

use crate::auth::{Platform, User};
use crate::entities::Booking;

pub fn new() -> Oso {
    let mut o = Oso::new();

    o.register_class(Platform::get_polar_class()).unwrap();
    o.register_class(User::get_polar_class()).unwrap();
    o.register_class(Booking::get_polar_class()).unwrap();

    o.load_str(include_str!("rules.polar")).unwrap();

    o
}

#[cfg(test)]
fn new_booking(passenger_id: uuid::Uuid) -> Booking {
    use crate::entities::{BookingType, Quote, Vehicle};
    use crate::fares;

    let vehicle = Vehicle::new("minivan", "Minivan", 6, 5000, &[]);
    let breakdown = fares::checkout_total(&vehicle, BookingType::Join, 2).unwrap();
    let quote = Quote::new(vehicle, BookingType::Join, 2, breakdown);

    Booking::new(
        passenger_id,
        quote,
        "Lagos".into(),
        "Ikeja".into(),
        "Yaba".into(),
    )
}

#[test]
fn platform_role_test() {
    use uuid::Uuid;

    let authorizor = new();

    let passenger = User::new_passenger();
    let driver = User::with_roles(Uuid::new_v4(), &["driver"]);
    let admin = User::with_roles(Uuid::new_v4(), &["admin"]);
    let system = User::new_system_user();

    let result = authorizor.query_rule("has_role", (system.clone(), "system", Platform::default()));
    assert!(result.unwrap().next().unwrap().is_ok());

    let result = authorizor.is_allowed(passenger.clone(), "list_bookings", Platform::default());
    assert_eq!(result.unwrap(), false);

    let result = authorizor.is_allowed(admin.clone(), "list_bookings", Platform::default());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(system.clone(), "list_bookings", Platform::default());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(passenger.clone(), "view_driver_dashboard", Platform::default());
    assert_eq!(result.unwrap(), false);

    let result = authorizor.is_allowed(driver.clone(), "view_driver_dashboard", Platform::default());
    assert_eq!(result.unwrap(), true);
}

#[test]
fn anyone_can_price_and_book_test() {
    let authorizor = new();

    let passenger = User::new_passenger();

    let result = authorizor.is_allowed(passenger.clone(), "create_quote", Platform::default());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(passenger.clone(), "create_booking", Platform::default());
    assert_eq!(result.unwrap(), true);
}

#[test]
fn booking_passenger_role_test() {
    let authorizor = new();

    let passenger = User::new_passenger();
    let stranger = User::new_passenger();

    let booking = new_booking(passenger.id.clone());

    let result = authorizor.query_rule("has_role", (passenger.clone(), "passenger", booking.clone()));
    assert!(result.unwrap().next().unwrap().is_ok());

    let result = authorizor.is_allowed(passenger.clone(), "read", booking.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(passenger.clone(), "pay", booking.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(passenger.clone(), "cancel", booking.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(passenger.clone(), "complete", booking.clone());
    assert_eq!(result.unwrap(), false);

    let result = authorizor.is_allowed(stranger.clone(), "read", booking.clone());
    assert_eq!(result.unwrap(), false);
}

#[test]
fn booking_driver_role_test() {
    let authorizor = new();

    let driver = User::new_passenger();
    let mut booking = new_booking(uuid::Uuid::new_v4());

    // before the driver is assigned

    let result = authorizor.query_rule("has_role", (driver.clone(), "driver", booking.clone()));
    assert!(result.unwrap().next().is_none());

    let result = authorizor.is_allowed(driver.clone(), "read", booking.clone());
    assert_eq!(result.unwrap(), false);

    booking.mark_paid("ref_001".into()).unwrap();
    booking.assign_driver(driver.id.clone()).unwrap();

    // after the driver is assigned

    let result = authorizor.query_rule("has_role", (driver.clone(), "driver", booking.clone()));
    assert!(result.unwrap().next().unwrap().is_ok());

    let result = authorizor.is_allowed(driver.clone(), "read", booking.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(driver.clone(), "complete", booking.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(driver.clone(), "pay", booking.clone());
    assert_eq!(result.unwrap(), false);
}

#[test]
fn booking_admin_role_test() {
    use uuid::Uuid;

    let authorizor = new();

    let admin = User::with_roles(Uuid::new_v4(), &["admin"]);
    let booking = new_booking(Uuid::new_v4());

    let result = authorizor.is_allowed(admin.clone(), "read", booking.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(admin.clone(), "cancel", booking.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(admin.clone(), "assign_driver", booking.clone());
    assert_eq!(result.unwrap(), true);

    let result = authorizor.is_allowed(admin.clone(), "pay", booking.clone());
    assert_eq!(result.unwrap(), false);
}
