mod booking;
mod quote;
mod receipt;
mod vehicle;

pub use booking::{Booking, Status as BookingStatus};
pub use quote::{BookingType, Quote};
pub use receipt::Receipt;
pub use vehicle::{Vehicle, VehicleListing};
