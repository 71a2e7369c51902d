pub mod admin;
pub mod bookings;
pub mod live;
pub mod locations;
pub mod quotes;
pub mod receipts;
pub mod vehicles;
