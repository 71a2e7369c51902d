use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::User;
use crate::entities::{Booking, BookingType, Quote, Receipt, Vehicle, VehicleListing};
use crate::error::Error;
use crate::live::Snapshot;

#[async_trait]
pub trait VehicleAPI {
    async fn list_vehicles(&self) -> Result<Vec<VehicleListing>, Error>;

    async fn find_vehicle(&self, id: String) -> Result<Vehicle, Error>;
}

#[async_trait]
pub trait LocationAPI {
    async fn list_regions(&self) -> Result<Vec<String>, Error>;

    async fn suggest_places(&self, query: String, region: String) -> Result<Vec<String>, Error>;
}

#[async_trait]
pub trait QuoteAPI {
    async fn create_quote(
        &self,
        user: User,
        vehicle_id: String,
        booking_type: BookingType,
        seats: u32,
    ) -> Result<Quote, Error>;

    async fn find_quote(&self, user: User, token: Uuid) -> Result<Quote, Error>;
}

#[async_trait]
pub trait BookingAPI {
    async fn create_booking(
        &self,
        user: User,
        quote_token: Uuid,
        region: String,
        pickup: String,
        destination: String,
    ) -> Result<Booking, Error>;

    async fn find_booking(&self, user: User, id: Uuid) -> Result<Booking, Error>;

    async fn pay_booking(&self, user: User, id: Uuid, reference: String) -> Result<Booking, Error>;

    async fn cancel_booking(&self, user: User, id: Uuid) -> Result<Booking, Error>;

    async fn complete_booking(&self, user: User, id: Uuid) -> Result<Booking, Error>;

    async fn list_receipts(&self, user: User) -> Result<Vec<Receipt>, Error>;

    async fn list_driver_bookings(&self, user: User) -> Result<Vec<Booking>, Error>;
}

#[async_trait]
pub trait AdminAPI {
    async fn list_bookings(&self, user: User) -> Result<Vec<Booking>, Error>;

    async fn assign_driver(
        &self,
        user: User,
        booking_id: Uuid,
        driver_id: Uuid,
    ) -> Result<Booking, Error>;
}

#[async_trait]
pub trait LiveAPI {
    async fn live_snapshot(&self) -> Result<Snapshot, Error>;
}

pub trait API: VehicleAPI + LocationAPI + QuoteAPI + BookingAPI + AdminAPI + LiveAPI {}
