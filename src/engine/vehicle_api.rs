use super::Engine;

use async_trait::async_trait;

use crate::{
    api::VehicleAPI,
    entities::{BookingType, Vehicle, VehicleListing},
    error::{invalid_input_error, Error},
    fares,
};

#[async_trait]
impl VehicleAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_vehicles(&self) -> Result<Vec<VehicleListing>, Error> {
        let mut listings = vec![];

        for vehicle in &self.vehicles {
            listings.push(VehicleListing {
                vehicle: vehicle.clone(),
                join_price: fares::display_price(vehicle, BookingType::Join)?,
                full_price: fares::display_price(vehicle, BookingType::Full)?,
            });
        }

        Ok(listings)
    }

    #[tracing::instrument(skip(self))]
    async fn find_vehicle(&self, id: String) -> Result<Vehicle, Error> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.id == id)
            .cloned()
            .ok_or_else(|| invalid_input_error())
    }
}
