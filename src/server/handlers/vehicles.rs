use axum::extract::{Extension, Json, Path};

use crate::entities::{Vehicle, VehicleListing};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<VehicleListing>>, Error> {
    let vehicles = api.list_vehicles().await?;

    Ok(vehicles.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, Error> {
    let vehicle = api.find_vehicle(id).await?;

    Ok(vehicle.into())
}
