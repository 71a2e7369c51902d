use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::User;
use crate::entities::Booking;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct AssignDriverParams {
    driver_id: Uuid,
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<Booking>>, Error> {
    let bookings = api.list_bookings(user).await?;

    Ok(bookings.into())
}

pub async fn assign_driver(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(params): Json<AssignDriverParams>,
) -> Result<Json<Booking>, Error> {
    let booking = api.assign_driver(user, id, params.driver_id).await?;

    Ok(booking.into())
}
