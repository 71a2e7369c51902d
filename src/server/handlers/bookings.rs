use axum::extract::{Extension, Json, Path};
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::User;
use crate::entities::Booking;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    quote_token: Uuid,
    region: String,
    pickup: String,
    destination: String,
}

#[derive(Serialize, Deserialize)]
pub struct PayParams {
    reference: String,
}

#[debug_handler]
pub async fn create(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Booking>, Error> {
    let booking = api
        .create_booking(
            user,
            params.quote_token,
            params.region,
            params.pickup,
            params.destination,
        )
        .await?;

    Ok(booking.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, Error> {
    let booking = api.find_booking(user, id).await?;

    Ok(booking.into())
}

pub async fn pay(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
    Json(params): Json<PayParams>,
) -> Result<Json<Booking>, Error> {
    let booking = api.pay_booking(user, id, params.reference).await?;

    Ok(booking.into())
}

pub async fn cancel(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, Error> {
    let booking = api.cancel_booking(user, id).await?;

    Ok(booking.into())
}

pub async fn complete(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, Error> {
    let booking = api.complete_booking(user, id).await?;

    Ok(booking.into())
}

pub async fn driver_list(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<Booking>>, Error> {
    let bookings = api.list_driver_bookings(user).await?;

    Ok(bookings.into())
}
