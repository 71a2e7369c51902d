use super::Database;

use sqlx::{types::Json, Executor, Row, Transaction};
use uuid::Uuid;

use crate::{
    entities::Booking,
    error::{invalid_input_error, Error},
};

#[tracing::instrument(skip(tx))]
pub async fn fetch_booking_for_update(
    tx: &mut Transaction<'_, Database>,
    id: &Uuid,
) -> Result<Booking, Error> {
    let Json(booking): Json<Booking> = tx
        .fetch_optional(sqlx::query("SELECT data FROM bookings WHERE id = $1 FOR UPDATE").bind(id))
        .await?
        .ok_or_else(|| invalid_input_error())?
        .try_get("data")?;

    Ok(booking)
}

#[tracing::instrument(skip(tx))]
pub async fn update_booking(
    tx: &mut Transaction<'_, Database>,
    booking: &Booking,
) -> Result<(), Error> {
    tx.execute(
        sqlx::query("UPDATE bookings SET status = $2, driver_id = $3, data = $4 WHERE id = $1")
            .bind(&booking.id)
            .bind(booking.status.name())
            .bind(&booking.driver_id)
            .bind(Json(booking)),
    )
    .await?;

    Ok(())
}
