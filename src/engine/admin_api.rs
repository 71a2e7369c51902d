use super::helpers::{fetch_booking_for_update, update_booking};
use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::AdminAPI,
    auth::{Platform, User},
    entities::Booking,
    error::Error,
};

#[async_trait]
impl AdminAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_bookings(&self, user: User) -> Result<Vec<Booking>, Error> {
        self.authorize(user, "list_bookings", Platform::default())?;

        let mut conn = self.pool.acquire().await?;

        let results = conn
            .fetch_all(sqlx::query(
                "SELECT data FROM bookings ORDER BY created_at DESC LIMIT 100",
            ))
            .await?;

        let mut bookings = vec![];

        for result in results {
            let Json(booking): Json<Booking> = result.try_get("data")?;
            bookings.push(booking);
        }

        Ok(bookings)
    }

    #[tracing::instrument(skip(self))]
    async fn assign_driver(
        &self,
        user: User,
        booking_id: Uuid,
        driver_id: Uuid,
    ) -> Result<Booking, Error> {
        let mut tx = self.pool.begin().await?;

        let mut booking = fetch_booking_for_update(&mut tx, &booking_id).await?;

        self.authorize(user, "assign_driver", booking.clone())?;

        booking.assign_driver(driver_id)?;
        update_booking(&mut tx, &booking).await?;

        tx.commit().await?;

        Ok(booking)
    }
}
