use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::{QuoteAPI, VehicleAPI},
    auth::{Platform, User},
    entities::{BookingType, Quote},
    error::{invalid_input_error, Error},
    fares,
};

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(
        &self,
        user: User,
        vehicle_id: String,
        booking_type: BookingType,
        seats: u32,
    ) -> Result<Quote, Error> {
        self.authorize(user, "create_quote", Platform::default())?;

        let vehicle = self.find_vehicle(vehicle_id).await?;

        // a whole-vehicle booking always covers every seat
        let seats = match booking_type {
            BookingType::Full => vehicle.capacity,
            BookingType::Join => seats,
        };

        let breakdown = fares::checkout_total(&vehicle, booking_type, seats)?;
        let quote = Quote::new(vehicle, booking_type, seats, breakdown);

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO quotes (token, data) VALUES ($1, $2)")
                .bind(&quote.token)
                .bind(Json(&quote)),
        )
        .await?;

        Ok(quote)
    }

    #[tracing::instrument(skip(self))]
    async fn find_quote(&self, _user: User, token: Uuid) -> Result<Quote, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(
                sqlx::query("SELECT data FROM quotes WHERE token = $1").bind(&token),
            )
            .await?;

        let result = maybe_result.ok_or_else(|| invalid_input_error())?;
        let Json(quote) = result.try_get("data")?;

        Ok(quote)
    }
}
