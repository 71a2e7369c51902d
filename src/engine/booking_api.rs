use super::helpers::{fetch_booking_for_update, update_booking};
use super::Engine;

use async_trait::async_trait;
use sqlx::{types::Json, Executor, Row};
use uuid::Uuid;

use crate::{
    api::{BookingAPI, QuoteAPI},
    auth::{Platform, User},
    entities::{Booking, Receipt},
    error::{invalid_input_error, invalid_invocation_error, payment_not_confirmed_error, Error},
    external::paystack,
};

#[async_trait]
impl BookingAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_booking(
        &self,
        user: User,
        quote_token: Uuid,
        region: String,
        pickup: String,
        destination: String,
    ) -> Result<Booking, Error> {
        self.authorize(user.clone(), "create_booking", Platform::default())?;

        if pickup.is_empty() || destination.is_empty() {
            return Err(invalid_input_error());
        }

        if !self.regions.iter().any(|r| r.name == region) {
            return Err(invalid_input_error());
        }

        let quote = self.find_quote(user.clone(), quote_token).await?;
        let booking = Booking::new(user.id, quote, region, pickup, destination);

        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO bookings (id, passenger_id, driver_id, status, created_at, data) VALUES ($1, $2, $3, $4, $5, $6)")
                .bind(&booking.id)
                .bind(&booking.passenger_id)
                .bind(&booking.driver_id)
                .bind(booking.status.name())
                .bind(&booking.created_at)
                .bind(Json(&booking)),
        )
        .await?;

        Ok(booking)
    }

    #[tracing::instrument(skip(self))]
    async fn find_booking(&self, user: User, id: Uuid) -> Result<Booking, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM bookings WHERE id = $1").bind(&id))
            .await?;

        let result = maybe_result.ok_or_else(|| invalid_input_error())?;
        let Json(booking): Json<Booking> = result.try_get("data")?;

        self.authorize(user, "read", booking.clone())?;

        Ok(booking)
    }

    #[tracing::instrument(skip(self))]
    async fn pay_booking(&self, user: User, id: Uuid, reference: String) -> Result<Booking, Error> {
        let mut conn = self.pool.acquire().await?;

        // fetch booking without lock
        let Json(booking): Json<Booking> = conn
            .fetch_optional(sqlx::query("SELECT data FROM bookings WHERE id = $1").bind(&id))
            .await?
            .ok_or_else(|| invalid_input_error())?
            .try_get("data")?;

        // it's safe to perform the authorization check without locking on the booking
        self.authorize(user.clone(), "pay", booking.clone())?;

        if !booking.is_awaiting_payment() {
            tracing::info!("booking is not awaiting payment, returning early...");
            return Err(invalid_invocation_error());
        }

        // the provider is consulted before the row lock is taken
        let transaction = paystack::verify_transaction(reference.clone()).await?;

        if !transaction.is_successful() || transaction.amount < booking.breakdown.total {
            tracing::info!("transaction does not cover the booking total");
            return Err(payment_not_confirmed_error());
        }

        let mut tx = self.pool.begin().await?;

        let mut booking = fetch_booking_for_update(&mut tx, &id).await?;
        booking.mark_paid(reference)?;
        update_booking(&mut tx, &booking).await?;

        tx.commit().await?;

        Ok(booking)
    }

    #[tracing::instrument(skip(self))]
    async fn cancel_booking(&self, user: User, id: Uuid) -> Result<Booking, Error> {
        let mut tx = self.pool.begin().await?;

        let mut booking = fetch_booking_for_update(&mut tx, &id).await?;

        self.authorize(user, "cancel", booking.clone())?;

        booking.cancel()?;
        update_booking(&mut tx, &booking).await?;

        tx.commit().await?;

        Ok(booking)
    }

    #[tracing::instrument(skip(self))]
    async fn complete_booking(&self, user: User, id: Uuid) -> Result<Booking, Error> {
        let mut tx = self.pool.begin().await?;

        let mut booking = fetch_booking_for_update(&mut tx, &id).await?;

        self.authorize(user, "complete", booking.clone())?;

        booking.complete()?;
        update_booking(&mut tx, &booking).await?;

        tx.commit().await?;

        Ok(booking)
    }

    #[tracing::instrument(skip(self))]
    async fn list_receipts(&self, user: User) -> Result<Vec<Receipt>, Error> {
        let mut conn = self.pool.acquire().await?;

        let results = conn
            .fetch_all(
                sqlx::query(
                    "SELECT data FROM bookings WHERE passenger_id = $1 AND status IN ('paid', 'completed') ORDER BY created_at DESC",
                )
                .bind(&user.id),
            )
            .await?;

        let mut receipts = vec![];

        for result in results {
            let Json(booking): Json<Booking> = result.try_get("data")?;

            if let Some(receipt) = Receipt::from_booking(&booking) {
                receipts.push(receipt);
            }
        }

        Ok(receipts)
    }

    #[tracing::instrument(skip(self))]
    async fn list_driver_bookings(&self, user: User) -> Result<Vec<Booking>, Error> {
        self.authorize(user.clone(), "view_driver_dashboard", Platform::default())?;

        let mut conn = self.pool.acquire().await?;

        let results = conn
            .fetch_all(
                sqlx::query(
                    "SELECT data FROM bookings WHERE driver_id = $1 AND status = 'paid' ORDER BY created_at ASC",
                )
                .bind(&user.id),
            )
            .await?;

        let mut bookings = vec![];

        for result in results {
            let Json(booking): Json<Booking> = result.try_get("data")?;
            bookings.push(booking);
        }

        Ok(bookings)
    }
}
