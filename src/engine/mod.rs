mod admin_api;
mod booking_api;
mod helpers;
mod live_api;
mod location_api;
mod quote_api;
mod vehicle_api;

use oso::Oso;
use sqlx::{Executor, Pool, Postgres};

use crate::{
    api::API,
    auth::authorizor,
    catalog,
    catalog::Region,
    entities::Vehicle,
    error::{unauthorized_error, Error},
};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
    authorizor: Oso,
    vehicles: Vec<Vehicle>,
    regions: Vec<Region>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>) -> Result<Self, Error> {
        // TODO: move this to migrations

        // quote service (KV store)
        pool.execute("CREATE TABLE IF NOT EXISTS quotes (token UUID PRIMARY KEY, data JSONB NOT NULL)")
            .await?;

        // booking service
        pool.execute("CREATE TABLE IF NOT EXISTS bookings (id UUID PRIMARY KEY, passenger_id UUID NOT NULL, driver_id UUID, status VARCHAR NOT NULL, created_at TIMESTAMPTZ NOT NULL, data JSONB NOT NULL)")
            .await?;

        Ok(Self {
            pool,
            authorizor: authorizor::new(),
            vehicles: catalog::vehicles(),
            regions: catalog::regions(),
        })
    }
}

impl Engine {
    pub fn authorize<Actor, Action, Resource>(
        &self,
        actor: Actor,
        action: Action,
        resource: Resource,
    ) -> Result<(), Error>
    where
        Actor: oso::ToPolar,
        Action: oso::ToPolar,
        Resource: oso::ToPolar,
    {
        if self.authorizor.is_allowed(actor, action, resource)? {
            return Ok(());
        }

        Err(unauthorized_error())
    }
}

impl API for Engine {}
