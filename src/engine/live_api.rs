use super::Engine;

use async_trait::async_trait;

use crate::{api::LiveAPI, error::Error, live};

#[async_trait]
impl LiveAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn live_snapshot(&self) -> Result<live::Snapshot, Error> {
        Ok(live::sample())
    }
}
