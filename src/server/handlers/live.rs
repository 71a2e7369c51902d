use axum::extract::{Extension, Json};

use crate::error::Error;
use crate::live::Snapshot;
use crate::server::DynAPI;

pub async fn snapshot(Extension(api): Extension<DynAPI>) -> Result<Json<Snapshot>, Error> {
    let snapshot = api.live_snapshot().await?;

    Ok(snapshot.into())
}
