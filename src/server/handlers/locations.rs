use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct SuggestionParams {
    query: String,
    region: String,
}

pub async fn regions(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<String>>, Error> {
    let regions = api.list_regions().await?;

    Ok(regions.into())
}

pub async fn suggestions(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<Vec<String>>, Error> {
    let suggestions = api.suggest_places(params.query, params.region).await?;

    Ok(suggestions.into())
}
