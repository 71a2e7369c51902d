use axum::extract::{Extension, Json};

use crate::auth::User;
use crate::entities::Receipt;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn list(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<Receipt>>, Error> {
    let receipts = api.list_receipts(user).await?;

    Ok(receipts.into())
}
