use super::Engine;

use async_trait::async_trait;

use crate::{api::LocationAPI, error::Error, suggestions};

#[async_trait]
impl LocationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_regions(&self) -> Result<Vec<String>, Error> {
        Ok(self.regions.iter().map(|region| region.name.clone()).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn suggest_places(&self, query: String, region: String) -> Result<Vec<String>, Error> {
        Ok(suggestions::suggest(&query, &region, &self.regions))
    }
}
