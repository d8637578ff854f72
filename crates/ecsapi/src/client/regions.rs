//! Region endpoints

use super::EcsApi;
use crate::error::Result;
use ecsapi_schema::Region;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RegionListResponse {
    #[allow(dead_code)]
    status: String,
    regions: Vec<Region>,
}

impl EcsApi {
    pub async fn fetch_regions(&self) -> Result<Vec<Region>> {
        let response: RegionListResponse = self.get("/regions").await?;
        Ok(response.regions)
    }

    /// Regions where `plan` can currently be created
    pub async fn fetch_regions_available(&self, plan: &str) -> Result<Vec<Region>> {
        let response: RegionListResponse = self
            .get_with_params(
                "/regions/available",
                vec![("plan".to_string(), plan.to_string())],
            )
            .await?;
        Ok(response.regions)
    }
}
