//! Plan endpoints

use super::EcsApi;
use crate::error::Result;
use ecsapi_schema::Plan;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PlanListResponse {
    #[allow(dead_code)]
    status: String,
    plans: Vec<Plan>,
}

impl EcsApi {
    pub async fn fetch_plans(&self) -> Result<Vec<Plan>> {
        let response: PlanListResponse = self.get("/plans").await?;
        Ok(response.plans)
    }

    /// Plans with their currently available regions
    pub async fn fetch_plans_available(&self) -> Result<Vec<Plan>> {
        let response: PlanListResponse = self.get("/plans/available").await?;
        Ok(response.plans)
    }

    /// Whether `plan` can be provisioned in `location` right now
    ///
    /// Plan names are matched exactly.
    pub async fn can_create_plan(&self, plan: &str, location: &str) -> Result<bool> {
        let plans = self.fetch_plans_available().await?;
        Ok(plans
            .iter()
            .any(|p| p.name == plan && p.is_available_in(location)))
    }
}
