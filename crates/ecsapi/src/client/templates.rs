//! Template endpoints

use super::EcsApi;
use super::actions::ActionResponse;
use crate::error::Result;
use ecsapi_schema::{
    Action, ActionId, Spawned, Template, TemplateCreateRequest, TemplateUpdateRequest,
};
use reqwest::Method;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TemplateListResponse {
    #[allow(dead_code)]
    status: String,
    templates: Vec<Template>,
}

#[derive(Debug, Deserialize)]
struct TemplateResponse {
    #[allow(dead_code)]
    status: String,
    template: Template,
}

#[derive(Debug, Deserialize)]
struct TemplateCreateResponse {
    #[allow(dead_code)]
    status: String,
    action_id: ActionId,
    template: Template,
}

impl EcsApi {
    pub async fn fetch_templates(&self) -> Result<Vec<Template>> {
        let response: TemplateListResponse = self.get("/templates").await?;
        Ok(response.templates)
    }

    pub async fn fetch_template(&self, id: u64) -> Result<Template> {
        let response: TemplateResponse = self.get(&format!("/templates/{}", id)).await?;
        Ok(response.template)
    }

    pub async fn create_template(
        &self,
        request: &TemplateCreateRequest,
    ) -> Result<Spawned<Template>> {
        let response: TemplateCreateResponse =
            self.send_json(Method::POST, "/templates", request).await?;
        Ok(Spawned {
            record: response.template,
            action_id: response.action_id,
        })
    }

    pub async fn update_template(&self, id: u64, name: &str, notes: &str) -> Result<Template> {
        let request = TemplateUpdateRequest {
            name: name.to_string(),
            notes: notes.to_string(),
        };
        let response: TemplateResponse = self
            .send_json(Method::PUT, &format!("/templates/{}", id), &request)
            .await?;
        Ok(response.template)
    }

    pub async fn delete_template(&self, id: u64) -> Result<Action> {
        let response: ActionResponse = self.delete(&format!("/templates/{}", id)).await?;
        Ok(response.action)
    }
}
