//! Cloud script endpoints

use super::EcsApi;
use crate::error::Result;
use ecsapi_schema::{CloudScript, CloudScriptRequest};
use reqwest::Method;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CloudScriptListResponse {
    #[allow(dead_code)]
    status: String,
    scripts: Vec<CloudScript>,
}

#[derive(Debug, Deserialize)]
struct CloudScriptResponse {
    #[allow(dead_code)]
    status: String,
    script: CloudScript,
}

impl EcsApi {
    pub async fn fetch_scripts(&self) -> Result<Vec<CloudScript>> {
        let response: CloudScriptListResponse = self.get("/scripts").await?;
        Ok(response.scripts)
    }

    pub async fn fetch_script(&self, id: u64) -> Result<CloudScript> {
        let response: CloudScriptResponse = self.get(&format!("/scripts/{}", id)).await?;
        Ok(response.script)
    }

    pub async fn create_script(
        &self,
        title: &str,
        content: &str,
        windows: bool,
    ) -> Result<CloudScript> {
        let request = CloudScriptRequest::new(title, content, windows);
        let response: CloudScriptResponse =
            self.send_json(Method::POST, "/scripts", &request).await?;
        Ok(response.script)
    }

    pub async fn update_script(
        &self,
        id: u64,
        title: &str,
        content: &str,
        windows: bool,
    ) -> Result<CloudScript> {
        let request = CloudScriptRequest::new(title, content, windows);
        let response: CloudScriptResponse = self
            .send_json(Method::PUT, &format!("/scripts/{}", id), &request)
            .await?;
        Ok(response.script)
    }

    /// Delete a script; the API answers with an empty body
    pub async fn delete_script(&self, id: u64) -> Result<()> {
        self.delete_discarding(&format!("/scripts/{}", id)).await
    }
}
