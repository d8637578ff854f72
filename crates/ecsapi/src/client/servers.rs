//! Server endpoints

use super::EcsApi;
use super::actions::ActionResponse;
use crate::error::{EcsError, Result};
use ecsapi_schema::{
    Action, ActionId, NewServer, Server, ServerActionRequest, ServerCreateRequest, ServerStatus,
    ServerUpdateRequest, Spawned,
};
use reqwest::Method;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ServerListResponse {
    #[allow(dead_code)]
    status: String,
    #[allow(dead_code)]
    count: u64,
    server: Vec<Server>,
}

#[derive(Debug, Deserialize)]
struct ServerResponse {
    #[allow(dead_code)]
    status: String,
    server: Server,
}

#[derive(Debug, Deserialize)]
struct ServerStatusResponse {
    #[allow(dead_code)]
    status: String,
    server: ServerStatus,
}

#[derive(Debug, Deserialize)]
struct ServerCreateResponse {
    #[allow(dead_code)]
    status: String,
    action_id: ActionId,
    server: NewServer,
}

impl EcsApi {
    /// List every server of the account
    pub async fn fetch_servers(&self) -> Result<Vec<Server>> {
        let response: ServerListResponse = self.get("/servers").await?;
        Ok(response.server)
    }

    pub async fn fetch_server(&self, name: &str) -> Result<Server> {
        let response: ServerResponse = self.get(&format!("/servers/{}", name)).await?;
        Ok(response.server)
    }

    pub async fn fetch_server_status(&self, name: &str) -> Result<ServerStatus> {
        let response: ServerStatusResponse =
            self.get(&format!("/servers/{}/status", name)).await?;
        Ok(response.server)
    }

    /// Create a server
    ///
    /// Returns the partial record and the id of the provisioning action;
    /// watch the action before relying on the server being reachable.
    pub async fn create_server(&self, request: &ServerCreateRequest) -> Result<Spawned<NewServer>> {
        let response: ServerCreateResponse =
            self.send_json(Method::POST, "/servers", request).await?;
        Ok(Spawned {
            record: response.server,
            action_id: response.action_id,
        })
    }

    /// Create a server after checking its plan is available in its location
    pub async fn create_server_checked(
        &self,
        request: &ServerCreateRequest,
    ) -> Result<Spawned<NewServer>> {
        if !self.can_create_plan(&request.plan, &request.location).await? {
            return Err(EcsError::PlanUnavailable {
                plan: request.plan.clone(),
                location: request.location.clone(),
            });
        }
        self.create_server(request).await
    }

    /// Update notes and/or group, then return the refreshed server
    pub async fn update_server(
        &self,
        name: &str,
        notes: Option<&str>,
        group: Option<&str>,
    ) -> Result<Server> {
        let request = ServerUpdateRequest {
            notes: notes.map(str::to_string),
            group: group.map(str::to_string),
        };
        let body = serde_json::to_value(&request)?;
        self.call(Method::PUT, &format!("/servers/{}", name), Some(body), Vec::new())
            .await?;
        self.fetch_server(name).await
    }

    pub async fn delete_server(&self, name: &str) -> Result<Action> {
        let response: ActionResponse = self.delete(&format!("/servers/{}", name)).await?;
        Ok(response.action)
    }

    pub async fn turn_on_server(&self, name: &str) -> Result<Action> {
        self.server_action(name, ServerActionRequest::PowerOn).await
    }

    pub async fn turn_off_server(&self, name: &str) -> Result<Action> {
        self.server_action(name, ServerActionRequest::PowerOff).await
    }

    /// Restore a server to one of its snapshots
    pub async fn rollback_server(&self, name: &str, snapshot: u64) -> Result<Action> {
        self.server_action(name, ServerActionRequest::Rollback { snapshot })
            .await
    }

    async fn server_action(&self, name: &str, request: ServerActionRequest) -> Result<Action> {
        let response: ActionResponse = self
            .send_json(Method::POST, &format!("/servers/{}/actions", name), &request)
            .await?;
        Ok(response.action)
    }
}
