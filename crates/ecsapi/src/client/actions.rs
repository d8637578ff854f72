//! Action endpoints and watching

use super::EcsApi;
use crate::error::Result;
use crate::watch::{self, ActionSource, WatchOptions};
use async_trait::async_trait;
use ecsapi_schema::{Action, ActionId, ActionRef};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ActionListResponse {
    #[allow(dead_code)]
    status: String,
    actions: Vec<Action>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ActionResponse {
    #[allow(dead_code)]
    status: String,
    pub(super) action: Action,
}

impl EcsApi {
    /// List actions, optionally only those targeting `resource`
    pub async fn fetch_actions(&self, resource: Option<&str>) -> Result<Vec<Action>> {
        let params = resource
            .map(|r| vec![("resource".to_string(), r.to_string())])
            .unwrap_or_default();
        let response: ActionListResponse = self.get_with_params("/actions", params).await?;
        Ok(response.actions)
    }

    pub async fn fetch_action(&self, id: ActionId) -> Result<Action> {
        let response: ActionResponse = self.get(&format!("/actions/{}", id)).await?;
        Ok(response.action)
    }

    /// Block until the action reaches `options.desired_status`
    ///
    /// See [`watch::watch`] for the exact polling rules.
    pub async fn watch_action(
        &self,
        action: impl Into<ActionRef>,
        options: &WatchOptions,
    ) -> Result<Action> {
        watch::watch(self, action, options, |_, _| {}).await
    }

    /// Like [`EcsApi::watch_action`], reporting every fetched snapshot to
    /// `observer` together with the retry count
    pub async fn watch_action_with<F>(
        &self,
        action: impl Into<ActionRef>,
        options: &WatchOptions,
        observer: F,
    ) -> Result<Action>
    where
        F: FnMut(&Action, u32),
    {
        watch::watch(self, action, options, observer).await
    }
}

#[async_trait]
impl ActionSource for EcsApi {
    async fn fetch_action(&self, id: ActionId) -> Result<Action> {
        EcsApi::fetch_action(self, id).await
    }
}
