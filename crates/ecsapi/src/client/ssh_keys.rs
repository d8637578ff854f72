//! SSH key endpoints

use super::EcsApi;
use crate::error::{EcsError, Result};
use ecsapi_schema::{SshKey, SshKeyCreateRequest};
use reqwest::Method;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SshKeyListResponse {
    #[allow(dead_code)]
    status: String,
    keys: Vec<SshKey>,
}

#[derive(Debug, Deserialize)]
struct SshKeyResponse {
    #[allow(dead_code)]
    status: String,
    key: SshKey,
}

impl EcsApi {
    pub async fn fetch_ssh_keys(&self) -> Result<Vec<SshKey>> {
        let response: SshKeyListResponse = self.get("/keys").await?;
        Ok(response.keys)
    }

    pub async fn fetch_ssh_key(&self, id: u64) -> Result<SshKey> {
        let response: SshKeyResponse = self.get(&format!("/keys/{}", id)).await?;
        Ok(response.key)
    }

    /// Register a public key under `label`
    ///
    /// The create call does not echo the key back, so the new record is
    /// looked up by label afterwards.
    pub async fn create_ssh_key(&self, label: &str, key: &str) -> Result<SshKey> {
        let request = SshKeyCreateRequest::new(label, key);
        let body = serde_json::to_value(&request)?;
        self.call(Method::POST, "/keys", Some(body), Vec::new())
            .await?;

        self.fetch_ssh_keys()
            .await?
            .into_iter()
            .find(|k| k.label == label)
            .ok_or_else(|| EcsError::MissingRecord(format!("SSH key '{}'", label)))
    }

    pub async fn delete_ssh_key(&self, id: u64) -> Result<()> {
        self.delete_discarding(&format!("/keys/{}", id)).await
    }
}
