//! SSH key records

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshKey {
    pub id: u64,
    /// Name used to reference the key from a server create request
    pub label: String,
    /// Public key material
    pub key: String,
    #[serde(default)]
    pub user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SshKeyCreateRequest {
    pub label: String,
    pub key: String,
}

impl SshKeyCreateRequest {
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
        }
    }
}
