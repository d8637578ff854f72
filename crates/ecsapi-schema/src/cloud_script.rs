//! Cloud script records
//!
//! Cloud scripts are user-customisation scripts run at first boot. A server
//! create request references one by id (`user_customize`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudScript {
    pub id: u64,
    /// Owner; `None` for provider-supplied public scripts
    pub user: Option<String>,
    pub title: String,
    pub content: String,
    pub windows: bool,
    pub public: bool,
    pub category: String,
}

/// Body of a cloud script create/update call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloudScriptRequest {
    pub title: String,
    pub content: String,
    pub windows: bool,
}

impl CloudScriptRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>, windows: bool) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            windows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_script_has_no_user() {
        let script: CloudScript = serde_json::from_str(
            r#"{
                "id": 15,
                "user": null,
                "title": "docker",
                "content": "curl -fsSL https://get.docker.com | sh",
                "windows": false,
                "public": true,
                "category": "containers"
            }"#,
        )
        .unwrap();

        assert!(script.user.is_none());
        assert!(script.public);
    }
}
