//! Action records
//!
//! Every mutating call (create, delete, power on/off, rollback, ...) spawns a
//! server-side action. The client never mutates an action; it only observes
//! fresh snapshots of it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a remote action
pub type ActionId = u64;

/// Status string reported by the API
///
/// Kept as an opaque string rather than a closed enum: the API may introduce
/// new statuses at any time. Comparison is exact, case-sensitive equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionStatus(String);

impl ActionStatus {
    pub const WAITING: &'static str = "waiting";
    pub const RUNNING: &'static str = "running";
    pub const COMPLETED: &'static str = "completed";
    pub const FAILED: &'static str = "failed";

    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn completed() -> Self {
        Self::new(Self::COMPLETED)
    }

    pub fn failed() -> Self {
        Self::new(Self::FAILED)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActionStatus {
    fn from(status: &str) -> Self {
        Self::new(status)
    }
}

impl From<String> for ActionStatus {
    fn from(status: String) -> Self {
        Self(status)
    }
}

impl PartialEq<str> for ActionStatus {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ActionStatus {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Snapshot of a remote action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: ActionId,

    pub status: ActionStatus,

    /// Identifier of the targeted resource (e.g. a server name)
    #[serde(default)]
    pub resource: Option<String>,

    /// Kind of the targeted resource (e.g. "ECS")
    #[serde(default)]
    pub resource_type: Option<String>,

    /// Operation performed (e.g. "create", "delete", "power_on")
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub user: Option<String>,

    /// Completion percentage, when the API reports one
    #[serde(default)]
    pub progress: Option<u32>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Reference to an action to watch
///
/// A `ByRecord` reference only contributes its id; its status is stale by
/// definition and is never consulted.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRef {
    ById(ActionId),
    ByRecord(Action),
}

impl ActionRef {
    pub fn id(&self) -> ActionId {
        match self {
            ActionRef::ById(id) => *id,
            ActionRef::ByRecord(action) => action.id,
        }
    }
}

impl From<ActionId> for ActionRef {
    fn from(id: ActionId) -> Self {
        ActionRef::ById(id)
    }
}

impl From<Action> for ActionRef {
    fn from(action: Action) -> Self {
        ActionRef::ByRecord(action)
    }
}

impl From<&Action> for ActionRef {
    fn from(action: &Action) -> Self {
        ActionRef::ById(action.id)
    }
}

/// A newly created record together with the action that provisions it
#[derive(Debug, Clone, PartialEq)]
pub struct Spawned<T> {
    pub record: T,
    pub action_id: ActionId,
}

impl<T> Spawned<T> {
    pub fn action(&self) -> ActionRef {
        ActionRef::ById(self.action_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_deserialize_minimal() {
        let action: Action =
            serde_json::from_str(r#"{"id": 1234, "status": "running"}"#).unwrap();

        assert_eq!(action.id, 1234);
        assert_eq!(action.status, "running");
        assert!(action.resource.is_none());
        assert!(action.completed_at.is_none());
    }

    #[test]
    fn test_action_deserialize_full() {
        let action: Action = serde_json::from_str(
            r#"{
                "id": 42,
                "status": "completed",
                "user": "admin",
                "created_at": "2024-03-01T10:00:00Z",
                "started_at": "2024-03-01T10:00:05Z",
                "completed_at": "2024-03-01T10:02:00Z",
                "resource": "ec200410",
                "resource_type": "ECS",
                "type": "create",
                "progress": 100
            }"#,
        )
        .unwrap();

        assert_eq!(action.status, ActionStatus::completed());
        assert_eq!(action.kind.as_deref(), Some("create"));
        assert_eq!(action.progress, Some(100));
        assert!(action.completed_at.is_some());
    }

    #[test]
    fn test_action_requires_status() {
        let result = serde_json::from_str::<Action>(r#"{"id": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_status_is_case_sensitive() {
        let status = ActionStatus::new("Completed");
        assert_ne!(status, ActionStatus::completed());
        assert_eq!(status.to_string(), "Completed");
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let action: Action =
            serde_json::from_str(r#"{"id": 7, "status": "migrating"}"#).unwrap();
        assert_eq!(action.status.as_str(), "migrating");
    }

    #[test]
    fn test_action_ref_resolves_id() {
        let action: Action =
            serde_json::from_str(r#"{"id": 99, "status": "failed"}"#).unwrap();

        assert_eq!(ActionRef::from(5u64).id(), 5);
        assert_eq!(ActionRef::from(&action).id(), 99);
        assert_eq!(ActionRef::from(action).id(), 99);
    }
}
