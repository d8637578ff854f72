//! Snapshot records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of a server disk, usable for rollback or templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: u64,
    pub name: String,
    /// Name of the server the snapshot was taken from
    pub server: String,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub deletion_date: Option<DateTime<Utc>>,
    pub active_flag: bool,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}
