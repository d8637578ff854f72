//! Image records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operating system image a server can be created from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: u64,
    pub name: String,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub deletion_date: Option<DateTime<Utc>>,
    pub active_flag: bool,
    pub status: String,
    pub uuid: String,
    pub description: String,
    pub notes: String,
    pub public: bool,
    pub cloud_image: bool,
    pub so_base: String,
    pub required_disk: u32,
    pub api_version: String,
    pub api_version_value: u32,
    pub version: String,
}
