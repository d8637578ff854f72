//! Support tier records

use serde::{Deserialize, Serialize};

/// Support contract attached to a server (e.g. "global")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSupport {
    pub id: u64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}
