//! Region records

use serde::{Deserialize, Serialize};

/// Datacenter location a server can be placed in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: u64,

    /// Location code used in requests (e.g. "it-fr2")
    pub location: String,

    pub description: String,
}
