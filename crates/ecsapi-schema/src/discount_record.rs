//! Reserved-plan discount records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reserved plan attached to a server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountRecord {
    pub id: u64,
    /// Reserved plan code (e.g. "M12PeCS1")
    pub plan: String,
    pub months: u32,
    pub price: f64,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}
