//! Plan records

use crate::region::Region;
use serde::{Deserialize, Serialize};

/// Server size offered by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: u64,
    pub name: String,
    pub cpu: String,
    pub ram: String,
    pub disk: String,
    pub gpu: String,
    pub gpu_label: String,
    pub hourly_price: f64,

    /// The API spells this field "montly_price"
    #[serde(rename = "montly_price")]
    pub monthly_price: f64,

    pub windows: bool,
    pub host_type: String,
    pub available: bool,
    pub available_regions: Vec<Region>,
}

impl Plan {
    /// Whether the plan can currently be provisioned in `location`
    pub fn is_available_in(&self, location: &str) -> bool {
        self.available
            && self
                .available_regions
                .iter()
                .any(|region| region.location == location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_json(available: bool) -> String {
        format!(
            r#"{{
                "id": 1,
                "name": "eCS1",
                "cpu": "1",
                "ram": "1024",
                "disk": "20",
                "gpu": "0",
                "gpu_label": "",
                "hourly_price": 0.013,
                "montly_price": 9.95,
                "windows": false,
                "host_type": "ECS",
                "available": {available},
                "available_regions": [
                    {{"id": 1, "location": "it-fr2", "description": "Frosinone"}}
                ]
            }}"#
        )
    }

    #[test]
    fn test_plan_reads_misspelled_monthly_price() {
        let plan: Plan = serde_json::from_str(&plan_json(true)).unwrap();
        assert_eq!(plan.monthly_price, 9.95);

        let value = serde_json::to_value(&plan).unwrap();
        assert!(value.get("montly_price").is_some());
    }

    #[test]
    fn test_plan_availability() {
        let plan: Plan = serde_json::from_str(&plan_json(true)).unwrap();
        assert!(plan.is_available_in("it-fr2"));
        assert!(!plan.is_available_in("it-mi2"));

        let unavailable: Plan = serde_json::from_str(&plan_json(false)).unwrap();
        assert!(!unavailable.is_available_in("it-fr2"));
    }
}
