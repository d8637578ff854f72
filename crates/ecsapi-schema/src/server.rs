//! Server records and server request bodies

use crate::discount_record::DiscountRecord;
use crate::error::{Result, SchemaError};
use crate::server_support::ServerSupport;
use crate::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const VLAN_ID_MIN: u16 = 1;
const VLAN_ID_MAX: u16 = 4094;

/// Hardware shape of the plan a server runs on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerPlanSize {
    pub core: String,
    pub ram: String,
    pub disk: String,
    pub gpu: String,
    #[serde(default)]
    pub gpu_label: Option<String>,
    pub host_type: String,
}

/// A provisioned server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// Server name, assigned by the provider (e.g. "ec200410")
    pub name: String,
    pub ipv4: String,
    pub ipv6: String,
    #[serde(default)]
    pub group: Option<String>,
    pub plan: String,
    pub plan_size: ServerPlanSize,
    pub reserved_plans: Vec<DiscountRecord>,
    #[serde(default)]
    pub last_restored_snapshot: Option<Snapshot>,
    pub is_reserved: bool,
    /// Either a timestamp or a free-form marker, depending on the plan
    pub reserved_until: String,
    #[serde(default)]
    pub support: Option<ServerSupport>,
    pub location: String,
    pub location_label: String,
    pub notes: String,
    pub so: String,
    pub so_label: String,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub deletion_date: Option<DateTime<Utc>>,
    pub active_flag: bool,
    pub status: String,
    pub progress: u32,
    pub api_version: String,
    pub api_version_value: u32,
    pub user: String,
    #[serde(default)]
    pub virttype: Option<String>,
}

/// Lightweight status view of a server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub progress: Option<u32>,
}

/// The partial server record returned right after creation
///
/// Addresses may not be assigned yet; fetch the server once its creation
/// action completes to get the full [`Server`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewServer {
    pub name: String,
    #[serde(default)]
    pub ipv4: Option<String>,
    #[serde(default)]
    pub ipv6: Option<String>,
}

/// VLAN attached to a private network
///
/// Only built through [`NetworkVlan::single`], [`NetworkVlan::pvid`] and
/// [`NetworkVlan::range`], so every value holds valid VLAN ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NetworkVlan(VlanSpec);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
enum VlanSpec {
    Single {
        vlan_id: u16,
        #[serde(skip_serializing_if = "Option::is_none")]
        pvid: Option<bool>,
    },
    /// Serialized as "<from>-<to>"
    Range { vlans: String },
}

impl NetworkVlan {
    pub fn single(vlan_id: u16) -> Result<Self> {
        check_vlan_id(vlan_id)?;
        Ok(Self(VlanSpec::Single {
            vlan_id,
            pvid: None,
        }))
    }

    /// A single VLAN used as the port VLAN id
    pub fn pvid(vlan_id: u16) -> Result<Self> {
        check_vlan_id(vlan_id)?;
        Ok(Self(VlanSpec::Single {
            vlan_id,
            pvid: Some(true),
        }))
    }

    /// Parse a range such as "200-500"
    pub fn range(vlans: &str) -> Result<Self> {
        let invalid = || SchemaError::InvalidVlanRange(vlans.to_string());

        let (from, to) = vlans.split_once('-').ok_or_else(invalid)?;
        let from = parse_vlan_bound(from).ok_or_else(invalid)?;
        let to = parse_vlan_bound(to).ok_or_else(invalid)?;
        if from > to {
            return Err(invalid());
        }
        check_vlan_id(from)?;
        check_vlan_id(to)?;

        Ok(Self(VlanSpec::Range {
            vlans: format!("{}-{}", from, to),
        }))
    }

    /// VLAN id of a single VLAN; `None` for a range
    pub fn vlan_id(&self) -> Option<u16> {
        match self.0 {
            VlanSpec::Single { vlan_id, .. } => Some(vlan_id),
            VlanSpec::Range { .. } => None,
        }
    }
}

fn parse_vlan_bound(bound: &str) -> Option<u16> {
    if bound.is_empty() || !bound.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    bound.parse().ok()
}

fn check_vlan_id(vlan_id: u16) -> Result<()> {
    if (VLAN_ID_MIN..=VLAN_ID_MAX).contains(&vlan_id) {
        Ok(())
    } else {
        Err(SchemaError::InvalidVlanId(vlan_id))
    }
}

/// Private network to attach at creation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    pub name: String,
    pub vlans: Vec<NetworkVlan>,
}

impl Network {
    pub fn new(name: impl Into<String>, vlans: Vec<NetworkVlan>) -> Self {
        Self {
            name: name.into(),
            vlans,
        }
    }
}

/// Body of `POST /servers`
///
/// Absent optional fields are omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerCreateRequest {
    pub plan: String,
    pub location: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Id of a cloud script to run at first boot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_customize: Option<u64>,
    /// Environment passed to the cloud script (e.g. `AUTHOR="alex"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_customize_env: Option<String>,
    /// Label of a registered SSH key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<Network>>,
}

impl ServerCreateRequest {
    pub fn new(
        plan: impl Into<String>,
        location: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            plan: plan.into(),
            location: location.into(),
            image: image.into(),
            notes: None,
            password: None,
            reserved_plan: None,
            support: None,
            group: None,
            user_customize: None,
            user_customize_env: None,
            ssh_key: None,
            networks: None,
        }
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn reserved_plan(mut self, reserved_plan: impl Into<String>) -> Self {
        self.reserved_plan = Some(reserved_plan.into());
        self
    }

    pub fn support(mut self, support: impl Into<String>) -> Self {
        self.support = Some(support.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn user_customize(mut self, script_id: u64, env: Option<String>) -> Self {
        self.user_customize = Some(script_id);
        self.user_customize_env = env;
        self
    }

    pub fn ssh_key(mut self, label: impl Into<String>) -> Self {
        self.ssh_key = Some(label.into());
        self
    }

    pub fn network(mut self, network: Network) -> Self {
        self.networks.get_or_insert_with(Vec::new).push(network);
        self
    }
}

/// Body of `PUT /servers/{name}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServerUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Body of `POST /servers/{name}/actions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerActionRequest {
    PowerOn,
    PowerOff,
    Rollback { snapshot: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vlan_range_valid() {
        let vlan = NetworkVlan::range("200-500").unwrap();
        assert_eq!(serde_json::to_value(&vlan).unwrap(), json!({"vlans": "200-500"}));
    }

    #[test]
    fn test_vlan_range_rejects_garbage() {
        for vlans in ["abcde", "200", "200-", "-500", "500-200", "2 00-500", "+1-5", "0-10"] {
            assert!(NetworkVlan::range(vlans).is_err(), "accepted {:?}", vlans);
        }
    }

    #[test]
    fn test_vlan_id_bounds() {
        assert!(NetworkVlan::single(0).is_err());
        assert!(NetworkVlan::single(4095).is_err());
        let vlan = NetworkVlan::single(100).unwrap();
        assert_eq!(vlan.vlan_id(), Some(100));
    }

    #[test]
    fn test_vlan_range_normalizes_bounds() {
        let vlan = NetworkVlan::range("0200-0500").unwrap();
        assert_eq!(vlan.vlan_id(), None);
        assert_eq!(serde_json::to_value(&vlan).unwrap(), json!({"vlans": "200-500"}));
    }

    #[test]
    fn test_pvid_serialization() {
        let vlan = NetworkVlan::pvid(100).unwrap();
        assert_eq!(
            serde_json::to_value(&vlan).unwrap(),
            json!({"vlan_id": 100, "pvid": true})
        );

        let vlan = NetworkVlan::single(100).unwrap();
        assert_eq!(serde_json::to_value(&vlan).unwrap(), json!({"vlan_id": 100}));
    }

    #[test]
    fn test_create_request_omits_absent_fields() {
        let request = ServerCreateRequest::new("ECS1", "it-fr2", "almalinux-9").notes("test");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "plan": "ECS1",
                "location": "it-fr2",
                "image": "almalinux-9",
                "notes": "test"
            })
        );
    }

    #[test]
    fn test_create_request_full() {
        let network = Network::new(
            "net000001",
            vec![
                NetworkVlan::pvid(100).unwrap(),
                NetworkVlan::range("200-500").unwrap(),
            ],
        );
        let request = ServerCreateRequest::new("eCS1", "it-fr2", "almalinux-9")
            .password("fOo123456789bAr")
            .reserved_plan("M12PeCS1")
            .support("global")
            .group("eg12345")
            .user_customize(12, Some(r#"AUTHOR="alex""#.to_string()))
            .ssh_key("my-secret-key")
            .network(network);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["user_customize"], 12);
        assert_eq!(value["user_customize_env"], r#"AUTHOR="alex""#);
        assert_eq!(
            value["networks"],
            json!([{
                "name": "net000001",
                "vlans": [{"vlan_id": 100, "pvid": true}, {"vlans": "200-500"}]
            }])
        );
        assert!(value.get("notes").is_none());
    }

    #[test]
    fn test_server_action_request() {
        assert_eq!(
            serde_json::to_value(ServerActionRequest::PowerOn).unwrap(),
            json!({"type": "power_on"})
        );
        assert_eq!(
            serde_json::to_value(ServerActionRequest::Rollback { snapshot: 1234 }).unwrap(),
            json!({"type": "rollback", "snapshot": 1234})
        );
    }

    #[test]
    fn test_update_request_omits_absent_fields() {
        let request = ServerUpdateRequest {
            notes: Some("david martinez".to_string()),
            group: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"notes": "david martinez"})
        );
    }
}
