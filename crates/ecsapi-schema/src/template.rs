//! Template records
//!
//! A template is a reusable image built from a running server or from one of
//! its snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: u64,
    pub name: String,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub deletion_date: Option<DateTime<Utc>>,
    pub active_flag: bool,
    pub status: String,
    pub uuid: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// What a template is built from
///
/// Exactly one source is required, so "neither" and "both" are not
/// representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateSource {
    /// Name of a server
    Server(String),
    /// Id of a snapshot
    Snapshot(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateCreateRequest {
    #[serde(flatten)]
    pub source: TemplateSource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TemplateCreateRequest {
    pub fn from_server(server: impl Into<String>) -> Self {
        Self {
            source: TemplateSource::Server(server.into()),
            notes: None,
        }
    }

    pub fn from_snapshot(snapshot: u64) -> Self {
        Self {
            source: TemplateSource::Snapshot(snapshot),
            notes: None,
        }
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateUpdateRequest {
    pub name: String,
    pub notes: String,
}
