//! ECS API schema
//!
//! Typed records returned by the ECS provisioning API and the request bodies
//! sent to it. Every record derives `Deserialize` with its required fields
//! enforced by serde, so a response that does not satisfy its schema fails to
//! parse instead of producing a partially filled value.
//!
//! # Records
//!
//! - [`Server`], [`ServerStatus`], [`NewServer`]
//! - [`Action`] and its opaque [`ActionStatus`]
//! - [`Plan`], [`Region`], [`Image`], [`Template`], [`CloudScript`], [`SshKey`]
//! - [`Snapshot`], [`DiscountRecord`], [`ServerSupport`]
//!
//! # Requests
//!
//! - [`ServerCreateRequest`] with [`Network`] / [`NetworkVlan`]
//! - [`ServerUpdateRequest`], [`ServerActionRequest`]
//! - [`TemplateCreateRequest`], [`TemplateUpdateRequest`]
//! - [`CloudScriptRequest`], [`SshKeyCreateRequest`]

pub mod action;
pub mod cloud_script;
pub mod discount_record;
pub mod error;
pub mod image;
pub mod plan;
pub mod region;
pub mod server;
pub mod server_support;
pub mod snapshot;
pub mod ssh_key;
pub mod template;

// Re-exports
pub use action::{Action, ActionId, ActionRef, ActionStatus, Spawned};
pub use cloud_script::{CloudScript, CloudScriptRequest};
pub use discount_record::DiscountRecord;
pub use error::{Result, SchemaError};
pub use image::Image;
pub use plan::Plan;
pub use region::Region;
pub use server::{
    Network, NetworkVlan, NewServer, Server, ServerActionRequest, ServerCreateRequest,
    ServerPlanSize, ServerStatus, ServerUpdateRequest,
};
pub use server_support::ServerSupport;
pub use snapshot::Snapshot;
pub use ssh_key::{SshKey, SshKeyCreateRequest};
pub use template::{Template, TemplateCreateRequest, TemplateSource, TemplateUpdateRequest};
