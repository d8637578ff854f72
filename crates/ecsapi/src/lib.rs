//! ECS API client
//!
//! Typed client for the ECS cloud server provisioning API (v2).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                     EcsApi                       │
//! │   one method per operation (servers, plans, …)   │
//! │   watch_action ──► watch (polling loop)          │
//! └───────┬──────────────────┬───────────────────────┘
//!         │                  │
//! ┌───────▼───────┐  ┌───────▼────────┐  ┌──────────────┐
//! │   Transport   │  │ status::check  │  │ ecsapi-schema│
//! │   (reqwest)   │  │  (classifier)  │  │  (records)   │
//! └───────────────┘  └────────────────┘  └──────────────┘
//! ```
//!
//! # Configuration
//!
//! Token, host, port, prefix, version and protocol come from explicit values,
//! then `ECSAPI_*` environment variables (optionally loaded from a `.env`
//! file), then defaults. The token is mandatory.
//!
//! # Example
//!
//! ```ignore
//! use ecsapi::{EcsApi, ServerCreateRequest, WatchOptions};
//!
//! let api = EcsApi::from_env()?;
//!
//! let created = api
//!     .create_server(&ServerCreateRequest::new("ECS1", "it-fr2", "almalinux-9"))
//!     .await?;
//!
//! api.watch_action_with(created.action(), &WatchOptions::default(), |action, retry| {
//!     println!("action {} is {} (retry {})", action.id, action.status, retry);
//! })
//! .await?;
//!
//! let server = api.fetch_server(&created.record.name).await?;
//! ```

pub mod client;
pub mod config;
pub mod env;
pub mod error;
pub mod status;
pub mod transport;
pub mod watch;

// Re-exports
pub use client::{EcsApi, RequestOptions};
pub use config::{ApiVersion, ClientConfig, ConfigBuilder, Protocol};
pub use env::Env;
pub use error::{EcsError, Result};
pub use status::{StatusClass, check_response, classify};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use watch::{ActionSource, WatchOptions, watch};

pub use ecsapi_schema::{
    Action, ActionId, ActionRef, ActionStatus, CloudScript, DiscountRecord, Image, Network,
    NetworkVlan, NewServer, Plan, Region, SchemaError, Server, ServerCreateRequest,
    ServerPlanSize, ServerStatus, ServerSupport, Snapshot, Spawned, SshKey, Template,
    TemplateCreateRequest, TemplateSource,
};
pub use reqwest::Method;
