//! ECS API client error types

use crate::transport::HttpResponse;
use ecsapi_schema::{ActionId, ActionStatus, SchemaError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcsError {
    #[error("User Unauthorized: {}", .0.body)]
    Unauthorized(HttpResponse),

    #[error("Not Found: {}", .0.body)]
    NotFound(HttpResponse),

    #[error("Client Error ({}): {}", .0.status, .0.body)]
    ClientError(HttpResponse),

    #[error("Server Error ({}): {}", .0.status, .0.body)]
    ServerError(HttpResponse),

    #[error("Unexpected HTTP status {}: {}", .0.status, .0.body)]
    UnexpectedStatus(HttpResponse),

    #[error("Action {action_id} reached exit status '{status}' after {retries} retries")]
    ActionExitStatus {
        action_id: ActionId,
        status: ActionStatus,
        retries: u32,
    },

    #[error("Action {action_id} still '{status}' after {retries} retries")]
    ActionMaxRetriesExceeded {
        action_id: ActionId,
        status: ActionStatus,
        retries: u32,
    },

    #[error("Token is required: pass one explicitly or set ECSAPI_TOKEN")]
    MissingToken,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Plan {plan} cannot be created in {location}")]
    PlanUnavailable { plan: String, location: String },

    #[error("Record not found after creation: {0}")]
    MissingRecord(String),

    #[error("Invalid request: {0}")]
    Schema(#[from] SchemaError),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EcsError {
    /// Raw HTTP response for status-driven failures
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            EcsError::Unauthorized(response)
            | EcsError::NotFound(response)
            | EcsError::ClientError(response)
            | EcsError::ServerError(response)
            | EcsError::UnexpectedStatus(response) => Some(response),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EcsError>;
