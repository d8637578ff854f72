//! HTTP status classification
//!
//! Every resource call runs its response through [`check_response`] before
//! touching the body, so a failed call never reaches the schema layer.

use crate::error::{EcsError, Result};
use crate::transport::HttpResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Unauthorized,
    NotFound,
    ClientError,
    ServerError,
    /// Informational, redirect, or out-of-range codes
    Unexpected,
}

/// Classify an HTTP status code
pub fn classify(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        401 => StatusClass::Unauthorized,
        404 => StatusClass::NotFound,
        400..=499 => StatusClass::ClientError,
        500..=599 => StatusClass::ServerError,
        _ => StatusClass::Unexpected,
    }
}

/// Pass a successful response through, or turn it into the matching error
pub fn check_response(response: HttpResponse) -> Result<HttpResponse> {
    match classify(response.status) {
        StatusClass::Success => Ok(response),
        StatusClass::Unauthorized => Err(EcsError::Unauthorized(response)),
        StatusClass::NotFound => Err(EcsError::NotFound(response)),
        StatusClass::ClientError => Err(EcsError::ClientError(response)),
        StatusClass::ServerError => Err(EcsError::ServerError(response)),
        StatusClass::Unexpected => Err(EcsError::UnexpectedStatus(response)),
    }
}
