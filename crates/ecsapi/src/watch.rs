//! Action watching
//!
//! Polls a single action on a fixed cadence until it reaches the desired
//! status, reaches the exit status, or runs out of retries.
//!
//! ```text
//!            ┌──────────────┐
//!   ┌───────►│ fetch action │── transport/status error ──► Err (no retry used)
//!   │        └──────┬───────┘
//!   │               ▼
//!   │         observer(action, retries)
//!   │               ▼
//!   │      status == desired?  ── yes ──► Ok(action)
//!   │               ▼ no
//!   │      status == exit_on?  ── yes ──► Err(ActionExitStatus)
//!   │               ▼ no
//!   │      retries >= max?     ── yes ──► Err(ActionMaxRetriesExceeded)
//!   │               ▼ no
//!   └── sleep(poll_interval), retries += 1
//! ```

use crate::error::{EcsError, Result};
use async_trait::async_trait;
use ecsapi_schema::{Action, ActionId, ActionRef, ActionStatus};
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Anything that can fetch the current state of an action
#[async_trait]
pub trait ActionSource: Send + Sync {
    async fn fetch_action(&self, id: ActionId) -> Result<Action>;
}

/// Watch parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchOptions {
    /// Status that ends the watch successfully
    pub desired_status: ActionStatus,

    /// Status that ends the watch with [`EcsError::ActionExitStatus`]
    pub exit_on_status: ActionStatus,

    /// Pause between two fetches
    pub poll_interval: Duration,

    /// Maximum number of polls after the first; `None` polls until one of
    /// the two statuses is reached, with no time bound
    pub max_retries: Option<u32>,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            desired_status: ActionStatus::completed(),
            exit_on_status: ActionStatus::failed(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_retries: None,
        }
    }
}

impl WatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn desired_status(mut self, status: impl Into<ActionStatus>) -> Self {
        self.desired_status = status.into();
        self
    }

    pub fn exit_on_status(mut self, status: impl Into<ActionStatus>) -> Self {
        self.exit_on_status = status.into();
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.poll_interval.is_zero() {
            return Err(EcsError::InvalidConfig(
                "poll interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Poll an action until it settles
///
/// `observer` runs once per fetch, before the status is inspected, with the
/// fetched action and the number of retries used so far (0 for the first
/// fetch). The desired status is checked before the exit status, so it wins
/// when both are equal.
pub async fn watch<S, F>(
    source: &S,
    reference: impl Into<ActionRef>,
    options: &WatchOptions,
    mut observer: F,
) -> Result<Action>
where
    S: ActionSource + ?Sized,
    F: FnMut(&Action, u32),
{
    options.validate()?;

    let action_id = reference.into().id();
    let mut retries: u32 = 0;

    loop {
        let action = source.fetch_action(action_id).await?;
        observer(&action, retries);

        debug!(
            action_id,
            status = %action.status,
            retries,
            "Polled action"
        );

        if action.status == options.desired_status {
            info!(action_id, status = %action.status, retries, "Action reached desired status");
            return Ok(action);
        }

        if action.status == options.exit_on_status {
            return Err(EcsError::ActionExitStatus {
                action_id,
                status: action.status,
                retries,
            });
        }

        if let Some(max_retries) = options.max_retries
            && retries >= max_retries
        {
            return Err(EcsError::ActionMaxRetriesExceeded {
                action_id,
                status: action.status,
                retries,
            });
        }

        retries += 1;
        tokio::time::sleep(options.poll_interval).await;
    }
}
