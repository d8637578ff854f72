//! Follow an existing action until it completes
//!
//! ```sh
//! ECSAPI_TOKEN=... cargo run -p ecsapi --example watch_action -- 1234
//! ```

use anyhow::{Context, Result, bail};
use ecsapi::{ActionId, EcsApi, EcsError, WatchOptions};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let Some(id) = std::env::args().nth(1) else {
        bail!("usage: watch_action <action-id>");
    };
    let id: ActionId = id.parse().context("action id must be a number")?;

    let api = EcsApi::from_env()?;

    match api
        .watch_action_with(id, &WatchOptions::default(), |action, retry| {
            println!("{} {} (retry {})", action.id, action.status, retry);
        })
        .await
    {
        Ok(action) => println!("Action {} completed", action.id),
        Err(EcsError::ActionExitStatus { status, .. }) => {
            bail!("Action {} ended with status {}", id, status)
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
