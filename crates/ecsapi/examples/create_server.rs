//! Create a server, wait for provisioning and print the result
//!
//! ```sh
//! ECSAPI_TOKEN=... cargo run -p ecsapi --example create_server -- eCS1 it-fr2 almalinux-9
//! ```

use anyhow::{Context, Result};
use ecsapi::{EcsApi, ServerCreateRequest, WatchOptions};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let plan = args.next().unwrap_or_else(|| "eCS1".to_string());
    let location = args.next().unwrap_or_else(|| "it-fr2".to_string());
    let image = args.next().unwrap_or_else(|| "almalinux-9".to_string());

    let api = EcsApi::from_env().context("ECSAPI_TOKEN must be set")?;

    let request = ServerCreateRequest::new(&plan, &location, &image).notes("created by ecsapi");
    let created = api
        .create_server_checked(&request)
        .await
        .with_context(|| format!("failed to create {} in {}", plan, location))?;

    println!(
        "Server {} requested (action {})",
        created.record.name, created.action_id
    );

    let options = WatchOptions::new()
        .poll_interval(Duration::from_secs(5))
        .max_retries(120);
    api.watch_action_with(created.action(), &options, |action, retry| {
        let progress = action.progress.unwrap_or(0);
        println!("  [{:>3}] {} {}%", retry, action.status, progress);
    })
    .await?;

    let server = api.fetch_server(&created.record.name).await?;
    println!(
        "Server {} is {} ({})",
        server.name,
        server.status,
        server.ipv4
    );

    Ok(())
}
