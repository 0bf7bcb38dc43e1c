use crate::success_message;
use anyhow::Context;
use colored::Colorize;
use lifecycle_daemon::client::DaemonClient;

pub async fn demo(client: &DaemonClient, samples: usize) -> anyhow::Result<()> {
    client
        .send_demo_request(samples)
        .await
        .context("Failed to send a demo data request to the daemon")?;
    success_message!("Requested {} demo records.", samples);
    Ok(())
}
