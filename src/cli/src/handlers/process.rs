use crate::commands::{IdentityArgs, StopArgs};
use crate::success_message;
use anyhow::Context;
use colored::Colorize;
use lifecycle_common::{Fingerprint, ProcessIdentity};
use lifecycle_daemon::client::DaemonClient;

pub async fn start(client: &DaemonClient, args: IdentityArgs) -> anyhow::Result<()> {
    let process_id = client
        .send_start_request(&ProcessIdentity::from(args))
        .await
        .context("Failed to send a start request to the daemon")?;
    println!("{}", process_id);
    Ok(())
}

pub async fn stop(client: &DaemonClient, args: StopArgs) -> anyhow::Result<()> {
    match args.id {
        Some(id) => {
            let process_id: Fingerprint = id.parse()?;
            client
                .send_stop_id_request(&process_id)
                .await
                .context("Failed to send a stop request to the daemon")?;
            success_message!("Process {} stopped.", process_id);
        }
        None => {
            let identity = ProcessIdentity::from(args.identity);
            client
                .send_stop_request(&identity)
                .await
                .context("Failed to send a stop request to the daemon")?;
            success_message!("Process {} stopped.", identity.fingerprint());
        }
    }
    Ok(())
}

pub async fn get(client: &DaemonClient, process_id: &str) -> anyhow::Result<()> {
    let process_id: Fingerprint = process_id.parse()?;
    let record = client
        .send_process_request(&process_id)
        .await
        .context("Failed to fetch the process record")?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
