use crate::info_message;
use crate::logging::setup_logging;
use anyhow::Context;
use colored::Colorize;
use lifecycle_common::config::Config;
use lifecycle_daemon::server::DaemonServer;
use lifecycle_store::StoreEnum;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    setup_logging(&config, true)?;

    let store = StoreEnum::from_config(&config).context("Failed to set up the document store")?;
    let server = DaemonServer::bind(config, Arc::new(store)).await?;
    let addr = server.local_addr()?;
    info_message!("Lifecycle daemon listening on http://{}", addr);

    tokio::spawn(shutdown_on_signal(
        tokio::signal::ctrl_c(),
        server.cancellation_token(),
    ));

    server.run().await
}

/// Cancels `token` once `signal` fires. If the signal handler cannot be
/// installed the daemon keeps serving.
async fn shutdown_on_signal<F>(signal: F, token: CancellationToken)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            info!("received Ctrl-C, shutting down");
            token.cancel();
        }
        Err(e) => warn!("cannot listen for Ctrl-C, keep serving: {}", e),
    }
}
