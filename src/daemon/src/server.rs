use crate::app::get_app;
use crate::state::DaemonState;
use anyhow::Context;
use lifecycle_common::config::Config;
use lifecycle_store::{DocumentStore, StoreEnum};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct DaemonServer {
    state: DaemonState,
    listener: TcpListener,
    cancellation_token: CancellationToken,
}

impl DaemonServer {
    /// Binds `config.server`; port 0 lets the OS pick one.
    pub async fn bind(config: Config, store: Arc<StoreEnum>) -> anyhow::Result<Self> {
        let addr: SocketAddr = config
            .server
            .parse()
            .with_context(|| format!("invalid server address {:?}", config.server))?;

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                anyhow::bail!(
                    "Failed to start the lifecycle daemon: port {} is already in use",
                    addr.port()
                );
            }
            Err(e) => anyhow::bail!("Failed to bind to address {}: {}", addr, e),
        };

        info!(
            "daemon bound to {} with {} store",
            listener.local_addr()?,
            store.backend_name()
        );

        Ok(Self {
            state: DaemonState::new(config, store),
            listener,
            cancellation_token: CancellationToken::new(),
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Token that stops `run` once cancelled. In-flight requests are allowed
    /// to finish.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = get_app(self.state);
        let token = self.cancellation_token;

        axum::serve(self.listener, app)
            .with_graceful_shutdown(async move { token.cancelled().await })
            .await
            .context("daemon server failed")?;

        info!("daemon stopped");
        Ok(())
    }
}
