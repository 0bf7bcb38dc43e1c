use lifecycle_common::config::{Config, LifecyclePolicy, StoreBackend};
use lifecycle_daemon::client::DaemonClient;
use lifecycle_daemon::server::DaemonServer;
use lifecycle_store::{MemoryStore, StoreEnum};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Daemon on an OS-picked port backed by an in-memory store.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: DaemonClient,
    store: Arc<StoreEnum>,
    token: CancellationToken,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    pub fn config(policy: LifecyclePolicy) -> Config {
        Config {
            server: "127.0.0.1:0".to_string(), // 0: means port will be picked by the OS
            store: StoreBackend::Memory,
            lifecycle_policy: policy,
            demo_max_samples: 50,
            ..Config::default()
        }
    }

    pub async fn launch() -> anyhow::Result<Self> {
        Self::launch_with(Self::config(LifecyclePolicy::Lenient)).await
    }

    pub async fn launch_with(config: Config) -> anyhow::Result<Self> {
        let store = Arc::new(StoreEnum::Memory(MemoryStore::new()));
        let server = DaemonServer::bind(config, store.clone()).await?;

        let addr = server.local_addr()?;
        let token = server.cancellation_token();
        let handle = tokio::spawn(server.run());
        let client = DaemonClient::try_new(format!("http://{addr}"))?;

        Ok(Self {
            addr,
            client,
            store,
            token,
            handle,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn memory(&self) -> &MemoryStore {
        match self.store.as_ref() {
            StoreEnum::Memory(store) => store,
            StoreEnum::Elastic(_) => unreachable!("test server always runs in memory"),
        }
    }

    pub async fn finished(self) -> anyhow::Result<()> {
        self.token.cancel();
        self.handle.await??;
        Ok(())
    }
}
