use assert_cmd::assert::Assert;
use assert_cmd::Command;
use lifecycle_common::config::{Config, StoreBackend};
use lifecycle_daemon::server::DaemonServer;
use lifecycle_store::{MemoryStore, StoreEnum};
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub const CLI_BIN: &str = "lifecycle";

/// Runs the binary with a private log directory and no config file.
pub fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(CLI_BIN).unwrap();
    cmd.current_dir(dir.path());
    cmd.env("LIFECYCLE_LOG_DIR", dir.path());
    cmd.env("RUST_BACKTRACE", "1");
    cmd.timeout(std::time::Duration::from_secs(30));
    cmd
}

pub struct TestServer {
    pub dir: TempDir,
    addr: SocketAddr,
    token: CancellationToken,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    pub async fn launch() -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        let config = Config {
            server: "127.0.0.1:0".to_string(), // 0: means port will be picked by the OS
            store: StoreBackend::Memory,
            ..Config::default()
        };

        let store = Arc::new(StoreEnum::Memory(MemoryStore::new()));
        let server = DaemonServer::bind(config, store).await?;
        let addr = server.local_addr()?;
        let token = server.cancellation_token();
        let handle = tokio::spawn(server.run());

        Ok(Self {
            dir,
            addr,
            token,
            handle,
        })
    }

    pub async fn send_command(&self, command: &[&str]) -> Assert {
        let mut cmd = cli(&self.dir);
        cmd.env("LIFECYCLE_SERVER", self.addr.to_string());
        cmd.args(command);

        tokio::task::spawn_blocking(move || cmd.assert())
            .await
            .unwrap()
    }

    pub async fn finished(self) -> anyhow::Result<()> {
        self.token.cancel();
        self.handle.await??;
        Ok(())
    }
}
