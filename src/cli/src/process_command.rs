use crate::commands::{Cli, Command};
use crate::handlers;
use anyhow::Context;
use clap::Parser;
use lifecycle_common::config::{Config, ConfigLoader};
use lifecycle_daemon::client::DaemonClient;

/// Parses the command line and runs the selected command.
pub fn process_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ConfigLoader::load(cli.config.as_deref()).context("Failed to load config")?;

    tokio::runtime::Runtime::new()
        .context("Failed to start runtime")?
        .block_on(process_command(cli.command, config))
}

async fn process_command(command: Command, config: Config) -> anyhow::Result<()> {
    match command {
        Command::Serve => handlers::serve(config).await,
        Command::Fingerprint(args) => handlers::fingerprint(args),
        Command::Config => handlers::print_config(&config),
        Command::Start(args) => handlers::start(&daemon_client(&config)?, args).await,
        Command::Stop(args) => handlers::stop(&daemon_client(&config)?, args).await,
        Command::Get { process_id } => handlers::get(&daemon_client(&config)?, &process_id).await,
        Command::Demo { samples } => handlers::demo(&daemon_client(&config)?, samples).await,
    }
}

fn daemon_client(config: &Config) -> anyhow::Result<DaemonClient> {
    DaemonClient::try_new(format!("http://{}", config.server))
        .context("Failed to create daemon client")
}
