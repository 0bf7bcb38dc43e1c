use clap::{Args, Parser, Subcommand};
use lifecycle_common::ProcessIdentity;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[clap(
    name = "lifecycle",
    about = "Records start and stop of externally observed processes",
    version
)]
pub struct Cli {
    /// TOML configuration file; defaults to ./lifecycle.toml when present
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the lifecycle daemon in the foreground until Ctrl-C
    Serve,

    /// Record the start of a process and print its id
    Start(IdentityArgs),

    /// Record the stop of a process, by identity or by id
    Stop(StopArgs),

    /// Print the stored record of a process
    Get {
        /// Process id returned by `start`
        process_id: String,
    },

    /// Ask the daemon to write random demo records
    Demo {
        #[clap(long, default_value_t = 0)]
        samples: usize,
    },

    /// Print the process id derived locally from the identity attributes
    Fingerprint(IdentityArgs),

    /// Print the effective configuration as JSON
    Config,
}

#[derive(Args, Debug, Clone, Default)]
pub struct IdentityArgs {
    #[clap(long, default_value = "")]
    pub prop1: String,
    #[clap(long, default_value = "")]
    pub prop2: String,
    #[clap(long, default_value = "")]
    pub prop3: String,
    #[clap(long, default_value = "")]
    pub prop4: String,
    #[clap(long, default_value = "")]
    pub prop5: String,
}

impl From<IdentityArgs> for ProcessIdentity {
    fn from(args: IdentityArgs) -> Self {
        ProcessIdentity::new(args.prop1, args.prop2, args.prop3, args.prop4, args.prop5)
    }
}

#[derive(Args, Debug, Clone)]
pub struct StopArgs {
    /// Process id returned by `start`, instead of the identity attributes
    #[clap(long, conflicts_with_all = ["prop1", "prop2", "prop3", "prop4", "prop5"])]
    pub id: Option<String>,
    #[clap(flatten)]
    pub identity: IdentityArgs,
}
