use crate::commands::IdentityArgs;
use lifecycle_common::config::Config;
use lifecycle_common::ProcessIdentity;

pub fn fingerprint(args: IdentityArgs) -> anyhow::Result<()> {
    println!("{}", ProcessIdentity::from(args).fingerprint());
    Ok(())
}

/// The API key is never serialized, so this is safe to paste into a ticket.
pub fn print_config(config: &Config) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
