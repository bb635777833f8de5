pub mod config;
pub mod providers;

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};

use pool_domain::config::{Config, CONFIG_PATH_ENV, PORT_ENV};

/// mcp-pool: one HTTP endpoint in front of several MCP tool providers.
#[derive(Debug, Parser)]
#[command(name = "mcp-pool", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the gateway server (default when no subcommand is given).
    Serve,
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// List the providers the configuration would register.
    Providers,
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path named by `MCP_POOL_CONFIG` (or
/// `config.toml` by default), then apply the `PORT` override. Returns the
/// parsed [`Config`] and the path that was used.
///
/// A missing file is not an error: every field has a default.
pub fn load_config() -> anyhow::Result<(Config, String)> {
    let config_path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config.toml".into());

    let mut config = Config::load(Path::new(&config_path))
        .with_context(|| format!("loading {config_path}"))?;

    config
        .server
        .apply_port_override(std::env::var(PORT_ENV).ok().as_deref());

    Ok((config, config_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_serve() {
        let cli = Cli::try_parse_from(["mcp-pool"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn config_subcommands_parse() {
        let cli = Cli::try_parse_from(["mcp-pool", "config", "validate"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Validate))
        ));
        let cli = Cli::try_parse_from(["mcp-pool", "providers"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Providers)));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["mcp-pool", "doctor"]).is_err());
    }
}
