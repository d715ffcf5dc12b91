//! CLI command definitions and execution
//!
//! One command per client operation, plus shell completion generation.
//! Commands validate their arguments, call into rp-client, and render the
//! result through the shared formatter.

use clap::{Parser, Subcommand};

use rp_client::RepoClient;
use rp_core::{ConfigManager, DEFAULT_SERVER, Defaults, Error, ServerConfig};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod buckets;
mod completions;
mod info;
mod mb;
mod objects;
mod put;
mod rm;

/// repoctl - object storage CLI client
///
/// A command-line interface for content-repository servers exposing
/// buckets, objects, and object versions over HTTP.
#[derive(Parser, Debug)]
#[command(name = "repoctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Server base URL (falls back to the config file, then localhost)
    #[arg(long, global = true, env = "REPOCTL_SERVER")]
    pub server: Option<String>,

    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display server metadata
    Info(info::InfoArgs),

    /// List buckets
    Buckets(buckets::BucketsArgs),

    /// List objects
    Objects(objects::ObjectsArgs),

    /// Create a bucket
    Mb(mb::MbArgs),

    /// Upload a file as a new object or object version
    Put(put::PutArgs),

    /// Delete an object version
    Rm(rm::RmArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let defaults = ConfigManager::new()
        .and_then(|manager| manager.load())
        .map(|config| config.defaults)
        .unwrap_or_default();
    let output_config = resolve_output_config(&cli, &defaults);

    match cli.command {
        Commands::Info(args) => info::execute(args, &cli.server, output_config).await,
        Commands::Buckets(args) => buckets::execute(args, &cli.server, output_config).await,
        Commands::Objects(args) => objects::execute(args, &cli.server, output_config).await,
        Commands::Mb(args) => mb::execute(args, &cli.server, output_config).await,
        Commands::Put(args) => put::execute(args, &cli.server, output_config).await,
        Commands::Rm(args) => rm::execute(args, &cli.server, output_config).await,
        Commands::Completions(args) => completions::execute(args),
    }
}

/// Merge config-file defaults into the output settings
///
/// Flags always win; the config file only supplies behavior the flags left
/// at their defaults. A broken config file falls back to built-in defaults
/// here and is reported by [`connect`] once the server URL is needed.
fn resolve_output_config(cli: &Cli, defaults: &Defaults) -> OutputConfig {
    OutputConfig {
        json: cli.json || defaults.output == "json",
        no_color: cli.no_color || defaults.color == "never",
        quiet: cli.quiet,
    }
}

/// Resolve the server URL and build a client
///
/// Precedence: --server flag (or REPOCTL_SERVER via clap), then the config
/// file, then the localhost default.
pub(crate) fn connect(server: &Option<String>, formatter: &Formatter) -> Result<RepoClient, ExitCode> {
    let url = match server {
        Some(url) => url.clone(),
        None => match ConfigManager::new().and_then(|manager| manager.load()) {
            Ok(config) => config.server.unwrap_or_else(|| DEFAULT_SERVER.to_string()),
            Err(e) => {
                formatter.error(&format!("Failed to load configuration: {e}"));
                return Err(ExitCode::UsageError);
            }
        },
    };

    let config = match ServerConfig::new(&url) {
        Ok(config) => config,
        Err(e) => {
            formatter.error(&format!("Invalid server URL '{url}': {e}"));
            return Err(ExitCode::UsageError);
        }
    };

    RepoClient::new(config).map_err(|e| {
        formatter.error(&format!("Failed to create client: {e}"));
        ExitCode::NetworkError
    })
}

/// Render a failed operation and map it onto the exit-code contract
pub(crate) fn fail(formatter: &Formatter, context: &str, err: &Error) -> ExitCode {
    formatter.error(&format!("{context}: {err}"));
    ExitCode::from_error(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn test_parse_global_server_flag() {
        let cli = Cli::parse_from(["repoctl", "buckets", "--server", "http://repo:8080"]);
        assert_eq!(cli.server.as_deref(), Some("http://repo:8080"));
        assert!(matches!(cli.command, Commands::Buckets(_)));
    }

    #[test]
    fn test_parse_put_command() {
        let cli = Cli::parse_from([
            "repoctl", "put", "./a.txt", "--bucket", "b1", "--key", "a.txt", "--mode", "new",
        ]);
        match cli.command {
            Commands::Put(args) => {
                assert_eq!(args.bucket, "b1");
                assert_eq!(args.key.as_deref(), Some("a.txt"));
                assert_eq!(args.mode, "new");
            }
            _ => panic!("Unexpected command parsing result"),
        }
    }

    #[test]
    fn test_parse_global_debug_flag() {
        let cli = Cli::parse_from(["repoctl", "buckets", "--debug"]);
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Buckets(_)));

        let cli = Cli::parse_from(["repoctl", "buckets"]);
        assert!(!cli.debug);
    }

    #[test]
    fn test_parse_rm_requires_version() {
        let result = Cli::try_parse_from(["repoctl", "rm", "--bucket", "b1", "--key", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_defaults_apply_when_flags_absent() {
        let cli = Cli::parse_from(["repoctl", "buckets"]);
        let defaults = Defaults {
            output: "json".to_string(),
            color: "never".to_string(),
        };

        let output = resolve_output_config(&cli, &defaults);
        assert!(output.json);
        assert!(output.no_color);
        assert!(!output.quiet);
    }

    #[test]
    fn test_flags_override_config_defaults() {
        let cli = Cli::parse_from(["repoctl", "buckets", "--json", "--no-color"]);
        let defaults = Defaults::default();

        let output = resolve_output_config(&cli, &defaults);
        assert!(output.json);
        assert!(output.no_color);

        let cli = Cli::parse_from(["repoctl", "buckets"]);
        let output = resolve_output_config(&cli, &Defaults::default());
        assert!(!output.json);
        assert!(!output.no_color);
    }
}
