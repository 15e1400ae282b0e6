use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eacl_core::LogLevel;
use tracing::{debug, warn};

mod commands;
mod config;

use commands::get::{execute_get, GetArgs};
use commands::privileges::{execute_privileges, PrivilegesArgs};
use config::CliConfig;

/// Environment variable consulted for the log level
const LOG_ENV: &str = "EACL_LOG";

/// Effective ACL command line interface
///
/// Resolves the effective access control state of resources from a policy
/// document and prints it as per-principal granted/denied privileges.
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// TOML configuration file
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[clap(long, global = true)]
    log_level: Option<String>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an ACL request such as `/content/page.eacl.json`
    Get(GetArgs),

    /// Show the primitive privileges each privilege expands to
    Privileges(PrivilegesArgs),
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(3);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = CliConfig::load(cli.config.as_deref())?;
    init_tracing(&cli, &config)?;

    match &cli.config {
        Some(path) if !path.exists() => {
            warn!("Configuration file not found: {}", path.display())
        }
        Some(path) => debug!("Loaded configuration from {}", path.display()),
        None => debug!("No configuration file specified, using defaults"),
    }

    match &cli.command {
        Commands::Get(args) => execute_get(args, &config),
        Commands::Privileges(args) => execute_privileges(args, &config),
    }
}

/// Install the stderr subscriber. The flag wins over the environment, which
/// wins over the configuration file.
fn init_tracing(cli: &Cli, config: &CliConfig) -> Result<()> {
    let level = match cli
        .log_level
        .clone()
        .or_else(|| std::env::var(LOG_ENV).ok())
    {
        Some(name) => name.parse::<LogLevel>()?,
        None => config.log_level()?,
    };

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Ok(())
}
