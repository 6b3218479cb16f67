//! # tessera CLI entry point
//!
//! Parses command-line arguments, loads configuration, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tessera_cli::check::{run_check, CheckArgs};
use tessera_cli::config::CliConfig;
use tessera_cli::types::{run_types, TypesArgs};

/// Exit code for operational errors (bad type name, unreadable input, bad config).
const EXIT_OPERATIONAL: u8 = 2;

/// tessera: immutable value objects and typed collections.
///
/// Builds values from JSON natives by type name, prints their canonical
/// form, and checks that the canonical form round-trips.
#[derive(Parser, Debug)]
#[command(name = "tessera", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file. Defaults to ./tessera.yaml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a value from JSON and report its canonical form.
    Check(CheckArgs),

    /// List known type names and configured aliases.
    Types(TypesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("tessera CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let result = CliConfig::discover(cli.config.as_deref(), &cwd).and_then(|config| {
        match &cli.command {
            Commands::Check(args) => run_check(args, &config),
            Commands::Types(args) => run_types(args, &config),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_OPERATIONAL)
        }
    }
}
