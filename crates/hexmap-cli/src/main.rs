//! Hexmap CLI.
//!
//! Generates Rust enums and lookup tables for every Foxhole map tile from
//! the public War API.
//!
//! # Examples
//!
//! ```bash
//! # Write classic-style code to ./mapdump.txt
//! hexmap generate
//!
//! # Rich style printed to stdout
//! hexmap generate --style rich --stdout
//!
//! # List tiles as JSON
//! hexmap tiles --format json
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use hexmap_cli::commands::{self, exit_code_for};
use hexmap_cli::config::{self, Overrides};
use hexmap_cli::{Cli, Commands};
use hexmap_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code_for(&err)
        }
    };

    std::process::exit(exit_code.as_i32());
}

async fn run(cli: Cli) -> Result<ExitCode> {
    init_logging(cli.verbose)?;

    let output_format = cli.format.parse::<OutputFormat>()?;

    execute_command(cli.command, cli.config.as_deref(), output_format).await
}

/// Initializes logging infrastructure.
///
/// Logs go to stderr so generated code on stdout stays clean. `RUST_LOG`
/// is honored unless `--verbose` forces debug level.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Routes a command to its handler and returns its exit code.
async fn execute_command(
    command: Commands,
    config_path: Option<&std::path::Path>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            output,
            base_url,
            style,
            concurrency,
            timeout,
            strict,
            stdout,
        } => {
            let overrides = Overrides {
                base_url,
                output,
                style: style.map(Into::into),
                concurrency,
                timeout_seconds: timeout,
                strict,
            };
            let config = config::resolve(config_path, overrides)?;
            commands::generate::run(&config, stdout, output_format).await
        }
        Commands::Tiles { base_url, timeout } => {
            let overrides = Overrides {
                base_url,
                timeout_seconds: timeout,
                ..Overrides::default()
            };
            let config = config::resolve(config_path, overrides)?;
            commands::tiles::run(&config, output_format).await
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd).await
        }
    }
}
