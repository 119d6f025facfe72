//! dualdiff - Command Line Front End for the Dual-Number Engine
//!
//! Evaluates built-in functions and their exact derivatives with
//! forward-mode automatic differentiation.
//!
//! # Commands
//!
//! - `dualdiff demo` - Differentiate x² at 3 and sin(x) at 0
//! - `dualdiff eval --function <name> [--at <x>]...` - Value and derivative at points
//! - `dualdiff check` - Cross-check the engine against num-dual and closed forms
//!
//! # Configuration
//!
//! Settings are read from `dualdiff.toml` (see [`config::CliConfig`]) and may
//! be overridden with `DUALDIFF_*` environment variables. `RUST_LOG` takes
//! precedence over the configured log level.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod catalog;
mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use catalog::CatalogFunction;
use commands::eval::OutputFormat;
use config::CliConfig;

/// Forward-mode automatic differentiation CLI
#[derive(Parser)]
#[command(name = "dualdiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "dualdiff.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Differentiate x² at 3 and sin(x) at 0
    Demo,

    /// Evaluate a built-in function and its derivative
    Eval {
        /// Function to evaluate
        #[arg(short, long, value_enum)]
        function: CatalogFunction,

        /// Evaluation point (repeatable); defaults to the configured points
        #[arg(short, long = "at", allow_negative_numbers = true)]
        at: Vec<f64>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Fail on non-finite values or derivatives
        #[arg(long)]
        strict: bool,
    },

    /// Cross-check the engine at the configured points
    Check {
        /// Override the configured tolerance
        #[arg(short, long)]
        tolerance: Option<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_with_env_and_validate(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    // RUST_LOG wins; otherwise the configured level, raised by --verbose
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    debug!(?config, "Configuration loaded");
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Demo => commands::demo::run()?,
        Commands::Eval {
            function,
            at,
            format,
            strict,
        } => {
            let config = config
                .with_cli_overrides(None, at)
                .context("invalid --at")?;
            commands::eval::run(function, &config.points, format, strict)?
        }
        Commands::Check { tolerance } => {
            let config = config
                .with_cli_overrides(tolerance, Vec::new())
                .context("invalid --tolerance")?;
            commands::check::run(&config.points, config.tolerance)?
        }
    }

    Ok(())
}
