//! # maxsub CLI Module
//!
//! This module implements the CLI interface for maxsub.
//!
//! ## Available Commands
//!
//! - `solve` - Maximum subarray sum of inline values or a file
//! - `gap` - Largest gap (max - min) of inline values or a file
//! - `serve` - Start the HTTP server
//! - `config` - Print the effective configuration

mod commands;

use clap::{Parser, Subcommand};
use maxsub::config::Config;
use maxsub::input::InputFormat;
use maxsub_core::MaxSubError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// maxsub - maximum subarray sums by run merging
///
/// Splits the input into runs of non-negative values and greedily merges
/// neighboring runs whose smaller sum outweighs the gap between them.
#[derive(Parser, Debug)]
#[command(name = "maxsub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file (default: ./maxsub.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Values given inline or through a file.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Integers, separated by spaces and/or commas
    #[arg(num_args = 0.., allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Read values from a file instead
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// File format
    #[arg(short = 't', long, value_enum, default_value_t = InputFormat::Text)]
    pub format: InputFormat,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the maximum subarray sum
    Solve {
        #[command(flatten)]
        input: InputArgs,

        /// Maximum merges before giving up (0 = unbounded, overrides config)
        #[arg(short, long)]
        budget: Option<usize>,
    },

    /// Compute the largest gap (max - min)
    Gap {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Start HTTP server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the effective configuration
    Config,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), MaxSubError> {
    let config = Config::load(cli.config.as_deref())?.with_env();
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Solve { input, budget } => cmd_solve(&config, &input, budget, json_mode),
        Commands::Gap { input } => cmd_gap(&config, &input, json_mode),
        Commands::Serve { host, port } => cmd_serve(config, host, port).await,
        Commands::Config => cmd_config(&config),
    }
}

// =============================================================================
// TESTS
// =============================================================================
