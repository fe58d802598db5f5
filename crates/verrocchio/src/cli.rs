//! Command-line interface for the eval console.
//!
//! Two subcommands: `run` starts the Discord bot, `eval` pushes one
//! snippet through the full harness locally and prints the report,
//! which makes the whole pipeline exercisable without a gateway
//! connection.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "verrocchio")]
#[command(about = "Privileged remote-eval console for Discord", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the Discord bot
    Run {
        /// Path to the TOML configuration file
        #[arg(short, long, default_value = "verrocchio.toml")]
        config: PathBuf,
    },

    /// Evaluate one snippet locally and print the report
    Eval {
        /// The snippet to evaluate (code fences optional)
        snippet: String,
    },
}
