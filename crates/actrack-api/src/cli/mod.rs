//! CLI command definitions for the `actrack` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod seed;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Track activities and broadcast them as Discord Rich Presence.
#[derive(Parser)]
#[command(name = "actrack", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on; 0 picks a free port. Defaults to config.toml.
        #[arg(short, long, env = "ACTRACK_PORT")]
        port: Option<u16>,

        /// Host to bind to. Defaults to config.toml.
        #[arg(long, env = "ACTRACK_HOST")]
        host: Option<String>,
    },

    /// Insert sample groups, categories, activities and records into an empty database.
    Seed,

    /// Show database counts and paths.
    Status,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
