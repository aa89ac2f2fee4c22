//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Computer club day simulator.
///
/// Replays one business day from a text description and prints the event
/// transcript followed by each table's revenue and occupied time.
#[derive(Debug, Parser)]
#[command(name = "club", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Simulate the day and print the report.
    Run {
        /// Day description file (`.txt`).
        file: PathBuf,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate a day description without printing the report.
    Check {
        /// Day description file (`.txt`).
        file: PathBuf,
    },
}
