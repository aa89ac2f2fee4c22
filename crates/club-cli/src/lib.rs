//! Computer club simulator CLI library.
//!
//! This crate provides the CLI interface for the club simulator.

mod cli;
pub mod commands;
mod config;
pub mod error;

pub use cli::{Cli, Commands};
pub use config::{Config, OutputFormat};
pub use error::RunError;
