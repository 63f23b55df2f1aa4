//! Command-line interface for building .ics files.
//!
//! This crate provides the `icsmith` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use error::{CliError, CliResult};
