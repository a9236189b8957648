//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ResolveCommand, SearchCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for assigning group reservations to flight itineraries.
#[derive(Parser)]
#[command(name = "seatplan")]
#[command(version, about = "Assign group reservations to flight itineraries", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read configuration from this file on top of discovered ones
    #[arg(long, value_name = "PATH", global = true, env = "SEATPLAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Assign every reservation to an itinerary
    Resolve(ResolveCommand),

    /// List the feasible itineraries for one reservation
    Search(SearchCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
