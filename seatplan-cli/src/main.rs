//! Main entry point for the seatplan CLI.
//!
//! This is the command-line interface for the seatplan allocation engine.
//! It provides commands for working with reservation and flight files:
//! - `resolve`: Assign every reservation to an itinerary
//! - `search`: List the feasible itineraries for one reservation
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Fails only if a logger is already installed.
    let _ = seatplan::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Search(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
