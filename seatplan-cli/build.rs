//! Build script for seatplan-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn records_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("reservations")
                .long("reservations")
                .help("Reservations file (id,count,origin,destination)")
                .value_name("FILE")
                .required(true),
        )
        .arg(
            Arg::new("flights")
                .long("flights")
                .help("Flights file (id,origin,destination,capacity)")
                .value_name("FILE")
                .required(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (overrides configuration)")
                .value_parser(["json", "table", "csv"]),
        )
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("seatplan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Assign group reservations to flight itineraries")
        .long_about(
            "Assign multi-seat reservations to multi-leg itineraries over a capacitated flight network",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file on top of discovered ones")
                .value_name("PATH")
                .global(true)
                .env("SEATPLAN_CONFIG"),
        )
        .subcommands(vec![
            records_args(
                Command::new("resolve")
                    .about("Assign every reservation to an itinerary")
                    .long_about("Resolve reservations largest first and print the assignments"),
            )
            .arg(
                Arg::new("strategy")
                    .long("strategy")
                    .help("Selection strategy (overrides configuration)")
                    .value_parser(["lookahead", "tightest-fit"]),
            )
            .arg(
                Arg::new("verify")
                    .long("verify")
                    .help("Check that releasing every assignment restores the input capacities")
                    .action(ArgAction::SetTrue),
            ),
            records_args(
                Command::new("search")
                    .about("List the feasible itineraries for one reservation")
                    .long_about("Enumerate itineraries against the initial flight capacities"),
            )
            .arg(
                Arg::new("reservation")
                    .long("reservation")
                    .help("Id of the reservation to search for")
                    .value_name("ID")
                    .required(true),
            ),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a seatplan configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("seatplan.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
