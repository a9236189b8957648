//! Command to resolve a set of reservations against a flight network.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, load_records, GlobalOptions};
use clap::{Args, ValueEnum};
use seatplan::config::{OutputFormat, SelectionKind};
use seatplan::{Config, Resolver};
use std::path::PathBuf;

/// Output format for command results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Pretty-printed JSON document
    Json,
    /// Tab-separated table format (human-readable)
    Table,
    /// CSV format
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

/// Rule used to pick one itinerary among the feasible ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum StrategyArg {
    /// Least damage to the reservations still waiting, then tightest fit
    Lookahead,
    /// Fewest spare seats on the chosen legs
    TightestFit,
}

impl From<StrategyArg> for SelectionKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Lookahead => SelectionKind::Lookahead,
            StrategyArg::TightestFit => SelectionKind::TightestFit,
        }
    }
}

/// Assign every reservation to an itinerary.
#[derive(Args)]
pub struct ResolveCommand {
    /// Reservations file (id,count,origin,destination)
    #[arg(long, value_name = "FILE")]
    pub reservations: PathBuf,

    /// Flights file (id,origin,destination,capacity)
    #[arg(long, value_name = "FILE")]
    pub flights: PathBuf,

    /// Selection strategy (overrides configuration)
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Output format (overrides configuration)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Check that releasing every assignment restores the input capacities
    #[arg(long)]
    pub verify: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(
            global,
            Config {
                selection: self.strategy.map(Into::into),
                output_format: self.format.map(Into::into),
                ..Default::default()
            },
        )?;

        let (reservations, flights) = load_records(&self.reservations, &self.flights, &config)?;

        let selection = config.selection();
        log::debug!("resolving with {selection} selection");
        let resolution = Resolver::with_strategy(selection.strategy())
            .resolve_all(&reservations, flights.clone());

        if self.verify && resolution.rollback() != flights {
            return Err(CliError::SemanticFailure(
                "Verification failed: released capacities do not match the input flights"
                    .to_string(),
            ));
        }

        let summary = resolution.summary();
        log::info!(
            "{} of {} reservations assigned",
            summary.assigned,
            summary.reservations
        );
        for entry in resolution.unresolved() {
            let reservation = entry.reservation();
            log::warn!(
                "no itinerary for {} ({} seats, {} -> {})",
                reservation.id(),
                reservation.count(),
                reservation.origin(),
                reservation.destination()
            );
        }

        let formatter = config.output_format().create_formatter();
        emit(&formatter.format_resolution(&resolution)?)
    }
}
