//! Command to list the feasible itineraries for a single reservation.

use crate::commands::resolve::FormatArg;
use crate::error::CliError;
use crate::utils::{emit, load_configuration, load_records, GlobalOptions};
use clap::Args;
use seatplan::engine::{search, FlightNetwork};
use seatplan::output::SearchReport;
use seatplan::{Config, Error, ReservationId};
use std::path::PathBuf;

/// List every feasible itinerary for one reservation.
///
/// Capacities are those of the flights file, before any other reservation
/// is assigned.
#[derive(Args)]
pub struct SearchCommand {
    /// Reservations file (id,count,origin,destination)
    #[arg(long, value_name = "FILE")]
    pub reservations: PathBuf,

    /// Flights file (id,origin,destination,capacity)
    #[arg(long, value_name = "FILE")]
    pub flights: PathBuf,

    /// Id of the reservation to search for
    #[arg(long, value_name = "ID")]
    pub reservation: String,

    /// Output format (overrides configuration)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

impl SearchCommand {
    /// Execute the search command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(
            global,
            Config {
                output_format: self.format.map(Into::into),
                ..Default::default()
            },
        )?;

        let (reservations, flights) = load_records(&self.reservations, &self.flights, &config)?;

        let id = ReservationId::new(self.reservation);
        let reservation = reservations
            .iter()
            .find(|r| r.id() == &id)
            .ok_or_else(|| Error::NotFound {
                resource: format!("reservation '{id}'"),
            })?;

        let network = FlightNetwork::new(flights);
        let itineraries = search(reservation, &network, &network.capacities())
            .iter()
            .map(|itinerary| network.flight_ids(itinerary))
            .collect::<Vec<_>>();
        log::info!("{} feasible itineraries for {id}", itineraries.len());

        let report = SearchReport {
            reservation: id,
            itineraries,
        };
        let formatter = config.output_format().create_formatter();
        emit(&formatter.format_search(&report)?)
    }
}
