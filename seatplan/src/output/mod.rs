//! Output formatting for resolutions and search results.
//!
//! Three formats are supported: a JSON document, a human-readable table, and
//! CSV rows. See [`OutputFormat`] for selecting one.

mod formatters;

use crate::config::OutputFormat;
use crate::model::{FlightId, ReservationId};
use crate::{Resolution, Result};

pub use formatters::{CsvFormatter, JsonFormatter, TableFormatter};

/// Separator between flight ids in flat renderings of an itinerary.
pub const LEG_SEPARATOR: &str = ">";

/// Feasible itineraries of one reservation, as flight ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// The reservation searched for.
    pub reservation: ReservationId,
    /// Every feasible itinerary, in search order.
    pub itineraries: Vec<Vec<FlightId>>,
}

/// Trait for rendering engine results.
pub trait OutputFormatter {
    /// Renders a resolution run.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_resolution(&self, resolution: &Resolution) -> Result<String>;

    /// Renders the result of a single-reservation search.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_search(&self, report: &SearchReport) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatplan::config::OutputFormat;
    /// use seatplan::{Flight, Reservation, Resolver};
    ///
    /// let flights = vec![Flight::new("F1", "A", "B", 8)];
    /// let reservations = vec![Reservation::new("PNR01", 3, "A", "B").unwrap()];
    /// let resolution = Resolver::new().resolve_all(&reservations, flights);
    ///
    /// let csv = OutputFormat::Csv.create_formatter().format_resolution(&resolution).unwrap();
    /// assert_eq!(csv, "reservation,count,origin,destination,itinerary\nPNR01,3,A,B,F1\n");
    /// ```
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Json => Box::new(JsonFormatter),
            Self::Table => Box::new(TableFormatter),
            Self::Csv => Box::new(CsvFormatter),
        }
    }
}

/// Joins flight ids with [`LEG_SEPARATOR`].
#[must_use]
pub fn join_legs(flights: &[FlightId]) -> String {
    flights
        .iter()
        .map(FlightId::as_str)
        .collect::<Vec<_>>()
        .join(LEG_SEPARATOR)
}
