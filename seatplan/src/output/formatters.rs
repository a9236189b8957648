//! Output formatter implementations.

use std::fmt::Write as _;

use serde::Serialize;

use crate::{Error, Resolution, Result};

use super::{join_legs, OutputFormatter, SearchReport};

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Validation {
        field: "json_output".to_string(),
        message: format!("failed to serialize to JSON: {e}"),
    })
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| Error::Validation {
        field: "csv_output".to_string(),
        message: format!("output is not UTF-8: {e}"),
    })
}

/// Formatter for JSON output.
///
/// A resolution renders as `{"resolution": {...}, "flights": [...]}` with
/// reservation ids in sorted order.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_resolution(&self, resolution: &Resolution) -> Result<String> {
        to_json(resolution)
    }

    fn format_search(&self, report: &SearchReport) -> Result<String> {
        #[derive(Serialize)]
        struct Document<'a> {
            reservation: &'a str,
            itineraries: &'a [Vec<crate::FlightId>],
        }

        to_json(&Document {
            reservation: report.reservation.as_str(),
            itineraries: &report.itineraries,
        })
    }
}

/// Formatter for human-readable output.
///
/// Tab-separated columns, reservations in processing order, then the
/// flights with their remaining seats and a one-line summary.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_resolution(&self, resolution: &Resolution) -> Result<String> {
        let mut out = String::from("RESERVATION\tSEATS\tROUTE\tITINERARY\n");
        for entry in resolution.entries() {
            let reservation = entry.reservation();
            let itinerary = entry
                .outcome()
                .flights()
                .map_or_else(|| "-".to_string(), join_legs);
            let _ = writeln!(
                out,
                "{}\t{}\t{}->{}\t{}",
                reservation.id(),
                reservation.count(),
                reservation.origin(),
                reservation.destination(),
                itinerary
            );
        }

        out.push_str("\nFLIGHT\tROUTE\tREMAINING\n");
        for flight in resolution.flights() {
            let _ = writeln!(
                out,
                "{}\t{}->{}\t{}",
                flight.id(),
                flight.origin(),
                flight.destination(),
                flight.capacity()
            );
        }

        let summary = resolution.summary();
        let _ = writeln!(
            out,
            "\n{} of {} reservations assigned ({} seats), {} unresolved ({} seats)",
            summary.assigned,
            summary.reservations,
            summary.seats_assigned,
            summary.unresolved,
            summary.seats_unresolved
        );
        Ok(out)
    }

    fn format_search(&self, report: &SearchReport) -> Result<String> {
        if report.itineraries.is_empty() {
            return Ok(format!("No feasible itinerary for {}.\n", report.reservation));
        }

        let mut out = format!("Itineraries for {}:\n", report.reservation);
        for (n, itinerary) in report.itineraries.iter().enumerate() {
            let _ = writeln!(out, "  {}\t{}", n + 1, join_legs(itinerary));
        }
        Ok(out)
    }
}

/// Formatter for CSV output.
///
/// One row per reservation in processing order; the itinerary column is
/// empty when unresolved.
pub struct CsvFormatter;

impl OutputFormatter for CsvFormatter {
    fn format_resolution(&self, resolution: &Resolution) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["reservation", "count", "origin", "destination", "itinerary"])?;

        for entry in resolution.entries() {
            let reservation = entry.reservation();
            let count = reservation.count().to_string();
            let itinerary = entry.outcome().flights().map(join_legs).unwrap_or_default();
            writer.write_record([
                reservation.id().as_str(),
                count.as_str(),
                reservation.origin().as_str(),
                reservation.destination().as_str(),
                itinerary.as_str(),
            ])?;
        }

        finish_csv(writer)
    }

    fn format_search(&self, report: &SearchReport) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["reservation", "option", "itinerary"])?;

        for (n, itinerary) in report.itineraries.iter().enumerate() {
            let option = (n + 1).to_string();
            let legs = join_legs(itinerary);
            writer.write_record([report.reservation.as_str(), option.as_str(), legs.as_str()])?;
        }

        finish_csv(writer)
    }
}
