//! Reading reservation and flight records from delimited text.
//!
//! Both files are positional and headerless by default:
//!
//! ```text
//! reservations:  id,count,origin,destination
//! flights:       id,origin,destination,capacity
//! ```
//!
//! Fields are trimmed and blank lines are skipped. Anything else that does
//! not fit the shape is rejected here, so the engine only ever sees
//! well-typed records.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::config::{Config, InputConfig};
use crate::error::{Error, RecordKind, Result};
use crate::model::{Flight, Reservation};

/// Parameters for reading one record file.
///
/// Derived from [`InputConfig`] and [`crate::config::LimitsConfig`], but kept separate so a
/// caller can read a file without a full configuration.
///
/// # Examples
///
/// ```
/// use seatplan::records::{read_flights, ReadOptions};
///
/// let options = ReadOptions::default();
/// let flights = read_flights("F1,A,B,8\nF2,B,C,4\n".as_bytes(), &options).unwrap();
/// assert_eq!(flights.len(), 2);
/// assert_eq!(flights[1].capacity(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Skip the first row as a header.
    pub has_headers: bool,
    /// Maximum number of records accepted, if any.
    pub limit: Option<usize>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
            limit: None,
        }
    }
}

impl From<&InputConfig> for ReadOptions {
    fn from(config: &InputConfig) -> Self {
        let defaults = Self::default();
        Self {
            delimiter: config
                .delimiter
                .and_then(|c| u8::try_from(c).ok())
                .unwrap_or(defaults.delimiter),
            has_headers: config.has_headers.unwrap_or(defaults.has_headers),
            limit: None,
        }
    }
}

impl ReadOptions {
    /// Options for the reservation file under `config`.
    #[must_use]
    pub fn for_reservations(config: &Config) -> Self {
        Self {
            limit: Some(config.max_reservations()),
            ..Self::from(&config.input.clone().unwrap_or_default())
        }
    }

    /// Options for the flight file under `config`.
    #[must_use]
    pub fn for_flights(config: &Config) -> Self {
        Self {
            limit: Some(config.max_flights()),
            ..Self::from(&config.input.clone().unwrap_or_default())
        }
    }

    fn reader<R: Read>(&self, input: R) -> csv::Reader<R> {
        ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(input)
    }
}

/// Reads reservations (`id,count,origin,destination`).
///
/// # Errors
///
/// Returns an error if a row is malformed, a count is zero or not a number,
/// an id repeats, or the file holds more rows than `options.limit`.
pub fn read_reservations<R: Read>(input: R, options: &ReadOptions) -> Result<Vec<Reservation>> {
    let kind = RecordKind::Reservation;
    let mut reader = options.reader(input);
    let mut seen = HashSet::new();
    let mut reservations = Vec::new();

    for record in reader.records() {
        let record = record?;
        check_limit(kind, reservations.len() + 1, options.limit)?;
        let row = Row::new(kind, &record, 4)?;
        let id = row.text(0, "id")?;
        let reservation = Reservation::new(
            id,
            row.number(1, "count")?,
            row.text(2, "origin")?,
            row.text(3, "destination")?,
        )
        .map_err(|err| row.malformed(&err.to_string()))?;

        if !seen.insert(reservation.id().clone()) {
            return Err(Error::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
        reservations.push(reservation);
    }

    log::debug!("read {} reservation(s)", reservations.len());
    Ok(reservations)
}

/// Reads flights (`id,origin,destination,capacity`).
///
/// # Errors
///
/// Returns an error if a row is malformed, a capacity is not a non-negative
/// number, an id repeats, or the file holds more rows than `options.limit`.
pub fn read_flights<R: Read>(input: R, options: &ReadOptions) -> Result<Vec<Flight>> {
    let kind = RecordKind::Flight;
    let mut reader = options.reader(input);
    let mut seen = HashSet::new();
    let mut flights = Vec::new();

    for record in reader.records() {
        let record = record?;
        check_limit(kind, flights.len() + 1, options.limit)?;
        let row = Row::new(kind, &record, 4)?;
        let id = row.text(0, "id")?;
        let flight = Flight::new(
            id,
            row.text(1, "origin")?,
            row.text(2, "destination")?,
            row.number(3, "capacity")?,
        );

        if !seen.insert(flight.id().clone()) {
            return Err(Error::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
        flights.push(flight);
    }

    log::debug!("read {} flight(s)", flights.len());
    Ok(flights)
}

/// Reads reservations from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or [`read_reservations`]
/// rejects its content.
pub fn load_reservations(path: &Path, options: &ReadOptions) -> Result<Vec<Reservation>> {
    log::debug!("loading reservations from {}", path.display());
    read_reservations(File::open(path)?, options)
}

/// Reads flights from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or [`read_flights`]
/// rejects its content.
pub fn load_flights(path: &Path, options: &ReadOptions) -> Result<Vec<Flight>> {
    log::debug!("loading flights from {}", path.display());
    read_flights(File::open(path)?, options)
}

/// Called before each row is accepted, so reading stops at the first row
/// past the limit.
fn check_limit(kind: RecordKind, count: usize, limit: Option<usize>) -> Result<()> {
    match limit {
        Some(limit) if count > limit => Err(Error::InputTooLarge { kind, count, limit }),
        _ => Ok(()),
    }
}

/// A record with its location, for error reporting.
struct Row<'r> {
    kind: RecordKind,
    line: u64,
    record: &'r StringRecord,
}

impl<'r> Row<'r> {
    fn new(kind: RecordKind, record: &'r StringRecord, fields: usize) -> Result<Self> {
        let row = Self {
            kind,
            line: record.position().map_or(0, csv::Position::line),
            record,
        };
        if record.len() != fields {
            return Err(row.malformed(&format!(
                "expected {fields} fields, found {}",
                record.len()
            )));
        }
        Ok(row)
    }

    fn text(&self, index: usize, field: &str) -> Result<&'r str> {
        match self.record.get(index) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(self.malformed(&format!("{field} is empty"))),
        }
    }

    fn number<T: std::str::FromStr>(&self, index: usize, field: &str) -> Result<T> {
        let value = self.text(index, field)?;
        value
            .parse()
            .map_err(|_| {
                self.malformed(&format!("{field} '{value}' is not a non-negative integer"))
            })
    }

    fn malformed(&self, reason: &str) -> Error {
        Error::Record {
            kind: self.kind,
            line: self.line,
            reason: reason.to_string(),
        }
    }
}
