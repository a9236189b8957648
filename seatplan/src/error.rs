//! Error types for the seatplan library.
//!
//! Business-level infeasibility (a reservation with no itinerary) is never an
//! error; it is reported through [`crate::engine::Outcome::Unresolved`]. The
//! variants here cover malformed input, configuration problems and I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a seatplan error.
///
/// # Examples
///
/// ```
/// use seatplan::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(8)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of record a validation or parsing error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A reservation row.
    Reservation,
    /// A flight row.
    Flight,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reservation => write!(f, "reservation"),
            Self::Flight => write!(f, "flight"),
        }
    }
}

/// The main error type for the seatplan library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A record file could not be read as delimited text.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A single input record is malformed.
    #[error("malformed {kind} record at line {line}: {reason}")]
    Record {
        /// Which file the record came from.
        kind: RecordKind,
        /// One-based line number of the record.
        line: u64,
        /// What is wrong with it.
        reason: String,
    },

    /// Two records of the same kind share an id.
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId {
        /// Which file the records came from.
        kind: RecordKind,
        /// The repeated identifier.
        id: String,
    },

    /// More records were supplied than the configured limit allows.
    #[error("too many {kind} records: {count} exceeds limit of {limit}")]
    InputTooLarge {
        /// Which file exceeded its limit.
        kind: RecordKind,
        /// Number of records supplied.
        count: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// A configuration file passed explicitly does not exist.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },
}

impl From<crate::model::InvalidCountError> for Error {
    fn from(err: crate::model::InvalidCountError) -> Self {
        Self::Validation {
            field: "count".into(),
            message: format!("reservation '{}' must require at least one seat", err.id),
        }
    }
}

impl Error {
    /// Check if the error was caused by malformed input records.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatplan::Error;
    /// use seatplan::error::RecordKind;
    ///
    /// let err = Error::DuplicateId { kind: RecordKind::Flight, id: "F1".into() };
    /// assert!(err.is_input_error());
    /// ```
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Csv(_)
                | Self::Record { .. }
                | Self::DuplicateId { .. }
                | Self::InputTooLarge { .. }
        )
    }
}
