//! Flight and reservation records.
//!
//! These are the typed shapes the engine consumes. Identifiers and locations
//! are opaque string tokens compared by value.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_token {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new token from anything string-like.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the token as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_token!(
    /// An airport or any other node of the flight graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatplan::Location;
    ///
    /// let a = Location::from("A");
    /// assert_eq!(a.as_str(), "A");
    /// assert_eq!(a, Location::new("A".to_string()));
    /// ```
    Location
);

string_token!(
    /// Identifier of a flight.
    FlightId
);

string_token!(
    /// Identifier of a reservation (a PNR).
    ReservationId
);

/// A capacity-bounded directed segment between two locations.
///
/// `capacity` is the number of seats still available. It only changes while
/// a resolution run commits itineraries, and a [`crate::engine::Resolution`]
/// hands the mutated flights back to the caller.
///
/// # Examples
///
/// ```
/// use seatplan::Flight;
///
/// let flight = Flight::new("F1", "A", "B", 8);
/// assert_eq!(flight.id().as_str(), "F1");
/// assert_eq!(flight.capacity(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    id: FlightId,
    origin: Location,
    destination: Location,
    capacity: u32,
}

impl Flight {
    /// Creates a new flight.
    #[must_use]
    pub fn new(
        id: impl Into<FlightId>,
        origin: impl Into<Location>,
        destination: impl Into<Location>,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            origin: origin.into(),
            destination: destination.into(),
            capacity,
        }
    }

    /// Returns the flight id.
    #[must_use]
    pub fn id(&self) -> &FlightId {
        &self.id
    }

    /// Returns the departure location.
    #[must_use]
    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Returns the arrival location.
    #[must_use]
    pub fn destination(&self) -> &Location {
        &self.destination
    }

    /// Returns the remaining seats.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    pub(crate) fn set_capacity(&mut self, capacity: u32) {
        self.capacity = capacity;
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}->{}, {} seats)",
            self.id, self.origin, self.destination, self.capacity
        )
    }
}

/// A demand for `count` seats from `origin` to `destination`.
///
/// Reservations are immutable once constructed, and construction rejects a
/// count of zero.
///
/// # Examples
///
/// ```
/// use seatplan::Reservation;
///
/// let reservation = Reservation::new("PNR01", 3, "A", "B").unwrap();
/// assert_eq!(reservation.count(), 3);
///
/// assert!(Reservation::new("PNR02", 0, "A", "B").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawReservation")]
pub struct Reservation {
    id: ReservationId,
    count: u32,
    origin: Location,
    destination: Location,
}

impl Reservation {
    /// Creates a new reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub fn new(
        id: impl Into<ReservationId>,
        count: u32,
        origin: impl Into<Location>,
        destination: impl Into<Location>,
    ) -> Result<Self, InvalidCountError> {
        let id = id.into();
        if count == 0 {
            return Err(InvalidCountError {
                id: id.as_str().to_string(),
            });
        }

        Ok(Self {
            id,
            count,
            origin: origin.into(),
            destination: destination.into(),
        })
    }

    /// Returns the reservation id.
    #[must_use]
    pub fn id(&self) -> &ReservationId {
        &self.id
    }

    /// Returns the number of seats required.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Returns the departure location.
    #[must_use]
    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Returns the arrival location.
    #[must_use]
    pub fn destination(&self) -> &Location {
        &self.destination
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} seats, {}->{})",
            self.id, self.count, self.origin, self.destination
        )
    }
}

#[derive(Deserialize)]
struct RawReservation {
    id: ReservationId,
    count: u32,
    origin: Location,
    destination: Location,
}

impl TryFrom<RawReservation> for Reservation {
    type Error = InvalidCountError;

    fn try_from(raw: RawReservation) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.count, raw.origin, raw.destination)
    }
}

/// Error returned when a reservation asks for zero seats.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("reservation {id} must require at least one seat")]
pub struct InvalidCountError {
    /// Id of the offending reservation.
    pub id: String,
}
