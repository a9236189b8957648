#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # seatplan
//!
//! A library for assigning multi-seat reservations to multi-leg itineraries
//! over a capacitated flight network.
//!
//! Reservations are resolved largest first. For each one, every simple path
//! from its origin to its destination with enough seats on each leg is
//! enumerated, a selection strategy picks one, and the seats are committed
//! before the next reservation is considered.
//!
//! ## Core Types
//!
//! - [`Flight`] and [`Reservation`]: the validated input records
//! - [`Resolver`] and [`Resolution`]: the resolution loop and its result
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//!
//! ## Examples
//!
//! ```
//! use seatplan::{Flight, Outcome, Reservation, ReservationId, Resolver};
//!
//! let flights = vec![
//!     Flight::new("F1", "A", "B", 8),
//!     Flight::new("F2", "B", "C", 4),
//! ];
//! let reservations = vec![Reservation::new("PNR01", 3, "A", "C").unwrap()];
//!
//! let resolution = Resolver::new().resolve_all(&reservations, flights);
//! let outcome = resolution.outcome(&ReservationId::from("PNR01")).unwrap();
//! assert_eq!(outcome.flights().unwrap().len(), 2);
//! assert_eq!(resolution.flights()[1].capacity(), 1);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod records;

pub use config::{Config, ConfigBuilder};
pub use engine::{Outcome, Resolution, Resolver};
pub use error::{Error, RecordKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use model::{Flight, FlightId, Location, Reservation, ReservationId};
