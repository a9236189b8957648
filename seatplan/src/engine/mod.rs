//! The allocation engine.
//!
//! The engine turns an ordered list of reservations and a list of flights
//! into a [`Resolution`]. It is built from three layers, leaves first:
//!
//! 1. **Search** ([`search`]): every simple path from a reservation's origin
//!    to its destination whose flights all have room for it.
//! 2. **Selection** ([`SelectionStrategy`]): picks one path among the
//!    feasible ones.
//! 3. **Resolution** ([`Resolver`]): walks reservations largest first,
//!    commits each chosen path onto the shared capacities, and records the
//!    outcome.
//!
//! Runs are single-threaded and own their flights. Speculative commits made
//! while scoring candidates happen on cloned [`Capacities`]; only the
//! resolution loop mutates the authoritative snapshot.
//!
//! # Examples
//!
//! ```
//! use seatplan::engine::{Outcome, Resolver};
//! use seatplan::{Flight, Reservation, ReservationId};
//!
//! let flights = vec![
//!     Flight::new("F1", "A", "B", 8),
//!     Flight::new("F2", "B", "C", 4),
//!     Flight::new("F4", "A", "C", 5),
//! ];
//! let reservations = vec![
//!     Reservation::new("R1", 4, "A", "C").unwrap(),
//!     Reservation::new("R2", 3, "A", "C").unwrap(),
//!     Reservation::new("R3", 3, "A", "C").unwrap(),
//! ];
//!
//! let resolution = Resolver::new().resolve_all(&reservations, flights.clone());
//! assert_eq!(resolution.outcome(&ReservationId::from("R3")), Some(&Outcome::Unresolved));
//! assert_eq!(resolution.rollback(), flights);
//! ```

mod itinerary;
mod network;
mod resolve;
mod search;
mod select;

#[cfg(test)]
mod proptests;

pub use itinerary::Itinerary;
pub use network::{Capacities, FlightIndex, FlightNetwork};
pub use resolve::{
    resolution_order, Outcome, Resolution, ResolutionSummary, ResolvedReservation, Resolver,
};
pub use search::{has_itinerary, search};
pub use select::{
    downstream_impact, tightest_fit, LookaheadSelector, SelectionContext, SelectionStrategy,
    TightestFitSelector,
};
