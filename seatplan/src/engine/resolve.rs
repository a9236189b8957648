//! The sequential resolution loop.
//!
//! Reservations are resolved largest first. Each one is searched against the
//! capacities left by the reservations before it, a strategy picks one of
//! the feasible itineraries, and that itinerary is committed for good.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::model::{Flight, FlightId, Reservation, ReservationId};

use super::search::search;
use super::select::{LookaheadSelector, SelectionContext, SelectionStrategy};
use super::{Capacities, FlightNetwork, Itinerary};

/// What happened to one reservation.
///
/// Serializes as the list of flight ids, or `null` when unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The reservation travels on these flights, in order.
    Assigned(Vec<FlightId>),
    /// No feasible itinerary was left when the reservation's turn came.
    Unresolved,
}

impl Outcome {
    /// Returns the assigned flight ids, if any.
    #[must_use]
    pub fn flights(&self) -> Option<&[FlightId]> {
        match self {
            Self::Assigned(ids) => Some(ids),
            Self::Unresolved => None,
        }
    }

    /// Returns `true` for [`Outcome::Unresolved`].
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Assigned(ids) => ids.serialize(serializer),
            Self::Unresolved => serializer.serialize_none(),
        }
    }
}

/// One entry of a [`Resolution`], in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReservation {
    reservation: Reservation,
    itinerary: Option<Itinerary>,
    outcome: Outcome,
}

impl ResolvedReservation {
    /// The reservation this entry belongs to.
    #[must_use]
    pub fn reservation(&self) -> &Reservation {
        &self.reservation
    }

    /// The committed itinerary, as indices into the run's flights.
    #[must_use]
    pub fn itinerary(&self) -> Option<&Itinerary> {
        self.itinerary.as_ref()
    }

    /// The outcome recorded for the reservation.
    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

/// Totals over a resolution run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionSummary {
    /// Reservations processed.
    pub reservations: usize,
    /// Reservations that received an itinerary.
    pub assigned: usize,
    /// Reservations left without one.
    pub unresolved: usize,
    /// Seats placed on flights.
    pub seats_assigned: u64,
    /// Seats of unresolved reservations.
    pub seats_unresolved: u64,
}

/// Result of a resolution run: one outcome per reservation plus the flights
/// with their remaining capacities.
///
/// Serializes as `{"resolution": {id: [flight ids] | null}, "flights": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    entries: Vec<ResolvedReservation>,
    flights: Vec<Flight>,
}

impl Resolution {
    /// Entries in the order the reservations were processed.
    #[must_use]
    pub fn entries(&self) -> &[ResolvedReservation] {
        &self.entries
    }

    /// Flights in input order, carrying their final capacities.
    #[must_use]
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Consumes the resolution and returns the final flights.
    #[must_use]
    pub fn into_flights(self) -> Vec<Flight> {
        self.flights
    }

    /// Outcome for a reservation id.
    #[must_use]
    pub fn outcome(&self, id: &ReservationId) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|entry| entry.reservation.id() == id)
            .map(|entry| &entry.outcome)
    }

    /// The mapping from reservation id to outcome.
    #[must_use]
    pub fn mapping(&self) -> BTreeMap<&ReservationId, &Outcome> {
        self.entries
            .iter()
            .map(|entry| (entry.reservation.id(), &entry.outcome))
            .collect()
    }

    /// Entries that received an itinerary.
    pub fn assigned(&self) -> impl Iterator<Item = &ResolvedReservation> {
        self.entries.iter().filter(|entry| entry.itinerary.is_some())
    }

    /// Entries left unresolved.
    pub fn unresolved(&self) -> impl Iterator<Item = &ResolvedReservation> {
        self.entries.iter().filter(|entry| entry.itinerary.is_none())
    }

    /// Totals over the run.
    #[must_use]
    pub fn summary(&self) -> ResolutionSummary {
        self.entries
            .iter()
            .fold(ResolutionSummary::default(), |mut summary, entry| {
                let seats = u64::from(entry.reservation.count());
                summary.reservations += 1;
                if entry.itinerary.is_some() {
                    summary.assigned += 1;
                    summary.seats_assigned += seats;
                } else {
                    summary.unresolved += 1;
                    summary.seats_unresolved += seats;
                }
                summary
            })
    }

    /// Undoes every commit, newest first, and returns the flights as they
    /// were before the run.
    ///
    /// Comparing the result with the input flights checks that each commit
    /// deducted exactly its reservation's count.
    #[must_use]
    pub fn rollback(&self) -> Vec<Flight> {
        let network = FlightNetwork::new(self.flights.clone());
        let mut capacities = network.capacities();
        for entry in self.entries.iter().rev() {
            if let Some(itinerary) = &entry.itinerary {
                capacities.release(itinerary, entry.reservation.count());
            }
        }
        network.into_flights(&capacities)
    }
}

impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Document<'a> {
            resolution: BTreeMap<&'a ReservationId, &'a Outcome>,
            flights: &'a [Flight],
        }

        Document {
            resolution: self.mapping(),
            flights: &self.flights,
        }
        .serialize(serializer)
    }
}

/// Builds the resolution order: largest count first, input order among
/// equal counts.
#[must_use]
pub fn resolution_order(reservations: &[Reservation]) -> Vec<Reservation> {
    let mut order = reservations.to_vec();
    order.sort_by(|a, b| b.count().cmp(&a.count()));
    order
}

/// Runs the resolution loop with a selection strategy.
///
/// # Examples
///
/// ```
/// use seatplan::engine::{Outcome, Resolver};
/// use seatplan::{Flight, FlightId, Reservation, ReservationId};
///
/// let flights = vec![Flight::new("F1", "A", "B", 8), Flight::new("F2", "A", "B", 4)];
/// let reservations = vec![Reservation::new("R1", 3, "A", "B").unwrap()];
///
/// let resolution = Resolver::new().resolve_all(&reservations, flights);
/// assert_eq!(
///     resolution.outcome(&ReservationId::from("R1")),
///     Some(&Outcome::Assigned(vec![FlightId::from("F2")]))
/// );
/// assert_eq!(resolution.flights()[1].capacity(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver<S: SelectionStrategy = LookaheadSelector> {
    strategy: S,
}

impl Resolver<LookaheadSelector> {
    /// Creates a resolver using the lookahead strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategy(LookaheadSelector)
    }
}

impl<S: SelectionStrategy> Resolver<S> {
    /// Creates a resolver using the given strategy.
    #[must_use]
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    /// The strategy this resolver selects with.
    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Resolves every reservation against `flights`.
    ///
    /// The flights are owned by this run; the returned [`Resolution`] hands
    /// them back with the capacities left after all commits. Reservation ids
    /// are expected to be unique.
    #[must_use]
    pub fn resolve_all(&self, reservations: &[Reservation], flights: Vec<Flight>) -> Resolution {
        let order = resolution_order(reservations);
        let network = FlightNetwork::new(flights);
        let mut capacities = network.capacities();

        log::debug!(
            "resolving {} reservation(s) over {} flight(s) with {}",
            order.len(),
            network.len(),
            self.strategy.name()
        );

        let mut entries = Vec::with_capacity(order.len());
        for cursor in 0..order.len() {
            let itinerary = self.resolve_one(&order, &network, &mut capacities, cursor);
            let outcome = match &itinerary {
                Some(itinerary) => Outcome::Assigned(network.flight_ids(itinerary)),
                None => Outcome::Unresolved,
            };

            match &outcome {
                Outcome::Assigned(ids) => log::debug!(
                    "{} -> {}",
                    order[cursor],
                    ids.iter()
                        .map(FlightId::as_str)
                        .collect::<Vec<_>>()
                        .join(" > ")
                ),
                Outcome::Unresolved => log::debug!("{} -> unresolved", order[cursor]),
            }

            entries.push(ResolvedReservation {
                reservation: order[cursor].clone(),
                itinerary,
                outcome,
            });
        }

        Resolution {
            entries,
            flights: network.into_flights(&capacities),
        }
    }

    /// Resolves the reservation at `cursor` of `order` and commits the chosen
    /// itinerary onto `capacities`.
    ///
    /// Returns `None`, leaving `capacities` untouched, when no itinerary fits.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is out of bounds.
    pub fn resolve_one(
        &self,
        order: &[Reservation],
        network: &FlightNetwork,
        capacities: &mut Capacities,
        cursor: usize,
    ) -> Option<Itinerary> {
        let reservation = &order[cursor];
        let mut candidates = search(reservation, network, capacities);
        if candidates.is_empty() {
            return None;
        }

        let context = SelectionContext {
            network,
            capacities,
            order,
            cursor,
        };
        let chosen = self.strategy.select(&candidates, &context)?;
        let itinerary = candidates.swap_remove(chosen);

        capacities.commit(&itinerary, reservation.count());
        Some(itinerary)
    }
}
