//! The flight graph and its capacity snapshots.

use std::collections::HashMap;

use crate::model::{Flight, FlightId, Location};

use super::Itinerary;

/// Position of a flight inside a [`FlightNetwork`].
///
/// Indices are the identity the engine uses for the no-repeat rule: two
/// flights with identical attributes still have distinct indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlightIndex(usize);

impl FlightIndex {
    /// Returns the position in the network's flight list.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// The immutable shape of the flight graph for one resolution run.
///
/// Departures are indexed by origin and keep the input order of the flights,
/// which fixes the order in which itineraries are discovered.
///
/// # Examples
///
/// ```
/// use seatplan::engine::FlightNetwork;
/// use seatplan::{Flight, Location};
///
/// let network = FlightNetwork::new(vec![
///     Flight::new("F1", "A", "B", 8),
///     Flight::new("F2", "B", "C", 4),
/// ]);
/// assert_eq!(network.len(), 2);
/// assert_eq!(network.departures(&Location::from("A")).len(), 1);
/// assert!(network.departures(&Location::from("C")).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FlightNetwork {
    flights: Vec<Flight>,
    departures: HashMap<Location, Vec<FlightIndex>>,
}

impl FlightNetwork {
    /// Builds a network over the given flights.
    #[must_use]
    pub fn new(flights: Vec<Flight>) -> Self {
        let mut departures: HashMap<Location, Vec<FlightIndex>> = HashMap::new();
        for (position, flight) in flights.iter().enumerate() {
            departures
                .entry(flight.origin().clone())
                .or_default()
                .push(FlightIndex(position));
        }

        Self {
            flights,
            departures,
        }
    }

    /// Number of flights in the network.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Returns `true` if the network has no flights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Returns the flight at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the index does not belong to this network.
    #[must_use]
    pub fn flight(&self, index: FlightIndex) -> &Flight {
        &self.flights[index.0]
    }

    /// Returns all flights in input order, with the capacities they were
    /// built with.
    #[must_use]
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Looks up a flight index by id.
    #[must_use]
    pub fn index_of(&self, id: &FlightId) -> Option<FlightIndex> {
        self.flights
            .iter()
            .position(|flight| flight.id() == id)
            .map(FlightIndex)
    }

    /// Flights departing `origin`, in input order.
    #[must_use]
    pub fn departures(&self, origin: &Location) -> &[FlightIndex] {
        self.departures.get(origin).map_or(&[], Vec::as_slice)
    }

    /// Snapshot of the capacities the network was built with.
    #[must_use]
    pub fn capacities(&self) -> Capacities {
        Capacities(self.flights.iter().map(Flight::capacity).collect())
    }

    /// Resolves an itinerary's indices to flight ids, in path order.
    #[must_use]
    pub fn flight_ids(&self, itinerary: &Itinerary) -> Vec<FlightId> {
        itinerary
            .legs()
            .iter()
            .map(|&index| self.flight(index).id().clone())
            .collect()
    }

    /// Consumes the network and returns its flights carrying `capacities`.
    pub(crate) fn into_flights(self, capacities: &Capacities) -> Vec<Flight> {
        let mut flights = self.flights;
        for (flight, &remaining) in flights.iter_mut().zip(&capacities.0) {
            flight.set_capacity(remaining);
        }
        flights
    }
}

/// Remaining seats of every flight in a network, indexed by [`FlightIndex`].
///
/// Search only reads a snapshot. Selection clones one per candidate so that
/// speculative commits never touch the run's authoritative state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capacities(Vec<u32>);

impl Capacities {
    /// Remaining seats on the flight at `index`.
    #[must_use]
    pub fn get(&self, index: FlightIndex) -> u32 {
        self.0[index.0]
    }

    /// Sum of remaining seats across the itinerary's flights.
    #[must_use]
    pub fn aggregate(&self, itinerary: &Itinerary) -> u64 {
        itinerary
            .legs()
            .iter()
            .map(|&index| u64::from(self.get(index)))
            .sum()
    }

    /// Deducts `count` seats from every flight of the itinerary.
    ///
    /// # Panics
    ///
    /// Panics if any flight has fewer than `count` seats left. Search only
    /// yields itineraries that fit, so this signals a broken caller.
    pub fn commit(&mut self, itinerary: &Itinerary, count: u32) {
        for &index in itinerary.legs() {
            let current = self.0[index.0];
            let Some(remaining) = current.checked_sub(count) else {
                panic!(
                    "committing {count} seats onto flight #{} with only {current} left",
                    index.0
                );
            };
            self.0[index.0] = remaining;
        }
    }

    /// Gives `count` seats back to every flight of the itinerary.
    pub fn release(&mut self, itinerary: &Itinerary, count: u32) {
        for &index in itinerary.legs() {
            self.0[index.0] += count;
        }
    }

    /// Capacities as a plain slice, in flight order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

#[cfg(test)]
pub(crate) fn index(position: usize) -> FlightIndex {
    FlightIndex(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> FlightNetwork {
        FlightNetwork::new(vec![
            Flight::new("F1", "A", "B", 8),
            Flight::new("F2", "A", "B", 4),
            Flight::new("F5", "C", "B", 7),
        ])
    }

    #[test]
    fn test_departures_keep_input_order() {
        let network = network();
        let from_a = network.departures(&Location::from("A"));
        assert_eq!(from_a, &[index(0), index(1)]);
        assert_eq!(network.departures(&Location::from("C")), &[index(2)]);
        assert!(network.departures(&Location::from("Z")).is_empty());
    }

    #[test]
    fn test_index_of() {
        let network = network();
        assert_eq!(network.index_of(&FlightId::from("F5")), Some(index(2)));
        assert_eq!(network.index_of(&FlightId::from("F9")), None);
    }

    #[test]
    fn test_commit_and_release() {
        let network = network();
        let mut capacities = network.capacities();
        let itinerary = Itinerary::new(vec![index(1)]);

        capacities.commit(&itinerary, 3);
        assert_eq!(capacities.as_slice(), &[8, 1, 7]);

        capacities.release(&itinerary, 3);
        assert_eq!(capacities, network.capacities());
    }

    #[test]
    #[should_panic(expected = "committing 5 seats")]
    fn test_commit_over_capacity_panics() {
        let network = network();
        let mut capacities = network.capacities();
        capacities.commit(&Itinerary::new(vec![index(1)]), 5);
    }

    #[test]
    fn test_aggregate() {
        let network = network();
        let capacities = network.capacities();
        let itinerary = Itinerary::new(vec![index(0), index(2)]);
        assert_eq!(capacities.aggregate(&itinerary), 15);
    }

    #[test]
    fn test_into_flights_applies_capacities() {
        let network = network();
        let mut capacities = network.capacities();
        capacities.commit(&Itinerary::new(vec![index(0)]), 8);

        let flights = network.into_flights(&capacities);
        assert_eq!(flights[0].capacity(), 0);
        assert_eq!(flights[1].capacity(), 4);
        assert_eq!(flights[2].capacity(), 7);
    }
}
