//! Itinerary search.
//!
//! Depth-first enumeration of every simple path from a reservation's origin
//! to its destination whose flights all have room for the reservation.
//! The first hop is always taken before arrival is checked, so a reservation
//! whose origin equals its destination is only served by a cycle that
//! returns to it.

use std::ops::ControlFlow;

use crate::model::{Location, Reservation};

use super::{Capacities, FlightIndex, FlightNetwork, Itinerary};

/// Enumerates every feasible itinerary for `reservation`.
///
/// Itineraries come back in discovery order: departures are tried in input
/// order and each is explored fully before the next. Neither the network
/// nor the capacities are modified.
///
/// # Examples
///
/// ```
/// use seatplan::engine::{search, FlightNetwork};
/// use seatplan::{Flight, Reservation};
///
/// let network = FlightNetwork::new(vec![
///     Flight::new("F1", "A", "B", 8),
///     Flight::new("F2", "B", "C", 4),
///     Flight::new("F4", "A", "C", 5),
/// ]);
/// let reservation = Reservation::new("PNR02", 3, "A", "C").unwrap();
///
/// let found = search(&reservation, &network, &network.capacities());
/// let ids: Vec<Vec<String>> = found
///     .iter()
///     .map(|it| network.flight_ids(it).iter().map(|id| id.to_string()).collect())
///     .collect();
/// assert_eq!(ids, vec![vec!["F1", "F2"], vec!["F4"]]);
/// ```
#[must_use]
pub fn search(
    reservation: &Reservation,
    network: &FlightNetwork,
    capacities: &Capacities,
) -> Vec<Itinerary> {
    let mut found = Vec::new();
    let mut walk = Walk::new(reservation, network, capacities);
    let _ = walk.extend(reservation.origin(), &mut |legs| {
        found.push(Itinerary::new(legs.to_vec()));
        ControlFlow::Continue(())
    });

    log::trace!(
        "search {}: {} itinerar{}",
        reservation.id(),
        found.len(),
        if found.len() == 1 { "y" } else { "ies" }
    );
    found
}

/// Returns `true` if at least one feasible itinerary exists.
///
/// Same traversal as [`search`], stopping at the first completion.
#[must_use]
pub fn has_itinerary(
    reservation: &Reservation,
    network: &FlightNetwork,
    capacities: &Capacities,
) -> bool {
    let mut walk = Walk::new(reservation, network, capacities);
    walk.extend(reservation.origin(), &mut |_| ControlFlow::Break(()))
        .is_break()
}

/// Backtracking state for one search.
struct Walk<'a> {
    reservation: &'a Reservation,
    network: &'a FlightNetwork,
    capacities: &'a Capacities,
    path: Vec<FlightIndex>,
    on_path: Vec<bool>,
}

impl<'a> Walk<'a> {
    fn new(
        reservation: &'a Reservation,
        network: &'a FlightNetwork,
        capacities: &'a Capacities,
    ) -> Self {
        Self {
            reservation,
            network,
            capacities,
            path: Vec::new(),
            on_path: vec![false; network.len()],
        }
    }

    fn extend<F>(&mut self, from: &'a Location, visit: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&[FlightIndex]) -> ControlFlow<()>,
    {
        let network = self.network;
        let count = self.reservation.count();

        for &index in network.departures(from) {
            if self.on_path[index.get()] || self.capacities.get(index) < count {
                continue;
            }

            let arrival = network.flight(index).destination();
            self.path.push(index);
            self.on_path[index.get()] = true;

            let flow = if arrival == self.reservation.destination() {
                visit(&self.path)
            } else {
                self.extend(arrival, visit)
            };

            self.on_path[index.get()] = false;
            self.path.pop();

            if flow.is_break() {
                return flow;
            }
        }

        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::network::index;
    use crate::model::Flight;

    fn fixture() -> FlightNetwork {
        FlightNetwork::new(vec![
            Flight::new("F1", "A", "B", 8),
            Flight::new("F2", "A", "B", 4),
            Flight::new("F4", "A", "C", 5),
            Flight::new("F5", "C", "B", 7),
            Flight::new("F6", "A", "C", 6),
        ])
    }

    fn ids(network: &FlightNetwork, found: &[Itinerary]) -> Vec<Vec<String>> {
        found
            .iter()
            .map(|it| {
                network
                    .flight_ids(it)
                    .into_iter()
                    .map(|id| id.to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_search_enumerates_in_input_order() {
        let network = fixture();
        let reservation = Reservation::new("PNR01", 3, "A", "B").unwrap();

        let found = search(&reservation, &network, &network.capacities());
        assert_eq!(
            ids(&network, &found),
            vec![
                vec!["F1"],
                vec!["F2"],
                vec!["F4", "F5"],
                vec!["F6", "F5"],
            ]
        );
    }

    #[test]
    fn test_search_respects_capacity() {
        let network = fixture();
        let reservation = Reservation::new("PNR04", 8, "A", "B").unwrap();

        let found = search(&reservation, &network, &network.capacities());
        assert_eq!(ids(&network, &found), vec![vec!["F1"]]);
    }

    #[test]
    fn test_search_no_departures() {
        let network = fixture();
        let reservation = Reservation::new("PNR11", 1, "B", "A").unwrap();

        assert!(search(&reservation, &network, &network.capacities()).is_empty());
        assert!(!has_itinerary(&reservation, &network, &network.capacities()));
    }

    #[test]
    fn test_search_reads_given_snapshot() {
        let network = fixture();
        let mut capacities = network.capacities();
        capacities.commit(&Itinerary::new(vec![index(3)]), 5);

        let reservation = Reservation::new("PNR07", 3, "A", "B").unwrap();
        let found = search(&reservation, &network, &capacities);
        assert_eq!(ids(&network, &found), vec![vec!["F1"], vec!["F2"]]);
    }

    #[test]
    fn test_search_stops_at_destination() {
        // A->B->C->B must not be reported after A->B already arrived.
        let network = FlightNetwork::new(vec![
            Flight::new("F1", "A", "B", 5),
            Flight::new("F2", "B", "C", 5),
            Flight::new("F3", "C", "B", 5),
        ]);
        let reservation = Reservation::new("R1", 1, "A", "B").unwrap();

        let found = search(&reservation, &network, &network.capacities());
        assert_eq!(ids(&network, &found), vec![vec!["F1"]]);
    }

    #[test]
    fn test_search_never_repeats_a_flight() {
        // The B<->C loop would allow unbounded paths without the no-repeat rule.
        let network = FlightNetwork::new(vec![
            Flight::new("F1", "A", "B", 5),
            Flight::new("F2", "B", "C", 5),
            Flight::new("F3", "C", "B", 5),
            Flight::new("F4", "C", "D", 5),
        ]);
        let reservation = Reservation::new("R1", 1, "A", "D").unwrap();

        let found = search(&reservation, &network, &network.capacities());
        assert_eq!(ids(&network, &found), vec![vec!["F1", "F2", "F4"]]);
    }

    #[test]
    fn test_identical_flights_are_distinct() {
        let network = FlightNetwork::new(vec![
            Flight::new("X", "A", "B", 2),
            Flight::new("X", "A", "B", 2),
        ]);
        let reservation = Reservation::new("R1", 1, "A", "B").unwrap();

        let found = search(&reservation, &network, &network.capacities());
        assert_eq!(found.len(), 2);
        assert_ne!(found[0], found[1]);
    }

    #[test]
    fn test_same_origin_and_destination_needs_a_cycle() {
        let network = FlightNetwork::new(vec![
            Flight::new("F1", "A", "B", 5),
            Flight::new("F2", "B", "A", 5),
        ]);
        let round_trip = Reservation::new("R1", 2, "A", "A").unwrap();
        let found = search(&round_trip, &network, &network.capacities());
        assert_eq!(ids(&network, &found), vec![vec!["F1", "F2"]]);

        let stranded = Reservation::new("R2", 2, "C", "C").unwrap();
        assert!(search(&stranded, &network, &network.capacities()).is_empty());
    }

    #[test]
    fn test_has_itinerary_matches_search() {
        let network = fixture();
        let capacities = network.capacities();
        let cases = [(3, "A", "B"), (9, "A", "B"), (6, "A", "C"), (7, "C", "B")];
        for (count, origin, destination) in cases {
            let reservation = Reservation::new("R", count, origin, destination).unwrap();
            assert_eq!(
                has_itinerary(&reservation, &network, &capacities),
                !search(&reservation, &network, &capacities).is_empty(),
                "mismatch for {reservation}"
            );
        }
    }
}
