//! Property-based tests for search and resolution.

use super::*;
use crate::model::{Flight, Reservation};
use proptest::prelude::*;

const LOCATIONS: [&str; 4] = ["A", "B", "C", "D"];

fn location() -> impl Strategy<Value = &'static str> {
    prop::sample::select(LOCATIONS.to_vec())
}

fn flights_strategy() -> impl Strategy<Value = Vec<Flight>> {
    prop::collection::vec((location(), location(), 0u32..10), 0..8).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(n, (origin, destination, capacity))| {
                Flight::new(format!("F{n}"), origin, destination, capacity)
            })
            .collect()
    })
}

fn reservations_strategy() -> impl Strategy<Value = Vec<Reservation>> {
    prop::collection::vec((1u32..6, location(), location()), 0..7).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(n, (count, origin, destination))| {
                Reservation::new(format!("PNR{n:02}"), count, origin, destination).unwrap()
            })
            .collect()
    })
}

fn reservation_strategy() -> impl Strategy<Value = Reservation> {
    (1u32..6, location(), location()).prop_map(|(count, origin, destination)| {
        Reservation::new("R", count, origin, destination).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // No flight appears twice within one itinerary
    #[test]
    fn search_never_repeats(flights in flights_strategy(), reservation in reservation_strategy()) {
        let network = FlightNetwork::new(flights);
        for itinerary in search(&reservation, &network, &network.capacities()) {
            let mut legs = itinerary.legs().to_vec();
            legs.sort();
            legs.dedup();
            prop_assert_eq!(legs.len(), itinerary.len());
        }
    }

    // Itineraries are continuous paths from origin to destination, and every
    // leg can hold the reservation
    #[test]
    fn search_paths_are_valid(flights in flights_strategy(), reservation in reservation_strategy()) {
        let network = FlightNetwork::new(flights);
        let capacities = network.capacities();
        for itinerary in search(&reservation, &network, &capacities) {
            prop_assert!(!itinerary.is_empty());
            let legs: Vec<&Flight> = itinerary.legs().iter().map(|&i| network.flight(i)).collect();
            prop_assert_eq!(legs[0].origin(), reservation.origin());
            prop_assert_eq!(legs[legs.len() - 1].destination(), reservation.destination());
            for pair in legs.windows(2) {
                prop_assert_eq!(pair[0].destination(), pair[1].origin());
            }
            for &index in itinerary.legs() {
                prop_assert!(capacities.get(index) >= reservation.count());
            }
        }
    }

    // The early-exit query agrees with full enumeration
    #[test]
    fn has_itinerary_agrees_with_search(flights in flights_strategy(), reservation in reservation_strategy()) {
        let network = FlightNetwork::new(flights);
        let capacities = network.capacities();
        prop_assert_eq!(
            has_itinerary(&reservation, &network, &capacities),
            !search(&reservation, &network, &capacities).is_empty()
        );
    }

    // Replaying every commit backwards restores the input capacities
    #[test]
    fn resolution_conserves_capacity(flights in flights_strategy(), reservations in reservations_strategy()) {
        let resolution = Resolver::new().resolve_all(&reservations, flights.clone());
        prop_assert_eq!(resolution.rollback(), flights.clone());

        let tightest = Resolver::with_strategy(TightestFitSelector).resolve_all(&reservations, flights.clone());
        prop_assert_eq!(tightest.rollback(), flights);
    }

    // Exactly one entry per reservation, processed in descending count order
    #[test]
    fn resolution_covers_every_reservation(flights in flights_strategy(), reservations in reservations_strategy()) {
        let resolution = Resolver::new().resolve_all(&reservations, flights);
        prop_assert_eq!(resolution.entries().len(), reservations.len());
        prop_assert_eq!(resolution.mapping().len(), reservations.len());
        for pair in resolution.entries().windows(2) {
            prop_assert!(pair[0].reservation().count() >= pair[1].reservation().count());
        }
    }

    // Every leg of a committed itinerary had room right before its commit
    #[test]
    fn commits_respect_feasibility(flights in flights_strategy(), reservations in reservations_strategy()) {
        let resolution = Resolver::new().resolve_all(&reservations, flights.clone());
        let network = FlightNetwork::new(flights);
        let mut capacities = network.capacities();
        for entry in resolution.entries() {
            if let Some(itinerary) = entry.itinerary() {
                for &index in itinerary.legs() {
                    prop_assert!(capacities.get(index) >= entry.reservation().count());
                }
                capacities.commit(itinerary, entry.reservation().count());
            }
        }
        let finals = network_capacities(resolution.flights());
        prop_assert_eq!(capacities.as_slice(), finals.as_slice());
    }

    // Same input, same output
    #[test]
    fn resolution_is_deterministic(flights in flights_strategy(), reservations in reservations_strategy()) {
        let first = Resolver::new().resolve_all(&reservations, flights.clone());
        let second = Resolver::new().resolve_all(&reservations, flights);
        prop_assert_eq!(first, second);
    }
}

fn network_capacities(flights: &[Flight]) -> Vec<u32> {
    flights.iter().map(Flight::capacity).collect()
}
