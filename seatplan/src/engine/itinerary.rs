//! Itineraries: ordered paths of flights through a network.

use super::FlightIndex;

/// A non-empty, repeat-free sequence of flights leading from a reservation's
/// origin to its destination.
///
/// An itinerary only references flights by [`FlightIndex`]; resolve them
/// against the [`super::FlightNetwork`] it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Itinerary(Vec<FlightIndex>);

impl Itinerary {
    pub(crate) fn new(legs: Vec<FlightIndex>) -> Self {
        debug_assert!(!legs.is_empty(), "itineraries are never empty");
        Self(legs)
    }

    /// The flights of the itinerary, in travel order.
    #[must_use]
    pub fn legs(&self) -> &[FlightIndex] {
        &self.0
    }

    /// Number of flights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the itinerary uses the flight at `index`.
    #[must_use]
    pub fn contains(&self, index: FlightIndex) -> bool {
        self.0.contains(&index)
    }
}
