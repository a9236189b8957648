//! Itinerary selection strategies.
//!
//! A strategy picks one itinerary out of the feasible set for the
//! reservation at the current cursor. Two strategies are provided:
//!
//! - [`LookaheadSelector`]: scores each candidate by the seats of later
//!   reservations it would leave without any itinerary, then breaks ties with
//!   the tightest-fit rule.
//! - [`TightestFitSelector`]: the tightest-fit rule alone. Cheaper, and
//!   blind to downstream demand.

use crate::model::Reservation;

use super::search::has_itinerary;
use super::{Capacities, FlightNetwork, Itinerary};

/// Everything a strategy may look at when choosing.
///
/// `order` is the full resolution order and `cursor` the position of the
/// reservation being resolved; everything after the cursor is still pending.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    /// The run's flight graph.
    pub network: &'a FlightNetwork,
    /// Capacities before the current reservation commits.
    pub capacities: &'a Capacities,
    /// Reservations in resolution order.
    pub order: &'a [Reservation],
    /// Position of the reservation being resolved.
    pub cursor: usize,
}

impl<'a> SelectionContext<'a> {
    /// The reservation being resolved.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is past the end of `order`.
    #[must_use]
    pub fn current(&self) -> &'a Reservation {
        &self.order[self.cursor]
    }

    /// Reservations strictly after the cursor.
    #[must_use]
    pub fn remaining(&self) -> &'a [Reservation] {
        self.order.get(self.cursor + 1..).unwrap_or(&[])
    }
}

/// Chooses one itinerary among feasible candidates.
///
/// Implementations must not assume anything about the order of candidates
/// beyond what [`super::search`] guarantees, and must return a position
/// inside `candidates`.
pub trait SelectionStrategy: Send + Sync {
    /// Short name used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Returns the position of the chosen candidate, or `None` when
    /// `candidates` is empty.
    fn select(&self, candidates: &[Itinerary], context: &SelectionContext<'_>) -> Option<usize>;
}

impl<S: SelectionStrategy + ?Sized> SelectionStrategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn select(&self, candidates: &[Itinerary], context: &SelectionContext<'_>) -> Option<usize> {
        (**self).select(candidates, context)
    }
}

/// Exact one-ply lookahead with a tightest-fit tie-break.
///
/// Each candidate is committed onto its own copy of the baseline capacities;
/// every pending reservation is then checked for at least one itinerary. The
/// candidate whose commit strands the fewest seats wins, and among equals the
/// one with the least aggregate baseline capacity.
///
/// # Examples
///
/// ```
/// use seatplan::engine::{
///     search, FlightNetwork, LookaheadSelector, SelectionContext, SelectionStrategy,
/// };
/// use seatplan::{Flight, Reservation};
///
/// let network = FlightNetwork::new(vec![
///     Flight::new("F1", "A", "B", 5),
///     Flight::new("F2", "B", "C", 4),
///     Flight::new("F4", "A", "C", 100),
/// ]);
/// let order = vec![
///     Reservation::new("PNR02", 4, "A", "C").unwrap(),
///     Reservation::new("PNR01", 2, "B", "C").unwrap(),
/// ];
/// let capacities = network.capacities();
/// let candidates = search(&order[0], &network, &capacities);
///
/// let context = SelectionContext {
///     network: &network,
///     capacities: &capacities,
///     order: &order,
///     cursor: 0,
/// };
/// let chosen = LookaheadSelector.select(&candidates, &context).unwrap();
/// assert_eq!(network.flight_ids(&candidates[chosen])[0].as_str(), "F4");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookaheadSelector;

impl SelectionStrategy for LookaheadSelector {
    fn name(&self) -> &'static str {
        "lookahead"
    }

    fn select(&self, candidates: &[Itinerary], context: &SelectionContext<'_>) -> Option<usize> {
        if candidates.len() == 1 {
            return Some(0);
        }

        let scores: Vec<u64> = candidates
            .iter()
            .map(|candidate| downstream_impact(candidate, context))
            .collect();
        let best = *scores.iter().min()?;

        let survivors: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == best)
            .map(|(position, _)| position)
            .collect();

        log::trace!(
            "lookahead {}: scores {:?}, {} survivor(s)",
            context.current().id(),
            scores,
            survivors.len()
        );

        tightest_fit(
            survivors.iter().map(|&position| &candidates[position]),
            context.capacities,
        )
        .map(|winner| survivors[winner])
    }
}

/// Always the candidate with the least aggregate capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TightestFitSelector;

impl SelectionStrategy for TightestFitSelector {
    fn name(&self) -> &'static str {
        "tightest-fit"
    }

    fn select(&self, candidates: &[Itinerary], context: &SelectionContext<'_>) -> Option<usize> {
        tightest_fit(candidates.iter(), context.capacities)
    }
}

/// Seats of pending reservations left without any itinerary if `candidate`
/// were committed for the current reservation.
///
/// The baseline in `context` is not modified; the commit happens on a copy.
#[must_use]
pub fn downstream_impact(candidate: &Itinerary, context: &SelectionContext<'_>) -> u64 {
    let mut speculative = context.capacities.clone();
    speculative.commit(candidate, context.current().count());

    context
        .remaining()
        .iter()
        .filter(|pending| !has_itinerary(pending, context.network, &speculative))
        .map(|pending| u64::from(pending.count()))
        .sum()
}

/// Position of the itinerary with the smallest aggregate capacity.
///
/// The first occurrence wins on ties. Returns `None` for an empty input.
pub fn tightest_fit<'i>(
    itineraries: impl IntoIterator<Item = &'i Itinerary>,
    capacities: &Capacities,
) -> Option<usize> {
    itineraries
        .into_iter()
        .map(|itinerary| capacities.aggregate(itinerary))
        .enumerate()
        .min_by_key(|&(position, total)| (total, position))
        .map(|(position, _)| position)
}
