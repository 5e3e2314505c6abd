//! Trip splitting: direction labels and canonical stop order.
//!
//! Each trip takes exactly one of two paths, chosen by whether its route is
//! in the canonical sequence registry:
//!
//! - Unregistered routes are labelled by the `DirectionClassifier` and keep
//!   their feed stop order.
//! - Registered routes are aligned against both canonical sequences, the
//!   better match names the direction, and the stops are reordered with a
//!   `StopOrderComparator` bound to that sequence. A trip that runs to the
//!   end of one direction and carries on in the other is split in two.

mod align;
mod comparator;
mod config;
mod error;


use tracing::{debug, warn};

use crate::classify::DirectionClassifier;
use crate::domain::{OutputTrip, Route, StopTime, Trip};
use crate::registry::{CanonicalSequence, CanonicalSequenceRegistry, DirectionSpec};

pub use align::{alignment_score, alternate_collisions, first_required_order_violation};
pub use comparator::{Rank, StopOrderComparator};
pub use config::{AlternateCollisionPolicy, SplitterConfig};
pub use error::SplitError;

/// Output of splitting one trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Split {
    /// One labelled trip
    Single(OutputTrip),
    /// A turnaround trip split into its two directions, in travel order
    Turnaround(OutputTrip, OutputTrip),
}

impl Split {
    /// The output trips, in travel order.
    pub fn trips(&self) -> Vec<&OutputTrip> {
        match self {
            Split::Single(trip) => vec![trip],
            Split::Turnaround(first, second) => vec![first, second],
        }
    }

    /// Consume into the output trips, in travel order.
    pub fn into_trips(self) -> Vec<OutputTrip> {
        match self {
            Split::Single(trip) => vec![trip],
            Split::Turnaround(first, second) => vec![first, second],
        }
    }

    /// Returns true if the trip was split in two.
    pub fn is_turnaround(&self) -> bool {
        matches!(self, Split::Turnaround(..))
    }
}

/// Labels trips and orders their stops.
///
/// Holds only shared references to immutable data, so one splitter can
/// serve every trip of a batch and copies can run on separate threads.
#[derive(Debug, Clone)]
pub struct TripSplitter<'a> {
    registry: &'a CanonicalSequenceRegistry,
    classifier: &'a DirectionClassifier,
    config: SplitterConfig,
}

impl<'a> TripSplitter<'a> {
    /// Create a splitter over a registry and a classifier.
    pub fn new(
        registry: &'a CanonicalSequenceRegistry,
        classifier: &'a DirectionClassifier,
        config: SplitterConfig,
    ) -> Self {
        Self {
            registry,
            classifier,
            config,
        }
    }

    /// Label a trip and put its stops in canonical order.
    ///
    /// The input trip is never modified.
    pub fn split(&self, route: &Route, trip: &Trip) -> Result<Split, SplitError> {
        let Some(spec) = self.registry.lookup(route.id) else {
            let direction = self.classifier.classify(route, trip)?;
            return Ok(Split::Single(OutputTrip {
                trip_id: trip.id.clone(),
                route_id: route.id,
                direction,
                stop_times: trip.stop_times.clone(),
                governed_by_registry: false,
            }));
        };

        if self.config.split_turnarounds {
            if let Some((cut, first)) = find_turnaround(spec, &trip.stop_times) {
                let [a, b] = spec.sequences();
                let (outbound, inbound) = if first == 0 { (a, b) } else { (b, a) };
                debug!(
                    route = %route.id,
                    trip = %trip.id,
                    at = %trip.stop_times[cut].stop_id,
                    "Splitting turnaround trip"
                );
                return Ok(Split::Turnaround(
                    self.order(route, trip, outbound, &trip.stop_times[..=cut])?,
                    self.order(route, trip, inbound, &trip.stop_times[cut..])?,
                ));
            }
        }

        let sequence = align(route, trip, spec)?;
        Ok(Split::Single(self.order(
            route,
            trip,
            sequence,
            &trip.stop_times,
        )?))
    }

    /// Check and reorder stop-times against the winning sequence.
    fn order(
        &self,
        route: &Route,
        trip: &Trip,
        sequence: &CanonicalSequence,
        stop_times: &[StopTime],
    ) -> Result<OutputTrip, SplitError> {
        if let Some((earlier, later)) = first_required_order_violation(sequence, stop_times) {
            return Err(SplitError::RequiredOrderViolation {
                route: route.id,
                trip: trip.id.clone(),
                direction: sequence.direction(),
                earlier: earlier.clone(),
                later: later.clone(),
            });
        }

        for (first, second) in alternate_collisions(sequence, stop_times) {
            match self.config.alternate_collisions {
                AlternateCollisionPolicy::TieBreak => warn!(
                    route = %route.id,
                    trip = %trip.id,
                    direction = %sequence.direction(),
                    %first,
                    %second,
                    "Alternates of one slot in the same trip, ordering by feed sequence"
                ),
                AlternateCollisionPolicy::Reject => {
                    return Err(SplitError::AlternateCollision {
                        route: route.id,
                        trip: trip.id.clone(),
                        direction: sequence.direction(),
                        first: first.clone(),
                        second: second.clone(),
                    });
                }
            }
        }

        let comparator = StopOrderComparator::new(sequence, stop_times);
        Ok(OutputTrip {
            trip_id: trip.id.clone(),
            route_id: route.id,
            direction: sequence.direction(),
            stop_times: comparator.sorted(stop_times),
            governed_by_registry: true,
        })
    }
}

/// Pick the sequence the trip matches best.
fn align<'s>(
    route: &Route,
    trip: &Trip,
    spec: &'s DirectionSpec,
) -> Result<&'s CanonicalSequence, SplitError> {
    let [first, second] = spec.sequences();
    let first_score = alignment_score(first, &trip.stop_times);
    let second_score = alignment_score(second, &trip.stop_times);

    debug!(
        route = %route.id,
        trip = %trip.id,
        first = %first.direction(),
        first_score,
        second = %second.direction(),
        second_score,
        "Aligned trip"
    );

    match first_score.cmp(&second_score) {
        std::cmp::Ordering::Greater => Ok(first),
        std::cmp::Ordering::Less => Ok(second),
        std::cmp::Ordering::Equal => Err(SplitError::AmbiguousAlignment {
            route: route.id,
            trip: trip.id.clone(),
            first: first.direction(),
            second: second.direction(),
            score: first_score,
        }),
    }
}

/// Find an interior stop where the trip ends one direction and starts the
/// other.
///
/// Returns the cut position and the index of the sequence travelled before
/// the cut. The prefix must align strictly better to that sequence and the
/// suffix strictly better to the other.
fn find_turnaround(spec: &DirectionSpec, stop_times: &[StopTime]) -> Option<(usize, usize)> {
    let sequences = spec.sequences();
    for cut in 1..stop_times.len().saturating_sub(1) {
        let stop = &stop_times[cut].stop_id;
        for first in 0..2 {
            let outbound = &sequences[first];
            let inbound = &sequences[1 - first];
            if stop != outbound.last_slot_owner() || stop != inbound.first_slot_owner() {
                continue;
            }

            let prefix = &stop_times[..=cut];
            let suffix = &stop_times[cut..];
            if alignment_score(outbound, prefix) > alignment_score(inbound, prefix)
                && alignment_score(inbound, suffix) > alignment_score(outbound, suffix)
            {
                return Some((cut, first));
            }
        }
    }
    None
}
