//! Ordering of a trip's stop-times against a canonical sequence.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::StopTime;
use crate::registry::CanonicalSequence;

/// Sort key of a stop-time within one trip.
///
/// Ordered by canonical slot first, then by the feed's sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank {
    pub slot: usize,
    pub sequence: u32,
}

/// Orders stop-times of one trip relative to a canonical sequence.
///
/// Known stops rank at their canonical slot (alternates at the slot they
/// substitute). Stops the sequence does not know rank at the slot of the
/// nearest preceding known stop in feed order, or of the nearest following
/// one when none precedes, so they stay next to the neighbour the feed put
/// them beside. Ties within a slot are broken by feed sequence number.
///
/// Every comparison reduces to comparing two `Rank` tuples, which makes
/// `compare` a strict weak ordering with no hidden state.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use direction_splitter::domain::{Direction, StopId, StopTime};
/// use direction_splitter::registry::CanonicalSequence;
/// use direction_splitter::splitter::StopOrderComparator;
///
/// let east = CanonicalSequence::builder(Direction::East)
///     .required("5292")
///     .required("14260")
///     .build()
///     .unwrap();
/// let trip = vec![
///     StopTime::new(StopId::parse("14260").unwrap(), 1),
///     StopTime::new(StopId::parse("5292").unwrap(), 2),
/// ];
///
/// let comparator = StopOrderComparator::new(&east, &trip);
/// assert_eq!(comparator.compare(&trip[1], &trip[0]), Ordering::Less);
/// ```
#[derive(Debug, Clone)]
pub struct StopOrderComparator<'a> {
    sequence: &'a CanonicalSequence,
    /// Feed sequence number to slot, for the trip's known stops
    known: BTreeMap<u32, usize>,
}

impl<'a> StopOrderComparator<'a> {
    /// Bind a comparator to a canonical sequence and the trip being ordered.
    pub fn new(sequence: &'a CanonicalSequence, stop_times: &[StopTime]) -> Self {
        let known = stop_times
            .iter()
            .filter_map(|st| sequence.slot_of(&st.stop_id).map(|slot| (st.sequence, slot)))
            .collect();
        Self { sequence, known }
    }

    /// Sort key of a stop-time.
    pub fn rank(&self, stop_time: &StopTime) -> Rank {
        let slot = self
            .sequence
            .slot_of(&stop_time.stop_id)
            .unwrap_or_else(|| self.neighbour_slot(stop_time.sequence));
        Rank {
            slot,
            sequence: stop_time.sequence,
        }
    }

    /// Orders `a` relative to `b`: `Less` is before, `Greater` is after.
    pub fn compare(&self, a: &StopTime, b: &StopTime) -> Ordering {
        self.rank(a).cmp(&self.rank(b))
    }

    /// Returns the stop-times in canonical order, leaving the input untouched.
    pub fn sorted(&self, stop_times: &[StopTime]) -> Vec<StopTime> {
        let mut ordered = stop_times.to_vec();
        ordered.sort_by(|a, b| self.compare(a, b));
        ordered
    }

    fn neighbour_slot(&self, sequence: u32) -> usize {
        self.known
            .range(..sequence)
            .next_back()
            .or_else(|| self.known.range(sequence..).next())
            .map(|(_, &slot)| slot)
            // No known stop at all: feed order decides
            .unwrap_or(0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Direction, StopId};
    use proptest::prelude::*;

    /// Slot owners "R0".."R5"; alternates "A0a", "A0b" .. for each slot.
    fn fixture() -> CanonicalSequence {
        let mut builder = CanonicalSequence::builder(Direction::East);
        for i in 0..6 {
            builder = builder
                .required(&format!("R{i}"))
                .alternate(&format!("A{i}a"), &format!("R{i}"))
                .alternate(&format!("A{i}b"), &format!("R{i}"));
        }
        builder.build().unwrap()
    }

    fn st(stop: &str, sequence: u32) -> StopTime {
        StopTime::new(StopId::parse(stop).unwrap(), sequence)
    }

    /// A trip: a permutation of the slot owners plus injected alternates and
    /// unknown stops, with distinct feed sequence numbers.
    fn trip_strategy() -> impl Strategy<Value = Vec<StopTime>> {
        let required: Vec<String> = (0..6).map(|i| format!("R{i}")).collect();
        (
            Just(required).prop_shuffle(),
            prop::collection::vec((0usize..6, any::<bool>()), 0..6),
            prop::collection::vec(0u32..100, 0..4),
        )
            .prop_map(|(required, alternates, unknown)| {
                let mut stops: Vec<String> = required;
                for (slot, a) in alternates {
                    let suffix = if a { "a" } else { "b" };
                    stops.push(format!("A{slot}{suffix}"));
                }
                for u in unknown {
                    stops.push(format!("U{u}"));
                }
                stops
            })
            .prop_shuffle()
            .prop_map(|stops| {
                stops
                    .iter()
                    .enumerate()
                    .map(|(i, s)| st(s, (i as u32 + 1) * 10))
                    .collect()
            })
    }

    proptest! {
        /// compare is irreflexive and antisymmetric on distinct stop-times
        #[test]
        fn antisymmetric(trip in trip_strategy()) {
            let seq = fixture();
            let cmp = StopOrderComparator::new(&seq, &trip);
            for a in &trip {
                prop_assert_eq!(cmp.compare(a, a), Ordering::Equal);
                for b in &trip {
                    prop_assert_eq!(cmp.compare(a, b), cmp.compare(b, a).reverse());
                    if a.sequence != b.sequence {
                        prop_assert_ne!(cmp.compare(a, b), Ordering::Equal);
                    }
                }
            }
        }

        /// compare is transitive over every triple
        #[test]
        fn transitive(trip in trip_strategy()) {
            let seq = fixture();
            let cmp = StopOrderComparator::new(&seq, &trip);
            for a in &trip {
                for b in &trip {
                    for c in &trip {
                        if cmp.compare(a, b) == Ordering::Less
                            && cmp.compare(b, c) == Ordering::Less
                        {
                            prop_assert_eq!(cmp.compare(a, c), Ordering::Less);
                        }
                    }
                }
            }
        }

        /// Repeated comparisons agree, and a fresh comparator agrees too
        #[test]
        fn deterministic(trip in trip_strategy()) {
            let seq = fixture();
            let first = StopOrderComparator::new(&seq, &trip);
            let second = StopOrderComparator::new(&seq, &trip);
            for a in &trip {
                for b in &trip {
                    prop_assert_eq!(first.compare(a, b), first.compare(a, b));
                    prop_assert_eq!(first.compare(a, b), second.compare(a, b));
                }
            }
        }

        /// Sorting puts known stops in non-decreasing slot order
        #[test]
        fn sorted_known_stops_follow_slots(trip in trip_strategy()) {
            let seq = fixture();
            let cmp = StopOrderComparator::new(&seq, &trip);
            let slots: Vec<usize> = cmp
                .sorted(&trip)
                .iter()
                .filter_map(|st| seq.slot_of(&st.stop_id))
                .collect();
            prop_assert!(slots.windows(2).all(|w| w[0] <= w[1]));
        }

        /// Sorting twice is the same as sorting once
        #[test]
        fn sorting_is_idempotent(trip in trip_strategy()) {
            let seq = fixture();
            let cmp = StopOrderComparator::new(&seq, &trip);
            let once = cmp.sorted(&trip);
            let twice = StopOrderComparator::new(&seq, &once).sorted(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
