//! Alignment of a trip against canonical sequences.

use std::collections::HashMap;

use crate::domain::{StopId, StopTime};
use crate::registry::{CanonicalSequence, Role};

/// Number of the sequence's required stops the trip visits in canonical
/// order: the longest common subsequence of the two stop lists.
///
/// Loop anchors are shared by both directions of a route and never count.
pub fn alignment_score(sequence: &CanonicalSequence, stop_times: &[StopTime]) -> usize {
    let canonical = sequence.required_stops();
    if canonical.is_empty() || stop_times.is_empty() {
        return 0;
    }

    // Single-row LCS table over the required stops
    let mut row = vec![0usize; canonical.len() + 1];
    for st in stop_times {
        let mut diagonal = 0;
        for (j, stop) in canonical.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if &st.stop_id == stop {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[canonical.len()]
}

/// First pair of required stops the trip visits against canonical order.
///
/// Returns `(earlier, later)` in feed order. Loop anchors may repeat and
/// are not checked.
pub fn first_required_order_violation<'t>(
    sequence: &CanonicalSequence,
    stop_times: &'t [StopTime],
) -> Option<(&'t StopId, &'t StopId)> {
    let mut previous: Option<(&StopId, usize)> = None;
    for st in stop_times {
        let Some(entry) = sequence.resolve(&st.stop_id) else {
            continue;
        };
        if entry.role != Role::Required {
            continue;
        }
        if let Some((earlier, slot)) = previous {
            if entry.slot <= slot {
                return Some((earlier, &st.stop_id));
            }
        }
        previous = Some((&st.stop_id, entry.slot));
    }
    None
}

/// Pairs of distinct alternates for the same slot visited by one trip.
pub fn alternate_collisions<'t>(
    sequence: &CanonicalSequence,
    stop_times: &'t [StopTime],
) -> Vec<(&'t StopId, &'t StopId)> {
    let mut seen: HashMap<usize, &StopId> = HashMap::new();
    let mut collisions = Vec::new();
    for st in stop_times {
        let Some(entry) = sequence.resolve(&st.stop_id) else {
            continue;
        };
        if entry.role != Role::Alternate {
            continue;
        }
        match seen.get(&entry.slot) {
            Some(&first) if first != &st.stop_id => collisions.push((first, &st.stop_id)),
            Some(_) => {}
            None => {
                seen.insert(entry.slot, &st.stop_id);
            }
        }
    }
    collisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;

    fn st(stop: &str, sequence: u32) -> StopTime {
        StopTime::new(StopId::parse(stop).unwrap(), sequence)
    }

    fn trip(stops: &[&str]) -> Vec<StopTime> {
        stops
            .iter()
            .enumerate()
            .map(|(i, s)| st(s, i as u32 + 1))
            .collect()
    }

    fn stop(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    fn sequence() -> CanonicalSequence {
        CanonicalSequence::builder(Direction::East)
            .loop_anchor("L")
            .required("A")
            .alternate("A1", "A")
            .alternate("A2", "A")
            .required("B")
            .required("C")
            .required("D")
            .build()
            .unwrap()
    }

    #[test]
    fn score_counts_in_order_matches() {
        let seq = sequence();
        assert_eq!(alignment_score(&seq, &trip(&["A", "B", "C", "D"])), 4);
        assert_eq!(alignment_score(&seq, &trip(&["A", "x", "C"])), 2);
        assert_eq!(alignment_score(&seq, &trip(&["D", "C", "B", "A"])), 1);
        assert_eq!(alignment_score(&seq, &trip(&["B", "A", "C", "D"])), 3);
    }

    #[test]
    fn score_ignores_alternates_and_unknown_stops() {
        let seq = sequence();
        assert_eq!(alignment_score(&seq, &trip(&["A1", "A2", "zz"])), 0);
        assert_eq!(alignment_score(&seq, &[]), 0);
    }

    #[test]
    fn score_counts_repeated_stop_once() {
        let seq = sequence();
        assert_eq!(alignment_score(&seq, &trip(&["A", "B", "A"])), 2);
    }

    #[test]
    fn score_ignores_loop_anchors() {
        let seq = sequence();
        assert_eq!(alignment_score(&seq, &trip(&["L", "A", "B", "C", "D", "L"])), 4);
        assert_eq!(alignment_score(&seq, &trip(&["L"])), 0);
    }

    #[test]
    fn in_order_trip_has_no_violation() {
        let seq = sequence();
        assert_eq!(
            first_required_order_violation(&seq, &trip(&["L", "A", "x", "C", "D", "L"])),
            None
        );
    }

    #[test]
    fn out_of_order_required_is_reported() {
        let seq = sequence();
        let t = trip(&["A", "C", "B", "D"]);
        assert_eq!(
            first_required_order_violation(&seq, &t),
            Some((&stop("C"), &stop("B")))
        );
    }

    #[test]
    fn repeated_required_is_a_violation() {
        let seq = sequence();
        let t = trip(&["A", "B", "A"]);
        assert_eq!(
            first_required_order_violation(&seq, &t),
            Some((&stop("B"), &stop("A")))
        );
    }

    #[test]
    fn alternates_out_of_place_are_not_violations() {
        let seq = sequence();
        assert_eq!(
            first_required_order_violation(&seq, &trip(&["B", "A1", "C"])),
            None
        );
    }

    #[test]
    fn collisions_need_two_distinct_alternates() {
        let seq = sequence();

        assert!(alternate_collisions(&seq, &trip(&["A", "A1", "B"])).is_empty());
        assert!(alternate_collisions(&seq, &trip(&["A1", "B", "A1"])).is_empty());

        let t = trip(&["A1", "A2", "B"]);
        assert_eq!(
            alternate_collisions(&seq, &t),
            vec![(&stop("A1"), &stop("A2"))]
        );
    }
}
