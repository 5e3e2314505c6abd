//! The pair of canonical sequences registered for one route.

use crate::domain::{Direction, RouteId};

use super::{CanonicalSequence, CanonicalSequenceBuilder, RegistryError, Role};

/// A route's two canonical sequences, one per direction.
#[derive(Debug, Clone)]
pub struct DirectionSpec {
    route_id: RouteId,
    sequences: [CanonicalSequence; 2],
}

impl DirectionSpec {
    /// Build and cross-validate both sequences of a route.
    pub fn new(
        route_id: RouteId,
        first: CanonicalSequenceBuilder,
        second: CanonicalSequenceBuilder,
    ) -> Result<Self, RegistryError> {
        let build = |builder: CanonicalSequenceBuilder| {
            let direction = builder.direction();
            builder
                .build()
                .map_err(|source| RegistryError::InvalidSequence {
                    route: route_id,
                    direction,
                    source,
                })
        };
        let first = build(first)?;
        let second = build(second)?;

        if first.direction().opposite() != second.direction() {
            return Err(RegistryError::DirectionsNotOpposed {
                route: route_id,
                first: first.direction(),
                second: second.direction(),
            });
        }

        check_loop_anchors(route_id, &first, &second)?;
        check_loop_anchors(route_id, &second, &first)?;

        Ok(Self {
            route_id,
            sequences: [first, second],
        })
    }

    /// Route these sequences belong to.
    pub fn route_id(&self) -> RouteId {
        self.route_id
    }

    /// Both sequences, in registration order.
    pub fn sequences(&self) -> &[CanonicalSequence; 2] {
        &self.sequences
    }

    /// The sequence for a direction, if the route runs that way.
    pub fn for_direction(&self, direction: Direction) -> Option<&CanonicalSequence> {
        self.sequences
            .iter()
            .find(|seq| seq.direction() == direction)
    }
}

/// Every loop anchor of `anchored` must be a loop anchor of `other` too.
fn check_loop_anchors(
    route_id: RouteId,
    anchored: &CanonicalSequence,
    other: &CanonicalSequence,
) -> Result<(), RegistryError> {
    for entry in anchored.entries() {
        if entry.role == Role::LoopAnchor
            && other.role_of(&entry.stop_id) != Some(Role::LoopAnchor)
        {
            return Err(RegistryError::LoopAnchorMismatch {
                route: route_id,
                stop: entry.stop_id.clone(),
                anchored_in: anchored.direction(),
                missing_in: other.direction(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopId;
    use crate::registry::SequenceError;

    fn east() -> CanonicalSequenceBuilder {
        CanonicalSequence::builder(Direction::East)
            .loop_anchor("5292")
            .required("8763")
            .required("14260")
    }

    fn west() -> CanonicalSequenceBuilder {
        CanonicalSequence::builder(Direction::West)
            .required("14260")
            .required("9132")
            .loop_anchor("5292")
    }

    #[test]
    fn builds_opposed_pair() {
        let spec = DirectionSpec::new(RouteId(506), east(), west()).unwrap();

        assert_eq!(spec.route_id(), RouteId(506));
        assert_eq!(spec.sequences()[0].direction(), Direction::East);
        assert_eq!(spec.sequences()[1].direction(), Direction::West);
        assert!(spec.for_direction(Direction::West).is_some());
        assert!(spec.for_direction(Direction::North).is_none());
    }

    #[test]
    fn rejects_same_direction_twice() {
        let err = DirectionSpec::new(RouteId(506), east(), east()).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DirectionsNotOpposed {
                route: RouteId(506),
                first: Direction::East,
                second: Direction::East,
            }
        );
    }

    #[test]
    fn rejects_crossed_axes() {
        let north = CanonicalSequence::builder(Direction::North).required("1");
        let err = DirectionSpec::new(RouteId(1), east(), north).unwrap_err();
        assert!(matches!(err, RegistryError::DirectionsNotOpposed { .. }));
    }

    #[test]
    fn rejects_loop_anchor_missing_from_other_direction() {
        let west = CanonicalSequence::builder(Direction::West)
            .required("14260")
            .required("9132");
        let err = DirectionSpec::new(RouteId(506), east(), west).unwrap_err();
        assert_eq!(
            err,
            RegistryError::LoopAnchorMismatch {
                route: RouteId(506),
                stop: StopId::parse("5292").unwrap(),
                anchored_in: Direction::East,
                missing_in: Direction::West,
            }
        );
    }

    #[test]
    fn rejects_loop_anchor_with_other_role() {
        let west = CanonicalSequence::builder(Direction::West)
            .required("14260")
            .required("5292");
        let err = DirectionSpec::new(RouteId(506), east(), west).unwrap_err();
        assert!(matches!(err, RegistryError::LoopAnchorMismatch { .. }));
    }

    #[test]
    fn sequence_errors_carry_route_and_direction() {
        let bad = CanonicalSequence::builder(Direction::West)
            .required("1")
            .required("1");
        let err = DirectionSpec::new(RouteId(510), east(), bad).unwrap_err();
        match err {
            RegistryError::InvalidSequence {
                route,
                direction,
                source,
            } => {
                assert_eq!(route, RouteId(510));
                assert_eq!(direction, Direction::West);
                assert!(matches!(source, SequenceError::DuplicateStop(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
