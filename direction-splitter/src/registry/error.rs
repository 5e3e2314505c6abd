//! Registry construction errors.
//!
//! All of these are fatal configuration errors: they are raised while the
//! registry is built, before any trip is processed.

use crate::domain::{Direction, RouteId, StopId};

use super::SequenceError;

/// Invalid registry data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// One of a route's canonical sequences is malformed
    #[error("route {route} {direction} sequence: {source}")]
    InvalidSequence {
        route: RouteId,
        direction: Direction,
        #[source]
        source: SequenceError,
    },

    /// The two sequences of a route are not opposite directions
    #[error("route {route}: sequences {first} and {second} are not opposite directions")]
    DirectionsNotOpposed {
        route: RouteId,
        first: Direction,
        second: Direction,
    },

    /// A loop anchor is not shared consistently by both directions
    #[error("route {route}: stop {stop} is a loop anchor {anchored_in} but not {missing_in}")]
    LoopAnchorMismatch {
        route: RouteId,
        stop: StopId,
        anchored_in: Direction,
        missing_in: Direction,
    },

    /// Route registered more than once
    #[error("route {0} registered more than once")]
    DuplicateRoute(RouteId),
}
