//! Per-trip failures.
//!
//! None of these are recovered locally: feeds are static snapshots, so a
//! retry would fail the same way. Each carries enough context to point at
//! the registry entry or feed record that needs fixing.

use crate::classify::UnclassifiableTrip;
use crate::domain::{Direction, RouteId, StopId};

/// Errors raised while labelling and ordering one trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// No classification strategy matched
    #[error(transparent)]
    Unclassifiable(#[from] UnclassifiableTrip),

    /// Trip matches both canonical sequences equally well
    #[error("route {route}: trip {trip} aligns equally to {first} and {second} (score {score}); refine the registry")]
    AmbiguousAlignment {
        route: RouteId,
        trip: String,
        first: Direction,
        second: Direction,
        score: usize,
    },

    /// Required stops out of canonical order in the source trip
    #[error("route {route}: trip {trip} visits required stop {later} after {earlier}, against canonical {direction} order")]
    RequiredOrderViolation {
        route: RouteId,
        trip: String,
        direction: Direction,
        earlier: StopId,
        later: StopId,
    },

    /// Two alternates of one slot in the same trip (strict policy only)
    #[error("route {route}: trip {trip} visits alternates {first} and {second} of the same {direction} slot")]
    AlternateCollision {
        route: RouteId,
        trip: String,
        direction: Direction,
        first: StopId,
        second: StopId,
    },
}

impl SplitError {
    /// Route the failing trip belongs to.
    pub fn route(&self) -> RouteId {
        match self {
            SplitError::Unclassifiable(e) => e.route,
            SplitError::AmbiguousAlignment { route, .. }
            | SplitError::RequiredOrderViolation { route, .. }
            | SplitError::AlternateCollision { route, .. } => *route,
        }
    }

    /// Id of the failing trip.
    pub fn trip(&self) -> &str {
        match self {
            SplitError::Unclassifiable(e) => &e.trip,
            SplitError::AmbiguousAlignment { trip, .. }
            | SplitError::RequiredOrderViolation { trip, .. }
            | SplitError::AlternateCollision { trip, .. } => trip,
        }
    }
}
