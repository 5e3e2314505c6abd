//! Built-in classification strategies.

use std::collections::HashMap;

use crate::domain::{Direction, DirectionFlag, Route, RouteId, Trip};

use super::DirectionStrategy;

/// Labels a trip from a cardinal word at the start of its heading text.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingPrefix;

impl DirectionStrategy for HeadingPrefix {
    fn name(&self) -> &'static str {
        "heading-prefix"
    }

    fn classify(&self, _route: &Route, trip: &Trip) -> Option<Direction> {
        Direction::from_cardinal_prefix(&trip.heading)
    }
}

/// Per-route table mapping the raw direction flag to a label.
///
/// Covers feeds that populate only the binary flag and never a usable
/// heading.
#[derive(Debug, Clone, Default)]
pub struct DirectionFlagOverrides {
    table: HashMap<(RouteId, DirectionFlag), Direction>,
}

impl DirectionFlagOverrides {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map one flag value of a route to a direction.
    pub fn with(mut self, route_id: RouteId, flag: DirectionFlag, direction: Direction) -> Self {
        self.table.insert((route_id, flag), direction);
        self
    }

    /// Map flag 0 and flag 1 of a route to a pair of directions.
    pub fn with_route(self, route_id: RouteId, zero: Direction, one: Direction) -> Self {
        self.with(route_id, DirectionFlag::Zero, zero)
            .with(route_id, DirectionFlag::One, one)
    }

    /// Direction registered for a route and flag.
    pub fn get(&self, route_id: RouteId, flag: DirectionFlag) -> Option<Direction> {
        self.table.get(&(route_id, flag)).copied()
    }

    /// Number of (route, flag) entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl DirectionStrategy for DirectionFlagOverrides {
    fn name(&self) -> &'static str {
        "direction-flag-override"
    }

    fn classify(&self, route: &Route, trip: &Trip) -> Option<Direction> {
        self.get(route.id, trip.direction_flag)
    }
}
