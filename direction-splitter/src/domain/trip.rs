//! Trip and stop-time records, and the trips the core emits.

use serde::{Deserialize, Serialize};

use super::{Direction, DirectionFlag, RouteId, StopId};

/// A stop visited by a trip.
///
/// `sequence` is the feed's `stop_sequence`: increasing along the trip but
/// not necessarily contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StopTime {
    pub stop_id: StopId,
    pub sequence: u32,
}

impl StopTime {
    /// Creates a new stop-time.
    pub fn new(stop_id: StopId, sequence: u32) -> Self {
        Self { stop_id, sequence }
    }
}

/// A trip as handed over by the feed loader.
///
/// The core only reads trips; every output is built alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub route_id: RouteId,
    /// Raw rider-facing heading text, e.g. "East - 506 Carlton towards Main Street Station"
    #[serde(default)]
    pub heading: String,
    pub direction_flag: DirectionFlag,
    /// Stop-times in feed order
    pub stop_times: Vec<StopTime>,
}

impl Trip {
    /// Returns the stop ids in feed order.
    pub fn stop_ids(&self) -> impl Iterator<Item = &StopId> {
        self.stop_times.iter().map(|st| &st.stop_id)
    }
}

/// A direction-labelled trip produced by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTrip {
    /// Trip the output was derived from
    pub trip_id: String,
    pub route_id: RouteId,
    pub direction: Direction,
    /// Stop-times in canonical order for `direction`
    pub stop_times: Vec<StopTime>,
    /// True when the order came from the route's canonical sequences, making
    /// `direction` one of the route's two official directions.
    pub governed_by_registry: bool,
}

impl OutputTrip {
    /// Returns the stop ids in output order.
    pub fn stop_ids(&self) -> impl Iterator<Item = &StopId> {
        self.stop_times.iter().map(|st| &st.stop_id)
    }

    /// Returns the output position of a stop, if visited.
    pub fn position_of(&self, stop_id: &StopId) -> Option<usize> {
        self.stop_times.iter().position(|st| &st.stop_id == stop_id)
    }
}
