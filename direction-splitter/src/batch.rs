//! Batch processing of a feed snapshot.
//!
//! The batch is all-or-nothing: the first failing trip aborts it, so a
//! feed is never shipped with some routes silently mislabelled.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{OutputTrip, Route, RouteId, Trip};
use crate::splitter::{Split, SplitError, TripSplitter};

/// Routes and trips handed over by the feed loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchInput {
    pub routes: Vec<Route>,
    pub trips: Vec<Trip>,
}

/// Errors that abort a batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    /// Trip references a route the feed did not define
    #[error("trip {trip} references unknown route {route}")]
    UnknownRoute { route: RouteId, trip: String },

    /// Route defined twice in the feed
    #[error("route {0} defined more than once")]
    DuplicateRoute(RouteId),

    /// A trip could not be labelled or ordered
    #[error(transparent)]
    Split(#[from] SplitError),
}

/// Result of a successful batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Output trips, in input trip order
    pub outputs: Vec<OutputTrip>,
    /// Input trips processed
    pub trips_in: usize,
    /// Input trips split into two directions
    pub trips_split: usize,
    /// Input trips labelled by the classifier rather than the registry
    pub trips_classified: usize,
}

/// Label and order every trip of a batch.
///
/// Trips are processed in input order and outputs keep that order; a
/// split trip contributes both halves in travel order.
pub fn process_batch(
    splitter: &TripSplitter<'_>,
    input: &BatchInput,
) -> Result<BatchReport, BatchError> {
    let mut routes: HashMap<RouteId, &Route> = HashMap::new();
    for route in &input.routes {
        if routes.insert(route.id, route).is_some() {
            return Err(BatchError::DuplicateRoute(route.id));
        }
    }

    let mut report = BatchReport {
        trips_in: input.trips.len(),
        ..BatchReport::default()
    };

    for trip in &input.trips {
        let route = routes
            .get(&trip.route_id)
            .ok_or_else(|| BatchError::UnknownRoute {
                route: trip.route_id,
                trip: trip.id.clone(),
            })?;

        let split = splitter.split(route, trip)?;
        if split.is_turnaround() {
            report.trips_split += 1;
        }
        for output in split.into_trips() {
            if !output.governed_by_registry {
                report.trips_classified += 1;
            }
            report.outputs.push(output);
        }
    }

    info!(
        trips_in = report.trips_in,
        trips_out = report.outputs.len(),
        trips_split = report.trips_split,
        trips_classified = report.trips_classified,
        "Batch complete"
    );

    Ok(report)
}
