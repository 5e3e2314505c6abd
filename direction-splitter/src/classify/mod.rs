//! Direction classification for routes without canonical sequences.
//!
//! A `DirectionClassifier` runs an ordered list of strategies; each either
//! names a direction or has no opinion, and the first definite answer wins.
//! When every strategy abstains the trip is unclassifiable, which is fatal:
//! a guessed direction would silently corrupt rider-facing output.

mod strategy;

use tracing::debug;

use crate::domain::{Direction, Route, RouteId, Trip};

pub use strategy::{DirectionFlagOverrides, HeadingPrefix};

/// One heuristic in the classification cascade.
pub trait DirectionStrategy {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Returns the trip's direction, or `None` for "no opinion".
    ///
    /// Must be a pure function of its inputs.
    fn classify(&self, route: &Route, trip: &Trip) -> Option<Direction>;
}

/// No strategy could label a trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("route {route}: cannot classify direction of trip {trip} (heading {heading:?}, direction flag {flag})")]
pub struct UnclassifiableTrip {
    pub route: RouteId,
    pub trip: String,
    pub heading: String,
    pub flag: u8,
}

/// Ordered cascade of direction strategies.
///
/// # Examples
///
/// ```
/// use direction_splitter::classify::{DirectionClassifier, HeadingPrefix};
/// use direction_splitter::domain::{Direction, DirectionFlag, Route, Trip};
///
/// let classifier = DirectionClassifier::new().with_strategy(HeadingPrefix);
/// let route = Route::from_short_code("501", "Queen").unwrap();
/// let trip = Trip {
///     id: "t1".into(),
///     route_id: route.id,
///     heading: "West - 501 Queen towards Long Branch".into(),
///     direction_flag: DirectionFlag::Zero,
///     stop_times: vec![],
/// };
///
/// assert_eq!(classifier.classify(&route, &trip), Ok(Direction::West));
/// ```
#[derive(Default)]
pub struct DirectionClassifier {
    strategies: Vec<Box<dyn DirectionStrategy + Send + Sync>>,
}

impl DirectionClassifier {
    /// Create a classifier with no strategies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strategy; earlier strategies take priority.
    pub fn with_strategy(mut self, strategy: impl DirectionStrategy + Send + Sync + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Names of the installed strategies, in priority order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Label a trip with its direction.
    pub fn classify(&self, route: &Route, trip: &Trip) -> Result<Direction, UnclassifiableTrip> {
        for strategy in &self.strategies {
            if let Some(direction) = strategy.classify(route, trip) {
                debug!(
                    route = %route.id,
                    trip = %trip.id,
                    strategy = strategy.name(),
                    %direction,
                    "Classified trip"
                );
                return Ok(direction);
            }
        }

        Err(UnclassifiableTrip {
            route: route.id,
            trip: trip.id.clone(),
            heading: trip.heading.clone(),
            flag: trip.direction_flag.raw(),
        })
    }
}

impl std::fmt::Debug for DirectionClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionClassifier")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}
