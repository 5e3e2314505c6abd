//! Canonical sequence registry.
//!
//! Maps a route to its two canonical stop sequences. The registry is built
//! once, validated as a whole, and never mutated afterwards, so it can be
//! shared by reference across any number of workers.

mod direction_spec;
mod error;
mod sequence;

use std::collections::BTreeMap;

use crate::domain::RouteId;

pub use direction_spec::DirectionSpec;
pub use error::RegistryError;
pub use sequence::{CanonicalSequence, CanonicalSequenceBuilder, Role, SequenceEntry, SequenceError};

/// Immutable table of route → `DirectionSpec`.
#[derive(Debug, Clone, Default)]
pub struct CanonicalSequenceRegistry {
    routes: BTreeMap<RouteId, DirectionSpec>,
}

impl CanonicalSequenceRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Look up the canonical sequences of a route.
    ///
    /// `None` means the route is not governed by the registry and trips
    /// are labelled by the direction classifier instead.
    pub fn lookup(&self, route_id: RouteId) -> Option<&DirectionSpec> {
        self.routes.get(&route_id)
    }

    /// Returns true if the route is governed by the registry.
    pub fn contains(&self, route_id: RouteId) -> bool {
        self.routes.contains_key(&route_id)
    }

    /// Registered routes, in route id order.
    pub fn routes(&self) -> impl Iterator<Item = &DirectionSpec> {
        self.routes.values()
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no route is registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Builder for a `CanonicalSequenceRegistry`.
///
/// Nothing is validated until `build`, which fails on the first invalid
/// route so the whole table is rejected before any trip is seen.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    pending: Vec<(RouteId, CanonicalSequenceBuilder, CanonicalSequenceBuilder)>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route with its two canonical sequences.
    pub fn route(
        mut self,
        route_id: RouteId,
        first: CanonicalSequenceBuilder,
        second: CanonicalSequenceBuilder,
    ) -> Self {
        self.pending.push((route_id, first, second));
        self
    }

    /// Validate every route and build the registry.
    pub fn build(self) -> Result<CanonicalSequenceRegistry, RegistryError> {
        let mut routes = BTreeMap::new();
        for (route_id, first, second) in self.pending {
            if routes.contains_key(&route_id) {
                return Err(RegistryError::DuplicateRoute(route_id));
            }
            let spec = DirectionSpec::new(route_id, first, second)?;
            routes.insert(route_id, spec);
        }
        Ok(CanonicalSequenceRegistry { routes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;

    fn east() -> CanonicalSequenceBuilder {
        CanonicalSequence::builder(Direction::East)
            .required("1")
            .required("2")
    }

    fn west() -> CanonicalSequenceBuilder {
        CanonicalSequence::builder(Direction::West)
            .required("2")
            .required("1")
    }

    #[test]
    fn empty_registry() {
        let registry = CanonicalSequenceRegistry::builder().build().unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.lookup(RouteId(506)).is_none());
    }

    #[test]
    fn lookup_registered_route() {
        let registry = RegistryBuilder::new()
            .route(RouteId(7), east(), west())
            .build()
            .unwrap();

        assert!(registry.contains(RouteId(7)));
        assert!(!registry.contains(RouteId(8)));
        let spec = registry.lookup(RouteId(7)).unwrap();
        assert_eq!(spec.route_id(), RouteId(7));
        assert_eq!(registry.routes().count(), 1);
    }

    #[test]
    fn rejects_duplicate_route() {
        let err = RegistryBuilder::new()
            .route(RouteId(7), east(), west())
            .route(RouteId(7), east(), west())
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateRoute(RouteId(7)));
    }

    #[test]
    fn one_bad_route_rejects_whole_registry() {
        let bad = CanonicalSequence::builder(Direction::West);
        let result = RegistryBuilder::new()
            .route(RouteId(1), east(), west())
            .route(RouteId(2), east(), bad)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CanonicalSequenceRegistry>();
    }
}
