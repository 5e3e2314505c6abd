//! Direction splitting for TTC light rail trips.
//!
//! Labels every trip of a GTFS-style feed with a cardinal direction and,
//! for routes whose feed direction data is unreliable, puts its stops in
//! the route's canonical order for that direction.

pub mod batch;
pub mod classify;
pub mod domain;
pub mod registry;
pub mod splitter;
pub mod ttc;
