//! Domain types for direction assignment.
//!
//! These types model the records handed over by the feed loader: routes,
//! trips and their stop-times, plus the direction labels the core produces.
//! Identifier types enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod direction;
mod route;
mod stop_id;
mod trip;

pub use direction::{Direction, DirectionFlag, InvalidDirectionFlag};
pub use route::{InvalidRouteId, Route, RouteId};
pub use stop_id::{InvalidStopId, StopId};
pub use trip::{OutputTrip, StopTime, Trip};
