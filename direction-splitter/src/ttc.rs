//! Compiled-in data for the TTC light rail feed.
//!
//! This is the one piece of domain knowledge that has to be maintained by
//! hand: when a streetcar route's physical pattern changes, its canonical
//! sequences here must change with it.
//!
//! Stop ids are the feed's `stop_id`s; names are for the reader only.

use crate::classify::{DirectionClassifier, DirectionFlagOverrides, HeadingPrefix};
use crate::domain::{Direction, RouteId};
use crate::registry::{CanonicalSequence, CanonicalSequenceRegistry, RegistryError};

/// Canonical sequences of the branching and looping routes.
pub fn registry() -> Result<CanonicalSequenceRegistry, RegistryError> {
    CanonicalSequenceRegistry::builder()
        // 506 Carlton
        .route(
            RouteId(506),
            CanonicalSequence::builder(Direction::East)
                .loop_anchor("5292") // High Park Loop
                .required("8763") // Howard Park Ave at Roncesvalles Ave
                .required("8999") // Howard Park Ave at Dundas St West
                .alternate("9132", "8763") // Howard Park Ave at Roncesvalles Ave, far side
                .alternate("2954", "8999") // Dundas St West at Howard Park Ave
                .required("2243") // Dundas St West at Sorauren Ave
                .required("7506") // Dundas St West at Sterling Rd
                .required("3797") // Gerrard St East at Coxwell Ave
                .required("8980") // Coxwell Ave at Upper Gerrard St East
                .required("14260"), // Main Street Station
            CanonicalSequence::builder(Direction::West)
                .required("14260") // Main Street Station
                .required("10283") // Coxwell Ave at Lower Gerrard St East
                .required("2048") // Gerrard St East at Ashdale Ave
                .required("8135") // College St at Lansdowne Ave
                .required("9132") // Howard Park Ave at Roncesvalles Ave
                .loop_anchor("5292"), // High Park Loop
        )
        // 510 Spadina
        .route(
            RouteId(510),
            CanonicalSequence::builder(Direction::North)
                .required("9227") // Union Station
                .alternate("6075", "478") // Spadina Ave at Queens Quay West
                .loop_anchor("478") // Queens Quay Loop at Lower Spadina Ave
                .alternate("9243", "5275") // Spadina Ave at Bremner Blvd
                .required("5275") // Spadina Ave at King St West
                .alternate("8346", "7582") // Spadina Ave at Richmond St West
                .required("7582") // Spadina Ave at Queen St West
                .required("14339"), // Spadina Station
            CanonicalSequence::builder(Direction::South)
                .required("14339") // Spadina Station
                .required("9203") // Spadina Ave at Queen St West
                .alternate("10089", "10138") // Charlotte St at Oxley St
                .required("10138") // Spadina Ave at King St West
                .required("6639") // Spadina Ave at Bremner Blvd
                .alternate("2125", "478") // Queens Quay West at Lower Spadina Ave
                .loop_anchor("478") // Queens Quay Loop at Lower Spadina Ave
                .alternate("15122", "9227") // Queens Quay W at Rees St
                .required("9227"), // Union Station
        )
        .build()
}

/// Direction flag overrides for routes whose trips carry no usable heading.
pub fn direction_flag_overrides() -> DirectionFlagOverrides {
    DirectionFlagOverrides::new()
        // 504 King
        .with_route(RouteId(504), Direction::East, Direction::West)
}

/// Classifier for routes outside the registry: heading text first, then
/// the flag overrides.
pub fn classifier() -> DirectionClassifier {
    DirectionClassifier::new()
        .with_strategy(HeadingPrefix)
        .with_strategy(direction_flag_overrides())
}
