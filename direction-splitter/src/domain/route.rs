//! Route identifier and route record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a route short code is not a route number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route short code {0:?}: expected a route number")]
pub struct InvalidRouteId(pub String);

/// Numeric route identifier.
///
/// The feed's own route ids change between schedule periods, so the
/// rider-facing short code ("506", "510") is used instead.
///
/// # Examples
///
/// ```
/// use direction_splitter::domain::RouteId;
///
/// let carlton = RouteId::from_short_code("506").unwrap();
/// assert_eq!(carlton, RouteId(506));
/// assert!(RouteId::from_short_code("506A").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RouteId(pub u32);

impl RouteId {
    /// Derive the route id from the feed's short display code.
    pub fn from_short_code(short_code: &str) -> Result<Self, InvalidRouteId> {
        let trimmed = short_code.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidRouteId(short_code.to_string()));
        }
        trimmed
            .parse()
            .map(RouteId)
            .map_err(|_| InvalidRouteId(short_code.to_string()))
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A route as handed over by the feed loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Route number
    pub id: RouteId,
    /// Short display code the id was derived from
    pub short_code: String,
    /// Display name (already cleaned upstream)
    #[serde(default)]
    pub name: String,
}

impl Route {
    /// Creates a route, deriving its id from the short code.
    pub fn from_short_code(short_code: &str, name: &str) -> Result<Self, InvalidRouteId> {
        Ok(Self {
            id: RouteId::from_short_code(short_code)?,
            short_code: short_code.trim().to_string(),
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_short_codes() {
        assert_eq!(RouteId::from_short_code("504"), Ok(RouteId(504)));
        assert_eq!(RouteId::from_short_code(" 510 "), Ok(RouteId(510)));
        assert_eq!(RouteId::from_short_code("0301"), Ok(RouteId(301)));
    }

    #[test]
    fn reject_non_numeric() {
        assert!(RouteId::from_short_code("").is_err());
        assert!(RouteId::from_short_code("504A").is_err());
        assert!(RouteId::from_short_code("-5").is_err());
        assert!(RouteId::from_short_code("+5").is_err());
        assert!(RouteId::from_short_code("99999999999").is_err());
    }

    #[test]
    fn error_display() {
        let err = RouteId::from_short_code("Line 1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid route short code \"Line 1\": expected a route number"
        );
    }

    #[test]
    fn route_from_short_code() {
        let route = Route::from_short_code("510", "Spadina").unwrap();
        assert_eq!(route.id, RouteId(510));
        assert_eq!(route.short_code, "510");
        assert_eq!(route.name, "Spadina");
    }

    #[test]
    fn route_deserializes_with_numeric_id() {
        let route: Route =
            serde_json::from_str(r#"{"id": 506, "short_code": "506"}"#).unwrap();
        assert_eq!(route.id, RouteId(506));
        assert!(route.name.is_empty());
    }
}
