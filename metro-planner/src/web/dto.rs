//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{FastestRoute, Route, Station};

/// Query for the station listing.
#[derive(Debug, Deserialize)]
pub struct StationsQuery {
    /// Only list stations on this line.
    pub line: Option<String>,
}

/// Query naming the two ends of a route.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Key of the starting station.
    pub from: String,

    /// Key of the destination station.
    pub to: String,
}

/// A station as exposed over HTTP.
#[derive(Debug, Serialize)]
pub struct StationRecord {
    pub key: String,
    pub name: String,
    pub line: String,
}

impl From<&Station> for StationRecord {
    fn from(station: &Station) -> Self {
        Self {
            key: station.key().to_string(),
            name: station.name().to_string(),
            line: station.line().to_string(),
        }
    }
}

/// Response listing stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationRecord>,
}

/// A route as exposed over HTTP.
#[derive(Debug, Serialize)]
pub struct RouteBody {
    /// Stations from origin to destination.
    pub stations: Vec<StationRecord>,

    /// Number of connections traversed.
    pub hops: usize,

    /// Number of times the line changes along the route.
    pub line_changes: usize,
}

impl From<&Route> for RouteBody {
    fn from(route: &Route) -> Self {
        Self {
            stations: route
                .stations()
                .iter()
                .map(|s| StationRecord::from(s.as_ref()))
                .collect(),
            hops: route.hop_count(),
            line_changes: route.line_changes(),
        }
    }
}

/// Response to a route query.
///
/// `route` and `total_minutes` are omitted when no route exists.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub found: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteBody>,

    /// Total travel time, only present for fastest-route queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_minutes: Option<u32>,
}

impl RouteResponse {
    /// The response when no route exists.
    pub fn not_found() -> Self {
        Self {
            found: false,
            route: None,
            total_minutes: None,
        }
    }
}

impl From<Option<Route>> for RouteResponse {
    fn from(route: Option<Route>) -> Self {
        match route {
            Some(route) => Self {
                found: true,
                route: Some(RouteBody::from(&route)),
                total_minutes: None,
            },
            None => Self::not_found(),
        }
    }
}

impl From<Option<FastestRoute>> for RouteResponse {
    fn from(fastest: Option<FastestRoute>) -> Self {
        match fastest {
            Some(fastest) => Self {
                found: true,
                route: Some(RouteBody::from(&fastest.route)),
                total_minutes: Some(fastest.total.get()),
            },
            None => Self::not_found(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
