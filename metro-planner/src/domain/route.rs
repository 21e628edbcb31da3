//! Route types.
//!
//! A `Route` is the ordered sequence of stations a traveller passes through,
//! from origin to destination. A `FastestRoute` additionally carries the
//! total travel time along it.

use std::collections::HashSet;
use std::sync::Arc;

use super::{DomainError, Minutes, Station, StationKey};

/// A simple path through the network.
///
/// Invariants: at least one station, and no station appears twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<Arc<Station>>,
}

impl Route {
    /// Creates a route, validating its invariants.
    pub fn new(stations: Vec<Arc<Station>>) -> Result<Self, DomainError> {
        if stations.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        let mut seen = HashSet::with_capacity(stations.len());
        for station in &stations {
            if !seen.insert(station.key()) {
                return Err(DomainError::RepeatedStation(station.key().clone()));
            }
        }

        Ok(Self { stations })
    }

    /// Creates a route from stations the caller already knows form a simple path.
    pub(crate) fn from_path(stations: Vec<Arc<Station>>) -> Self {
        debug_assert!(
            Route::new(stations.clone()).is_ok(),
            "search produced an invalid route"
        );
        Self { stations }
    }

    /// Returns the stations in travel order.
    pub fn stations(&self) -> &[Arc<Station>] {
        &self.stations
    }

    /// Returns the first station.
    pub fn origin(&self) -> &Station {
        &self.stations[0]
    }

    /// Returns the last station.
    pub fn destination(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }

    /// Returns the number of stations, which is never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns the number of connections traversed.
    ///
    /// Ride and transfer connections count the same.
    pub fn hop_count(&self) -> usize {
        self.stations.len() - 1
    }

    /// Returns how many times the route moves from one line to another.
    pub fn line_changes(&self) -> usize {
        self.stations
            .windows(2)
            .filter(|pair| pair[0].line() != pair[1].line())
            .count()
    }

    /// Returns the station keys in travel order.
    pub fn keys(&self) -> impl Iterator<Item = &StationKey> {
        self.stations.iter().map(|s| s.key())
    }

    /// Returns true if the route passes through the given station.
    pub fn contains(&self, key: &StationKey) -> bool {
        self.keys().any(|k| k == key)
    }
}

/// A minimum-time route together with its total travel time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastestRoute {
    /// The stations travelled through.
    pub route: Route,
    /// Sum of the connection times along the route.
    pub total: Minutes,
}
