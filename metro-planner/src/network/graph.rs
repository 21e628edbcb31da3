//! The station graph.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use super::NetworkError;
use crate::domain::{Minutes, Route, Station, StationKey};

/// Dense index of a station within one [`Network`].
///
/// Assigned in insertion order. Searches carry ids rather than stations and
/// only resolve them when a route is reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(usize);

impl StationId {
    /// Returns the position of the station in insertion order.
    pub fn index(self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        StationId(index)
    }
}

/// One entry in a station's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// The neighbouring station.
    pub to: StationId,
    /// Travel time to the neighbour.
    pub minutes: Minutes,
}

/// An undirected, weighted multi-line transit network.
///
/// Built once through [`add_station`](Network::add_station) and
/// [`add_connection`](Network::add_connection), then shared read-only
/// between any number of queries.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Arc<Station>>,
    index: HashMap<StationKey, StationId>,
    adjacency: Vec<Vec<Link>>,
    line_order: Vec<String>,
    lines: HashMap<String, Vec<StationId>>,
    connections: usize,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station under `key` unless one already exists.
    ///
    /// Adding an existing key is a no-op: the first name and line are kept.
    /// Returns the id of the station stored under `key` either way.
    pub fn add_station(
        &mut self,
        key: StationKey,
        name: impl Into<String>,
        line: impl Into<String>,
    ) -> StationId {
        if let Some(&id) = self.index.get(&key) {
            trace!(station = %key, "ignoring duplicate station");
            return id;
        }

        let id = StationId(self.stations.len());
        let station = Station::new(key.clone(), name, line);

        match self.lines.get_mut(station.line()) {
            Some(members) => members.push(id),
            None => {
                self.line_order.push(station.line().to_string());
                self.lines.insert(station.line().to_string(), vec![id]);
            }
        }

        self.stations.push(Arc::new(station));
        self.adjacency.push(Vec::new());
        self.index.insert(key, id);
        id
    }

    /// Connect two existing stations in both directions.
    ///
    /// Fails without changing the network if either key is unknown or the
    /// travel time is zero.
    pub fn add_connection(
        &mut self,
        a: &StationKey,
        b: &StationKey,
        minutes: Minutes,
    ) -> Result<(), NetworkError> {
        let from = self
            .id_of(a)
            .ok_or_else(|| NetworkError::MissingStation(a.clone()))?;
        let to = self
            .id_of(b)
            .ok_or_else(|| NetworkError::MissingStation(b.clone()))?;

        if minutes.is_zero() {
            return Err(NetworkError::ZeroWeight {
                from: a.clone(),
                to: b.clone(),
            });
        }

        self.adjacency[from.0].push(Link { to, minutes });
        if from != to {
            self.adjacency[to.0].push(Link { to: from, minutes });
        }
        self.connections += 1;

        trace!(from = %a, to = %b, minutes = minutes.get(), "connected stations");
        Ok(())
    }

    /// Returns the neighbours of a station with their travel times.
    ///
    /// The list is empty for a station with no connections.
    pub fn neighbors(
        &self,
        key: &StationKey,
    ) -> Result<Vec<(StationKey, Minutes)>, NetworkError> {
        let id = self
            .id_of(key)
            .ok_or_else(|| NetworkError::MissingStation(key.clone()))?;

        Ok(self
            .links(id)
            .iter()
            .map(|link| (self.stations[link.to.0].key().clone(), link.minutes))
            .collect())
    }

    /// Check if a station exists.
    pub fn has_station(&self, key: &StationKey) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the id assigned to a station key.
    pub fn id_of(&self, key: &StationKey) -> Option<StationId> {
        self.index.get(key).copied()
    }

    /// Look up a station by key.
    pub fn station(&self, key: &StationKey) -> Option<&Arc<Station>> {
        self.id_of(key).map(|id| &self.stations[id.0])
    }

    /// Look up a station by id.
    pub fn station_by_id(&self, id: StationId) -> Option<&Arc<Station>> {
        self.stations.get(id.0)
    }

    /// Returns the adjacency list of a station.
    pub fn links(&self, id: StationId) -> &[Link] {
        self.adjacency.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Station lookup for ids handed out by this network.
    pub(crate) fn station_at(&self, id: StationId) -> &Arc<Station> {
        &self.stations[id.0]
    }

    /// Returns all stations in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = &Arc<Station>> {
        self.stations.iter()
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Returns the number of connections (counting A-B and B-A as one).
    pub fn connection_count(&self) -> usize {
        self.connections
    }

    /// Returns the line names in the order they were first seen.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.line_order.iter().map(String::as_str)
    }

    /// Returns the stations recorded under a line, in insertion order.
    ///
    /// Unknown lines have no stations.
    pub fn stations_on_line(&self, line: &str) -> Vec<&Arc<Station>> {
        self.lines
            .get(line)
            .map(|ids| ids.iter().map(|id| &self.stations[id.0]).collect())
            .unwrap_or_default()
    }

    /// Recompute the travel time along a route from the adjacency lists.
    ///
    /// Where two stations are joined more than once, the quickest
    /// connection counts. Returns `None` if the route uses a station this
    /// network does not have, steps between two stations that are not
    /// directly connected, or takes longer than `u32::MAX` minutes in total.
    pub fn route_minutes(&self, route: &Route) -> Option<Minutes> {
        let ids = route
            .keys()
            .map(|key| self.id_of(key))
            .collect::<Option<Vec<_>>>()?;

        ids.windows(2).try_fold(Minutes::ZERO, |total, pair| {
            total.checked_add(self.link_minutes(pair[0], pair[1])?)
        })
    }

    /// Returns the quickest direct connection between two stations.
    pub fn link_minutes(&self, from: StationId, to: StationId) -> Option<Minutes> {
        self.links(from)
            .iter()
            .filter(|link| link.to == to)
            .map(|link| link.minutes)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> StationKey {
        StationKey::parse(s).unwrap()
    }

    fn mins(n: u32) -> Minutes {
        Minutes::new(n)
    }

    fn two_station_network() -> Network {
        let mut network = Network::new();
        network.add_station(key("K1"), "Kızılay", "Kırmızı Hat");
        network.add_station(key("K2"), "Ulus", "Kırmızı Hat");
        network
    }

    #[test]
    fn empty_network() {
        let network = Network::new();
        assert!(network.is_empty());
        assert_eq!(network.len(), 0);
        assert_eq!(network.connection_count(), 0);
        assert!(!network.has_station(&key("K1")));
        assert_eq!(network.lines().count(), 0);
    }

    #[test]
    fn add_and_lookup_station() {
        let network = two_station_network();

        assert_eq!(network.len(), 2);
        assert!(network.has_station(&key("K1")));
        assert!(!network.has_station(&key("K3")));

        let station = network.station(&key("K2")).unwrap();
        assert_eq!(station.name(), "Ulus");
        assert_eq!(station.line(), "Kırmızı Hat");

        let id = network.id_of(&key("K2")).unwrap();
        assert_eq!(id.index(), 1);
        assert_eq!(network.station_by_id(id).unwrap().key(), &key("K2"));
    }

    #[test]
    fn duplicate_station_keeps_first() {
        let mut network = two_station_network();

        let first = network.id_of(&key("K1")).unwrap();
        let again = network.add_station(key("K1"), "Elsewhere", "Mavi Hat");

        assert_eq!(first, again);
        assert_eq!(network.len(), 2);

        let station = network.station(&key("K1")).unwrap();
        assert_eq!(station.name(), "Kızılay");
        assert_eq!(station.line(), "Kırmızı Hat");

        // The rejected line must not appear in the grouping either
        assert_eq!(network.lines().collect::<Vec<_>>(), ["Kırmızı Hat"]);
    }

    #[test]
    fn connection_is_symmetric() {
        let mut network = two_station_network();
        network
            .add_connection(&key("K1"), &key("K2"), mins(4))
            .unwrap();

        assert_eq!(network.connection_count(), 1);
        assert_eq!(
            network.neighbors(&key("K1")).unwrap(),
            vec![(key("K2"), mins(4))]
        );
        assert_eq!(
            network.neighbors(&key("K2")).unwrap(),
            vec![(key("K1"), mins(4))]
        );
    }

    #[test]
    fn missing_endpoint_fails_without_mutation() {
        let mut network = two_station_network();

        let err = network
            .add_connection(&key("K1"), &key("K9"), mins(4))
            .unwrap_err();
        assert_eq!(err, NetworkError::MissingStation(key("K9")));

        let err = network
            .add_connection(&key("K9"), &key("K1"), mins(4))
            .unwrap_err();
        assert_eq!(err, NetworkError::MissingStation(key("K9")));

        assert_eq!(network.connection_count(), 0);
        assert!(network.neighbors(&key("K1")).unwrap().is_empty());
        assert!(network.neighbors(&key("K2")).unwrap().is_empty());
        assert!(!network.has_station(&key("K9")));
    }

    #[test]
    fn zero_weight_rejected() {
        let mut network = two_station_network();

        let err = network
            .add_connection(&key("K1"), &key("K2"), Minutes::ZERO)
            .unwrap_err();
        assert_eq!(
            err,
            NetworkError::ZeroWeight {
                from: key("K1"),
                to: key("K2"),
            }
        );
        assert_eq!(network.connection_count(), 0);
        assert!(network.neighbors(&key("K1")).unwrap().is_empty());
    }

    #[test]
    fn neighbors_of_unknown_station() {
        let network = two_station_network();
        assert_eq!(
            network.neighbors(&key("X1")),
            Err(NetworkError::MissingStation(key("X1")))
        );
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let mut network = two_station_network();
        network.add_station(key("M2"), "Kızılay", "Mavi Hat");
        network
            .add_connection(&key("K1"), &key("K2"), mins(4))
            .unwrap();
        network
            .add_connection(&key("K1"), &key("M2"), mins(2))
            .unwrap();

        assert_eq!(
            network.neighbors(&key("K1")).unwrap(),
            vec![(key("K2"), mins(4)), (key("M2"), mins(2))]
        );
    }

    #[test]
    fn self_connection_listed_once() {
        let mut network = two_station_network();
        network
            .add_connection(&key("K1"), &key("K1"), mins(1))
            .unwrap();

        assert_eq!(
            network.neighbors(&key("K1")).unwrap(),
            vec![(key("K1"), mins(1))]
        );
    }

    #[test]
    fn line_grouping() {
        let mut network = two_station_network();
        network.add_station(key("M1"), "AŞTİ", "Mavi Hat");
        network.add_station(key("K3"), "Demetevler", "Kırmızı Hat");

        assert_eq!(
            network.lines().collect::<Vec<_>>(),
            ["Kırmızı Hat", "Mavi Hat"]
        );

        let red: Vec<&str> = network
            .stations_on_line("Kırmızı Hat")
            .iter()
            .map(|s| s.key().as_str())
            .collect();
        assert_eq!(red, ["K1", "K2", "K3"]);

        assert!(network.stations_on_line("Sarı Hat").is_empty());
    }

    #[test]
    fn route_minutes_recomputes_total() {
        let mut network = two_station_network();
        network.add_station(key("K3"), "Demetevler", "Kırmızı Hat");
        network
            .add_connection(&key("K1"), &key("K2"), mins(4))
            .unwrap();
        network
            .add_connection(&key("K2"), &key("K3"), mins(6))
            .unwrap();
        // A slower parallel connection is never the one counted
        network
            .add_connection(&key("K2"), &key("K3"), mins(9))
            .unwrap();

        let stations: Vec<_> = ["K1", "K2", "K3"]
            .iter()
            .map(|k| network.station(&key(k)).unwrap().clone())
            .collect();
        let route = Route::new(stations).unwrap();
        assert_eq!(network.route_minutes(&route), Some(mins(10)));

        let skipping: Vec<_> = ["K1", "K3"]
            .iter()
            .map(|k| network.station(&key(k)).unwrap().clone())
            .collect();
        let route = Route::new(skipping).unwrap();
        assert_eq!(network.route_minutes(&route), None);
    }

    #[test]
    fn route_minutes_overflow_is_none() {
        let half = mins(u32::MAX / 2 + 1);
        let mut network = two_station_network();
        network.add_station(key("K3"), "Demetevler", "Kırmızı Hat");
        network.add_connection(&key("K1"), &key("K2"), half).unwrap();
        network.add_connection(&key("K2"), &key("K3"), half).unwrap();

        let stations: Vec<_> = ["K1", "K2", "K3"]
            .iter()
            .map(|k| network.station(&key(k)).unwrap().clone())
            .collect();
        let route = Route::new(stations).unwrap();
        assert_eq!(network.route_minutes(&route), None);
    }

    #[test]
    fn links_of_unknown_id_is_empty() {
        let network = two_station_network();
        assert!(network.links(StationId(99)).is_empty());
        assert!(network.station_by_id(StationId(99)).is_none());
    }
}
