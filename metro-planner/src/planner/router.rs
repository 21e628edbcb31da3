//! Route queries over a network.

use tracing::debug;

use super::bfs::fewest_hops;
use super::fastest::fastest_path;
use super::heuristic::{Heuristic, ZeroHeuristic};
use crate::domain::{FastestRoute, Route, StationKey};
use crate::network::{Network, StationId};

/// Answers route queries against a borrowed network.
///
/// A router holds no state between queries; every call is a full search
/// from scratch. Since the network is only read, one router (or many) can
/// serve queries from several threads at once.
///
/// Queries never fail. An unknown start or destination is reported exactly
/// like an unreachable one: as `None`.
#[derive(Debug, Clone)]
pub struct Router<'a, H = ZeroHeuristic> {
    network: &'a Network,
    heuristic: H,
}

impl<'a> Router<'a> {
    /// Create a router whose fastest-route search is plain Dijkstra.
    pub fn new(network: &'a Network) -> Self {
        Self::with_heuristic(network, ZeroHeuristic)
    }
}

impl<'a, H: Heuristic> Router<'a, H> {
    /// Create a router that orders its fastest-route frontier by `heuristic`.
    ///
    /// If the heuristic is not admissible, fastest-route results are
    /// best-effort rather than guaranteed shortest.
    pub fn with_heuristic(network: &'a Network, heuristic: H) -> Self {
        Self { network, heuristic }
    }

    /// Find a route with the fewest connections between two stations.
    ///
    /// Which of several equally short routes is returned is not specified.
    pub fn fewest_transfers(&self, from: &StationKey, to: &StationKey) -> Option<Route> {
        let (start, destination) = self.endpoints(from, to)?;
        let result = fewest_hops(self.network, start, destination);

        match result.trail {
            Some(trail) => {
                let route = trail.to_route(self.network);
                debug!(
                    %from,
                    %to,
                    hops = route.hop_count(),
                    explored = result.explored,
                    "fewest-transfer route found"
                );
                Some(route)
            }
            None => {
                debug!(%from, %to, explored = result.explored, "no route");
                None
            }
        }
    }

    /// Find the route with the lowest total travel time between two stations.
    pub fn fastest(&self, from: &StationKey, to: &StationKey) -> Option<FastestRoute> {
        let (start, destination) = self.endpoints(from, to)?;
        let result = fastest_path(self.network, start, destination, &self.heuristic);

        match result.found {
            Some((trail, total)) => {
                let route = trail.to_route(self.network);
                debug!(
                    %from,
                    %to,
                    total = total.get(),
                    hops = route.hop_count(),
                    explored = result.explored,
                    admissible = self.heuristic.is_admissible(),
                    "fastest route found"
                );
                Some(FastestRoute { route, total })
            }
            None => {
                debug!(%from, %to, explored = result.explored, "no route");
                None
            }
        }
    }

    /// Resolve both endpoints, or `None` if either is not in the network.
    fn endpoints(&self, from: &StationKey, to: &StationKey) -> Option<(StationId, StationId)> {
        let start = self.network.id_of(from);
        let destination = self.network.id_of(to);

        if start.is_none() || destination.is_none() {
            debug!(
                %from,
                %to,
                from_known = start.is_some(),
                to_known = destination.is_some(),
                "unknown endpoint, no route"
            );
        }

        Some((start?, destination?))
    }
}
