//! Paths under construction during a search.
//!
//! Every frontier entry owns the path that led to it. Paths are shared,
//! immutable linked lists: extending a trail allocates one node pointing
//! back at its parent, which many siblings may share.

use std::rc::Rc;

use crate::domain::Route;
use crate::network::{Network, StationId};

/// The last station of a path plus a link to the path before it.
#[derive(Debug)]
pub(crate) struct Trail {
    station: StationId,
    prev: Option<Rc<Trail>>,
}

impl Trail {
    /// A path consisting of the start station alone.
    pub(crate) fn start(station: StationId) -> Rc<Trail> {
        Rc::new(Trail {
            station,
            prev: None,
        })
    }

    /// The path extended by one station.
    pub(crate) fn extend(self: &Rc<Self>, station: StationId) -> Rc<Trail> {
        Rc::new(Trail {
            station,
            prev: Some(Rc::clone(self)),
        })
    }

    /// The station this path ends at.
    pub(crate) fn station(&self) -> StationId {
        self.station
    }

    /// Resolve the path to stations, origin first.
    pub(crate) fn to_route(&self, network: &Network) -> Route {
        let mut stations = Vec::new();
        let mut cursor = Some(self);
        while let Some(step) = cursor {
            stations.push(network.station_at(step.station).clone());
            cursor = step.prev.as_deref();
        }
        stations.reverse();
        Route::from_path(stations)
    }
}
