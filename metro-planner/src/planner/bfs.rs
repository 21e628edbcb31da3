//! Breadth-first search for the route with the fewest hops.
//!
//! Every line change is a transfer connection, so minimising the number of
//! connections traversed approximates minimising transfers. A ride hop and
//! a transfer hop count the same.

use std::collections::VecDeque;
use std::rc::Rc;

use tracing::trace;

use super::trail::Trail;
use crate::network::{Network, StationId};

/// Result of BFS search: the path found, if any, and how many stations were dequeued.
pub(crate) struct BfsResult {
    pub trail: Option<Rc<Trail>>,
    pub explored: usize,
}

/// Find a minimum-hop path from `start` to `destination`.
///
/// Stations are marked visited when enqueued, so each is queued at most
/// once. Among several minimum-hop paths the one returned is whichever is
/// discovered first, which follows the order connections were added.
pub(crate) fn fewest_hops(
    network: &Network,
    start: StationId,
    destination: StationId,
) -> BfsResult {
    let mut visited = vec![false; network.len()];
    let mut queue: VecDeque<Rc<Trail>> = VecDeque::new();
    let mut explored = 0;

    visited[start.index()] = true;
    queue.push_back(Trail::start(start));

    while let Some(trail) = queue.pop_front() {
        explored += 1;

        if trail.station() == destination {
            return BfsResult {
                trail: Some(trail),
                explored,
            };
        }

        for link in network.links(trail.station()) {
            let seen = &mut visited[link.to.index()];
            if !*seen {
                *seen = true;
                queue.push_back(trail.extend(link.to));
            }
        }

        trace!(
            station = %network.station_at(trail.station()).key(),
            queued = queue.len(),
            "BFS expanded station"
        );
    }

    BfsResult {
        trail: None,
        explored,
    }
}
