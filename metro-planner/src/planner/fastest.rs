//! Minimum-time search.
//!
//! Uniform-cost search over a binary heap, optionally ordered by an A*
//! style remaining-time estimate. Superseded heap entries are not removed;
//! they are skipped when popped if the station has already been expanded
//! at an equal or lower cost.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use tracing::trace;

use super::heuristic::Heuristic;
use super::trail::Trail;
use crate::domain::Minutes;
use crate::network::{Network, StationId};

/// A frontier entry.
#[derive(Debug)]
struct Entry {
    /// Accumulated cost plus the heuristic estimate.
    priority: Minutes,
    /// Accumulated cost alone.
    cost: Minutes,
    station: StationId,
    /// Push order, so that otherwise equal entries pop first-in first-out.
    seq: usize,
    trail: Rc<Trail>,
}

// `BinaryHeap` is a max-heap, so every comparison is reversed. Ties on
// priority go to the lower accumulated cost, then to the station added to
// the network first, then to the entry pushed first.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.station.cmp(&self.station))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Result of the fastest-route search.
pub(crate) struct FastestResult {
    /// The path found and its true total travel time.
    pub found: Option<(Rc<Trail>, Minutes)>,
    /// Number of entries popped from the frontier, stale ones included.
    pub explored: usize,
}

/// Find the quickest path from `start` to `destination`.
///
/// The reported total is the real summed travel time; the heuristic only
/// affects ordering.
pub(crate) fn fastest_path<H: Heuristic>(
    network: &Network,
    start: StationId,
    destination: StationId,
    heuristic: &H,
) -> FastestResult {
    let target = network.station_at(destination);
    let mut best: Vec<Option<Minutes>> = vec![None; network.len()];
    let mut frontier = BinaryHeap::new();
    let mut explored = 0;
    let mut pushed = 0;

    frontier.push(Entry {
        priority: Minutes::ZERO,
        cost: Minutes::ZERO,
        station: start,
        seq: pushed,
        trail: Trail::start(start),
    });

    while let Some(Entry {
        cost,
        station,
        trail,
        ..
    }) = frontier.pop()
    {
        explored += 1;

        if station == destination {
            return FastestResult {
                found: Some((trail, cost)),
                explored,
            };
        }

        let recorded = &mut best[station.index()];
        if recorded.is_some_and(|b| b <= cost) {
            continue;
        }
        *recorded = Some(cost);

        for link in network.links(station) {
            // A path whose total overflows is treated as no path
            let Some(next_cost) = cost.checked_add(link.minutes) else {
                trace!(
                    from = %network.station_at(station).key(),
                    to = %network.station_at(link.to).key(),
                    "travel time overflows, connection skipped"
                );
                continue;
            };
            let estimate = heuristic.estimate(network.station_at(link.to), target);
            pushed += 1;
            frontier.push(Entry {
                priority: next_cost.saturating_add(estimate),
                cost: next_cost,
                station: link.to,
                seq: pushed,
                trail: trail.extend(link.to),
            });
        }

        trace!(
            station = %network.station_at(station).key(),
            cost = cost.get(),
            frontier = frontier.len(),
            "expanded station"
        );
    }

    FastestResult {
        found: None,
        explored,
    }
}
