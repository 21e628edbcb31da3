//! Route planning over a [`Network`](crate::network::Network).
//!
//! Two searches answer two different questions:
//!
//! - [`Router::fewest_transfers`] is a breadth-first search that minimises
//!   the number of connections traversed, ignoring travel times.
//! - [`Router::fastest`] is a uniform-cost search that minimises total travel
//!   time. A [`Heuristic`] can order its frontier A* style.
//!
//! Both searches are synchronous, read the network without modifying it,
//! and report "no route" as `None`.

mod bfs;
mod fastest;
mod heuristic;
mod router;
mod trail;

pub use heuristic::{Heuristic, KeyNumberHeuristic, ZeroHeuristic};
pub use router::Router;
