//! The transit network graph.
//!
//! A network is a set of stations joined by symmetric, weighted
//! connections. Both ride connections (consecutive stations on one line)
//! and transfer connections (co-located stations on different lines) are
//! ordinary connections; the graph does not tell them apart.

mod builder;
mod error;
mod graph;
pub mod presets;

pub use builder::NetworkBuilder;
pub use error::NetworkError;
pub use graph::{Link, Network, StationId};
pub use presets::{Preset, UnknownPreset};
