//! Domain types for the metro planner.
//!
//! This module contains the core value types shared by the network and the
//! planner. All types enforce their invariants at construction time, so code
//! that receives these types can trust their validity.

mod error;
mod minutes;
mod route;
mod station;

pub use error::DomainError;
pub use minutes::Minutes;
pub use route::{FastestRoute, Route};
pub use station::{InvalidStationKey, MAX_KEY_LEN, Station, StationKey};
