//! Web layer for the metro planner.
//!
//! A small JSON API over one shared network: station listing and the two
//! route queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
