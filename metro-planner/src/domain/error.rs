//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from network construction errors.

use super::StationKey;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Route has no stations
    #[error("route must have at least one station")]
    EmptyRoute,

    /// Route visits the same station twice
    #[error("route visits station {0} more than once")]
    RepeatedStation(StationKey),
}
