//! Network construction error types.

use crate::domain::{InvalidStationKey, StationKey};

/// Errors raised while building a network.
///
/// These always indicate a bug in the data being loaded; a loader should
/// stop rather than carry on with a partial network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A connection or lookup referenced a station that was never added
    #[error("station {0} is not in the network")]
    MissingStation(StationKey),

    /// A connection was given a travel time of zero minutes
    #[error("connection {from} - {to} must take at least one minute")]
    ZeroWeight { from: StationKey, to: StationKey },

    /// A station key supplied as text failed validation
    #[error(transparent)]
    InvalidKey(#[from] InvalidStationKey),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> StationKey {
        StationKey::parse(s).unwrap()
    }

    #[test]
    fn error_display() {
        let err = NetworkError::MissingStation(key("X9"));
        assert_eq!(err.to_string(), "station X9 is not in the network");

        let err = NetworkError::ZeroWeight {
            from: key("K1"),
            to: key("M2"),
        };
        assert_eq!(
            err.to_string(),
            "connection K1 - M2 must take at least one minute"
        );

        let err: NetworkError = StationKey::parse("").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid station key: must not be empty");
    }
}
