//! Fluent construction of networks from string data.

use tracing::debug;

use super::{Network, NetworkError};
use crate::domain::{Minutes, StationKey};

/// Builder for creating networks.
///
/// Provides a fluent API for adding stations and connections from plain
/// strings. The first invalid key or connection is remembered and returned
/// by [`build`](NetworkBuilder::build); later calls are then ignored.
///
/// # Example
///
/// ```
/// use metro_planner::network::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .station("K1", "Kızılay", "Kırmızı Hat")
///     .station("K2", "Ulus", "Kırmızı Hat")
///     .connect("K1", "K2", 4)
///     .build()
///     .unwrap();
///
/// assert_eq!(network.len(), 2);
/// assert_eq!(network.connection_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: Network,
    error: Option<NetworkError>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn station(mut self, key: &str, name: &str, line: &str) -> Self {
        if self.error.is_some() {
            return self;
        }
        match StationKey::parse(key) {
            Ok(key) => {
                self.inner.add_station(key, name, line);
            }
            Err(e) => self.error = Some(e.into()),
        }
        self
    }

    /// Connect two stations added earlier.
    pub fn connect(mut self, a: &str, b: &str, minutes: u32) -> Self {
        if self.error.is_some() {
            return self;
        }
        let result = StationKey::parse(a)
            .and_then(|a| StationKey::parse(b).map(|b| (a, b)))
            .map_err(NetworkError::from)
            .and_then(|(a, b)| self.inner.add_connection(&a, &b, Minutes::new(minutes)));
        if let Err(e) = result {
            self.error = Some(e);
        }
        self
    }

    /// Build the network, or return the first error encountered.
    pub fn build(self) -> Result<Network, NetworkError> {
        match self.error {
            Some(e) => Err(e),
            None => {
                debug!(
                    stations = self.inner.len(),
                    connections = self.inner.connection_count(),
                    "network built"
                );
                Ok(self.inner)
            }
        }
    }
}
