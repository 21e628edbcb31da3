//! Station identity types.

use std::fmt;

use serde::{Serialize, Serializer};

/// Longest station key accepted, in bytes.
pub const MAX_KEY_LEN: usize = 32;

/// Error returned when parsing an invalid station key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station key: {reason}")]
pub struct InvalidStationKey {
    reason: &'static str,
}

/// A unique station key such as `K1` or `M4_12`.
///
/// Keys are non-empty, at most [`MAX_KEY_LEN`] bytes long and contain no
/// whitespace or control characters. This type guarantees that any
/// `StationKey` value is valid by construction.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StationKey;
///
/// let key = StationKey::parse("M4_12").unwrap();
/// assert_eq!(key.as_str(), "M4_12");
/// assert_eq!(key.numeric_suffix(), Some(12));
///
/// // Empty keys are rejected
/// assert!(StationKey::parse("").is_err());
///
/// // So are keys containing whitespace
/// assert!(StationKey::parse("K 1").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationKey(Box<str>);

impl StationKey {
    /// Parse a station key from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationKey> {
        if s.is_empty() {
            return Err(InvalidStationKey {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_KEY_LEN {
            return Err(InvalidStationKey {
                reason: "must be at most 32 bytes",
            });
        }

        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidStationKey {
                reason: "must not contain whitespace or control characters",
            });
        }

        Ok(StationKey(s.into()))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number formed by the trailing ASCII digits of the key.
    ///
    /// `K4` gives 4 and `M4_12` gives 12. Keys without trailing digits, or
    /// whose digits overflow a `u32`, give `None`.
    pub fn numeric_suffix(&self) -> Option<u32> {
        let stem = self.0.trim_end_matches(|c: char| c.is_ascii_digit());
        self.0[stem.len()..].parse().ok()
    }
}

impl fmt::Debug for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationKey({})", self.as_str())
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StationKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single (platform, line) pair in the network.
///
/// Two lines calling at the same physical platform are two distinct
/// stations, joined by a transfer connection. Stations are immutable once
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    key: StationKey,
    name: String,
    line: String,
}

impl Station {
    /// Creates a station.
    pub fn new(key: StationKey, name: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
            line: line.into(),
        }
    }

    /// Returns the unique key of this station.
    pub fn key(&self) -> &StationKey {
        &self.key
    }

    /// Returns the display name, e.g. "Kızılay".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the line this station belongs to.
    pub fn line(&self) -> &str {
        &self.line
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z][A-Z0-9_]{0,31}") {
            let key = StationKey::parse(&s).unwrap();
            prop_assert_eq!(key.as_str(), s.as_str());
        }

        /// Any key containing a space is rejected
        #[test]
        fn spaces_rejected(a in "[A-Z]{0,5}", b in "[A-Z0-9]{0,5}") {
            let s = format!("{a} {b}");
            prop_assert!(StationKey::parse(&s).is_err());
        }

        /// The suffix is the number written after the stem
        #[test]
        fn suffix_matches_written_number(stem in "[A-Z]{1,4}_?", n in 0u32..100_000) {
            let key = StationKey::parse(&format!("{stem}{n}")).unwrap();
            prop_assert_eq!(key.numeric_suffix(), Some(n));
        }
    }
}
