//! Travel time in whole minutes.

use std::fmt;

use serde::Serialize;

/// A travel time in whole minutes.
///
/// Used both for the weight of a single connection and for route totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Minutes(u32);

impl Minutes {
    /// Zero minutes.
    pub const ZERO: Minutes = Minutes(0);

    /// Creates a travel time.
    pub const fn new(minutes: u32) -> Self {
        Minutes(minutes)
    }

    /// Returns the number of minutes.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns true if this is zero minutes.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Adds two travel times, or `None` if the total does not fit.
    pub const fn checked_add(self, other: Minutes) -> Option<Minutes> {
        match self.0.checked_add(other.0) {
            Some(total) => Some(Minutes(total)),
            None => None,
        }
    }

    /// Adds two travel times, clamping at `u32::MAX` minutes.
    pub const fn saturating_add(self, other: Minutes) -> Minutes {
        Minutes(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_add() {
        assert_eq!(
            Minutes::new(4).checked_add(Minutes::new(6)),
            Some(Minutes::new(10))
        );
        assert_eq!(
            Minutes::new(u32::MAX).checked_add(Minutes::ZERO),
            Some(Minutes::new(u32::MAX))
        );
    }

    #[test]
    fn checked_add_overflow() {
        let half = Minutes::new(u32::MAX / 2 + 1);
        assert_eq!(half.checked_add(half), None);
        assert_eq!(Minutes::new(u32::MAX).checked_add(Minutes::new(1)), None);
    }

    #[test]
    fn saturating_add_clamps() {
        let near_max = Minutes::new(u32::MAX - 1);
        assert_eq!(near_max.saturating_add(Minutes::new(5)), Minutes::new(u32::MAX));
    }

    #[test]
    fn zero() {
        assert!(Minutes::ZERO.is_zero());
        assert!(!Minutes::new(1).is_zero());
        assert_eq!(Minutes::default(), Minutes::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(Minutes::new(25).to_string(), "25 min");
    }

    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&Minutes::new(19)).unwrap(), "19");
    }
}
