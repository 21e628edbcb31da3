//! Remaining-time estimates for ordering the fastest-route frontier.
//!
//! A heuristic only changes the order in which the frontier is explored.
//! The returned route is guaranteed to be the fastest one if and only if
//! the heuristic never overestimates the real remaining travel time.

use crate::domain::{Minutes, Station};

/// Estimate of the travel time still needed from `from` to `to`.
pub trait Heuristic {
    /// Returns the estimated remaining time.
    fn estimate(&self, from: &Station, to: &Station) -> Minutes;

    /// Returns true if `estimate` never exceeds the true remaining time.
    ///
    /// Searches with a heuristic that is not admissible are best-effort:
    /// they still return a valid route, but not necessarily the fastest.
    fn is_admissible(&self) -> bool {
        true
    }
}

/// Estimates zero everywhere, turning the search into plain Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _from: &Station, _to: &Station) -> Minutes {
        Minutes::ZERO
    }
}

/// Estimates the difference between the numbers at the end of two keys.
///
/// `K1` to `K4` is estimated at 3 minutes. Only the trailing digits count,
/// so `M4_12` to `M4_3` is estimated at 9. Keys without a trailing number
/// are estimated at zero. Key numbering says nothing about travel time, so
/// this heuristic can overestimate and its results are best-effort.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyNumberHeuristic;

impl Heuristic for KeyNumberHeuristic {
    fn estimate(&self, from: &Station, to: &Station) -> Minutes {
        match (from.key().numeric_suffix(), to.key().numeric_suffix()) {
            (Some(a), Some(b)) => Minutes::new(a.abs_diff(b)),
            _ => Minutes::ZERO,
        }
    }

    fn is_admissible(&self) -> bool {
        false
    }
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    fn estimate(&self, from: &Station, to: &Station) -> Minutes {
        (**self).estimate(from, to)
    }

    fn is_admissible(&self) -> bool {
        (**self).is_admissible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationKey;

    fn station(key: &str) -> Station {
        Station::new(StationKey::parse(key).unwrap(), key, "Line")
    }

    #[test]
    fn zero_heuristic() {
        assert_eq!(
            ZeroHeuristic.estimate(&station("K1"), &station("K4")),
            Minutes::ZERO
        );
        assert!(ZeroHeuristic.is_admissible());
    }

    #[test]
    fn key_number_heuristic() {
        let h = KeyNumberHeuristic;
        assert_eq!(h.estimate(&station("K1"), &station("K4")), Minutes::new(3));
        assert_eq!(h.estimate(&station("K4"), &station("M1")), Minutes::new(3));
        assert_eq!(
            h.estimate(&station("M4_12"), &station("A1_1")),
            Minutes::new(11)
        );
        assert_eq!(h.estimate(&station("OSB"), &station("K4")), Minutes::ZERO);
        assert!(!h.is_admissible());
    }

    #[test]
    fn key_number_heuristic_reads_trailing_digits_only() {
        let h = KeyNumberHeuristic;
        assert_eq!(h.estimate(&station("M4_12"), &station("M4_3")), Minutes::new(9));
        assert_eq!(h.estimate(&station("A1_1"), &station("M3_1")), Minutes::ZERO);
        assert_eq!(h.estimate(&station("B_24"), &station("B_1")), Minutes::new(23));
        // One letter and a number: the whole number after the letter
        assert_eq!(h.estimate(&station("K12"), &station("T3")), Minutes::new(9));
    }

    #[test]
    fn reference_delegates() {
        let h = &KeyNumberHeuristic;
        assert_eq!(h.estimate(&station("T1"), &station("T4")), Minutes::new(3));
        assert!(!h.is_admissible());
    }
}
