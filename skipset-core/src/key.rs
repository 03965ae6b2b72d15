//! The sentinel-safe key representation shared by the skip set crates.
//!
//! User keys are plain `i64` values, but the skip list needs two keys no
//! user value can ever equal: the head and tail sentinels. [`Bound`] widens
//! `i64` into a three-case total order so those sentinels are unforgeable
//! rather than relying on `i64::MIN`/`i64::MAX` (see the crate's design
//! notes on the sentinel collision this replaces).

use std::cmp::Ordering;

/// A totally ordered key space of `NegInf < Finite(_) < PosInf`.
///
/// Every `i64`, including `i64::MIN` and `i64::MAX`, is representable as a
/// `Finite` payload; only the two `Bound` variants `NegInf`/`PosInf` occupy
/// the sentinel positions, so no user-supplied key can ever collide with a
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The head sentinel's key: less than every other `Bound`.
    NegInf,
    /// An ordinary user key.
    Finite(i64),
    /// The tail sentinel's key: greater than every other `Bound`.
    PosInf,
}

impl Bound {
    /// Returns the wrapped user key, or `None` for a sentinel.
    pub fn finite(self) -> Option<i64> {
        match self {
            Bound::Finite(k) => Some(k),
            _ => None,
        }
    }

    /// `true` for either sentinel variant.
    pub fn is_sentinel(self) -> bool {
        !matches!(self, Bound::Finite(_))
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bound {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(b: &Bound) -> i64 {
            match b {
                Bound::NegInf => 0,
                Bound::Finite(_) => 1,
                Bound::PosInf => 2,
            }
        }
        match (self, other) {
            (Bound::Finite(a), Bound::Finite(b)) => a.cmp(b),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl From<i64> for Bound {
    fn from(key: i64) -> Self {
        Bound::Finite(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_order_across_sentinels() {
        assert!(Bound::NegInf < Bound::Finite(i64::MIN));
        assert!(Bound::Finite(i64::MAX) < Bound::PosInf);
        assert!(Bound::NegInf < Bound::PosInf);
    }

    #[test]
    fn finite_compares_by_payload() {
        assert!(Bound::Finite(3) < Bound::Finite(8));
        assert_eq!(Bound::Finite(5), Bound::Finite(5));
    }

    #[test]
    fn finite_accessor() {
        assert_eq!(Bound::Finite(7).finite(), Some(7));
        assert_eq!(Bound::NegInf.finite(), None);
        assert_eq!(Bound::PosInf.finite(), None);
    }
}
