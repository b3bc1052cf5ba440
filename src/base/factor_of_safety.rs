use super::SENTINEL_FS;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Holds a factor of safety
///
/// `Unbounded` corresponds to a surface without net driving force; it is safer
/// than any finite value and is reported as [SENTINEL_FS] where a number is needed.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum FactorOfSafety {
    Finite(f64),
    Unbounded,
}

impl FactorOfSafety {
    /// Returns the ratio between resisting and driving forces
    ///
    /// Returns `Unbounded` if `|driving| < epsilon`.
    pub fn from_sums(resisting: f64, driving: f64, epsilon: f64) -> Self {
        let denominator = f64::abs(driving);
        if denominator < epsilon {
            FactorOfSafety::Unbounded
        } else {
            FactorOfSafety::Finite(resisting / denominator)
        }
    }

    /// Returns the numeric value (the sentinel value if unbounded)
    pub fn value(&self) -> f64 {
        match self {
            FactorOfSafety::Finite(fs) => *fs,
            FactorOfSafety::Unbounded => SENTINEL_FS,
        }
    }

    /// Returns the finite value, if any
    pub fn finite(&self) -> Option<f64> {
        match self {
            FactorOfSafety::Finite(fs) => Some(*fs),
            FactorOfSafety::Unbounded => None,
        }
    }

    /// Returns true if unbounded
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        *self == FactorOfSafety::Unbounded
    }

    /// Compares two factors of safety (unbounded is greater than any finite value)
    pub fn compare(&self, other: &FactorOfSafety) -> Ordering {
        match (self, other) {
            (FactorOfSafety::Finite(a), FactorOfSafety::Finite(b)) => a.total_cmp(b),
            (FactorOfSafety::Finite(_), FactorOfSafety::Unbounded) => Ordering::Less,
            (FactorOfSafety::Unbounded, FactorOfSafety::Finite(_)) => Ordering::Greater,
            (FactorOfSafety::Unbounded, FactorOfSafety::Unbounded) => Ordering::Equal,
        }
    }

    /// Returns the absolute difference (zero if both are unbounded; infinity if only one is)
    pub fn distance(&self, other: &FactorOfSafety) -> f64 {
        match (self, other) {
            (FactorOfSafety::Finite(a), FactorOfSafety::Finite(b)) => f64::abs(a - b),
            (FactorOfSafety::Unbounded, FactorOfSafety::Unbounded) => 0.0,
            _ => f64::INFINITY,
        }
    }
}

impl fmt::Display for FactorOfSafety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorOfSafety::Finite(fs) => write!(f, "{:.3}", fs),
            FactorOfSafety::Unbounded => write!(f, "unbounded"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::FactorOfSafety;
    use crate::base::SENTINEL_FS;
    use std::cmp::Ordering;

    #[test]
    fn from_sums_works() {
        assert_eq!(FactorOfSafety::from_sums(3.0, 2.0, 0.001), FactorOfSafety::Finite(1.5));
        assert_eq!(FactorOfSafety::from_sums(3.0, -2.0, 0.001), FactorOfSafety::Finite(1.5));
        assert_eq!(FactorOfSafety::from_sums(3.0, 0.0009, 0.001), FactorOfSafety::Unbounded);
        assert_eq!(FactorOfSafety::from_sums(3.0, -0.0009, 0.001), FactorOfSafety::Unbounded);
    }

    #[test]
    fn value_works() {
        assert_eq!(FactorOfSafety::Finite(1.2).value(), 1.2);
        assert_eq!(FactorOfSafety::Unbounded.value(), SENTINEL_FS);
        assert_eq!(FactorOfSafety::Finite(1.2).finite(), Some(1.2));
        assert_eq!(FactorOfSafety::Unbounded.finite(), None);
        assert!(FactorOfSafety::Unbounded.is_unbounded());
    }

    #[test]
    fn compare_works() {
        let a = FactorOfSafety::Finite(1.5);
        let b = FactorOfSafety::Finite(2000.0);
        let u = FactorOfSafety::Unbounded;
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(b.compare(&u), Ordering::Less);
        assert_eq!(u.compare(&b), Ordering::Greater);
        assert_eq!(u.compare(&u), Ordering::Equal);
        assert_eq!(a.distance(&b), 1998.5);
        assert_eq!(u.distance(&u), 0.0);
        assert_eq!(a.distance(&u), f64::INFINITY);
    }

    #[test]
    fn display_works() {
        assert_eq!(format!("{}", FactorOfSafety::Finite(1.23456)), "1.235");
        assert_eq!(format!("{}", FactorOfSafety::Unbounded), "unbounded");
    }
}
