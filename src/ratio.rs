use std::cmp::Ordering;
use std::fmt;

/// An exact rational frequency multiplier.
///
/// Numerator and denominator are kept as integers, unreduced, until the
/// single conversion to f64 at the point the running fundamental is
/// advanced. Comparisons cross-multiply so no rounding creeps in.
///
/// Invariant: the denominator is positive.
#[derive(Debug, Clone, Copy)]
pub struct Ratio {
    pub numer: i32,
    pub denom: i32,
}

impl Ratio {
    pub const fn new(numer: i32, denom: i32) -> Ratio {
        Ratio { numer, denom }
    }

    /// The identity step, 1/1. Applied when no rule covers a diff.
    pub const fn unison() -> Ratio {
        Ratio::new(1, 1)
    }

    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Ratio) -> bool {
        self.numer as i64 * other.denom as i64 == other.numer as i64 * self.denom as i64
    }
}

impl Eq for Ratio {}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Ratio) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Ratio) -> Ordering {
        let lhs = self.numer as i64 * other.denom as i64;
        let rhs = other.numer as i64 * self.denom as i64;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}
