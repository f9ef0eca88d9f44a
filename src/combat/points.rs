//! Exact fixed-point health/damage values with one decimal place.
//!
//! Damage is a tenth of the attack stat, so storing tenths keeps every value
//! exact and lets the log print `2` or `2.5` instead of float noise.

use std::fmt;
use std::ops::{Sub, SubAssign};

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(i64);

impl Points {
    pub const ZERO: Self = Self(0);

    /// Whole points, e.g. a base HP stat.
    pub const fn whole(value: i64) -> Self {
        Self(value.saturating_mul(10))
    }

    pub const fn from_tenths(tenths: i64) -> Self {
        Self(tenths)
    }

    pub const fn tenths(self) -> i64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 10.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl Sub for Points {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Points {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (whole, frac) = (abs / 10, abs % 10);
        if frac == 0 {
            write!(f, "{sign}{whole}")
        } else {
            write!(f, "{sign}{whole}.{frac}")
        }
    }
}

/// Whole values serialize as integers, fractional ones as floats.
impl Serialize for Points {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 10 == 0 {
            serializer.serialize_i64(self.0 / 10)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_drops_trailing_zero() {
        assert_eq!(Points::whole(2).to_string(), "2");
        assert_eq!(Points::from_tenths(25).to_string(), "2.5");
        assert_eq!(Points::from_tenths(49).to_string(), "4.9");
        assert_eq!(Points::ZERO.to_string(), "0");
    }

    #[test]
    fn display_keeps_sign_below_one() {
        assert_eq!(Points::from_tenths(-5).to_string(), "-0.5");
        assert_eq!(Points::from_tenths(-20).to_string(), "-2");
    }

    #[test]
    fn subtraction_is_exact() {
        let mut hp = Points::whole(15);
        for _ in 0..30 {
            hp -= Points::from_tenths(5);
        }
        assert_eq!(hp, Points::ZERO);
        assert!(!hp.is_positive());
    }

    #[test]
    fn serializes_whole_values_as_integers() {
        assert_eq!(serde_json::to_string(&Points::whole(40)).unwrap(), "40");
        assert_eq!(serde_json::to_string(&Points::from_tenths(-15)).unwrap(), "-1.5");
    }
}
