//! # Comparison without floating point
//!
//! Equality compares canonical field pairs. Ordering aligns two values on a
//! common denominator by scaling and compares the resulting numerators
//! directly; when the scaled numerators do not fit `i64`, the total order
//! falls back to exact cross multiplication in `i128`, which cannot overflow
//! for 64-bit fields.
use std::cmp::Ordering;

use crate::error::Error;
use crate::rational::Rational;

impl Rational {
    /// Compare two values by scaling both to the common denominator.
    ///
    /// The fallible form of [`Ord::cmp`]: exact as long as the scaled
    /// numerators fit `i64`, and reports `Overflow` instead of wrapping when
    /// they do not.
    pub fn checked_cmp(&self, other: &Self) -> Result<Ordering, Error> {
        let left = self.scale_up(other.denominator)?;
        let right = other.scale_up(self.denominator)?;
        debug_assert_eq!(left.denominator, right.denominator);

        Ok(left.numerator.cmp(&right.numerator))
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        let left = self.reduced();
        let right = other.reduced();

        left.numerator == right.numerator && left.denominator == right.denominator
    }
}

impl Eq for Rational {
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.checked_cmp(other).unwrap_or_else(|_| {
            let left = self.numerator as i128 * other.denominator as i128;
            let right = other.numerator as i128 * self.denominator as i128;
            left.cmp(&right)
        })
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        self.is_integer() && self.numerator / self.denominator == *other
    }
}

impl PartialEq<Rational> for i64 {
    fn eq(&self, other: &Rational) -> bool {
        other == self
    }
}

impl PartialOrd<i64> for Rational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&Rational::from_integer(*other)))
    }
}

impl PartialOrd<Rational> for i64 {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(Rational::from_integer(*self).cmp(other))
    }
}
