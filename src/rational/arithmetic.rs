//! # Checked arithmetic
//!
//! The arithmetic engine behind both the `Result` API and the operator
//! surface. Every field computation goes through `i64::checked_*`, so a true
//! result that does not fit 64 bits is reported as [`Error::Overflow`] rather
//! than wrapped. Every operation normalizes its result, except the two
//! scaling operations, which exist precisely to produce aligned, unreduced
//! field pairs.
use crate::error::Error;
use crate::rational::Rational;

impl Rational {
    /// The sum of two values.
    ///
    /// `a/b + c/d = (ad + bc) / bd`, normalized.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, Error> {
        let left = self.numerator.checked_mul(rhs.denominator).ok_or(Error::Overflow)?;
        let right = self.denominator.checked_mul(rhs.numerator).ok_or(Error::Overflow)?;
        let numerator = left.checked_add(right).ok_or(Error::Overflow)?;
        let denominator = self.denominator.checked_mul(rhs.denominator).ok_or(Error::Overflow)?;

        Self::normalized(numerator, denominator)
    }

    /// The difference of two values.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, Error> {
        let left = self.numerator.checked_mul(rhs.denominator).ok_or(Error::Overflow)?;
        let right = self.denominator.checked_mul(rhs.numerator).ok_or(Error::Overflow)?;
        let numerator = left.checked_sub(right).ok_or(Error::Overflow)?;
        let denominator = self.denominator.checked_mul(rhs.denominator).ok_or(Error::Overflow)?;

        Self::normalized(numerator, denominator)
    }

    /// The product of two values.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, Error> {
        let numerator = self.numerator.checked_mul(rhs.numerator).ok_or(Error::Overflow)?;
        let denominator = self.denominator.checked_mul(rhs.denominator).ok_or(Error::Overflow)?;

        Self::normalized(numerator, denominator)
    }

    /// The quotient of two values.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        if rhs.numerator == 0 {
            return Err(Error::DivisionByZero);
        }

        let numerator = self.numerator.checked_mul(rhs.denominator).ok_or(Error::Overflow)?;
        let denominator = self.denominator.checked_mul(rhs.numerator).ok_or(Error::Overflow)?;

        Self::normalized(numerator, denominator)
    }

    /// The additive inverse.
    ///
    /// Fails with `Overflow` only for a numerator of `i64::MIN`.
    pub fn checked_neg(&self) -> Result<Self, Error> {
        let numerator = self.numerator.checked_neg().ok_or(Error::Overflow)?;

        Self::normalized(numerator, self.denominator)
    }

    /// The multiplicative inverse: numerator and denominator swapped.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if this value is zero.
    pub fn reciprocal(&self) -> Result<Self, Error> {
        if self.numerator == 0 {
            return Err(Error::DivisionByZero);
        }

        Self::normalized(self.denominator, self.numerator)
    }

    /// This value plus exactly one whole unit.
    pub fn increment(&self) -> Result<Self, Error> {
        let numerator = self.numerator.checked_add(self.denominator).ok_or(Error::Overflow)?;

        Self::normalized(numerator, self.denominator)
    }

    /// This value minus exactly one whole unit.
    pub fn decrement(&self) -> Result<Self, Error> {
        let numerator = self.numerator.checked_sub(self.denominator).ok_or(Error::Overflow)?;

        Self::normalized(numerator, self.denominator)
    }

    /// This value raised to an integer power.
    ///
    /// An exponent of zero yields one, whatever the base. A negative exponent
    /// raises to the absolute exponent and takes the reciprocal, so a zero
    /// base fails with `DivisionByZero` there. The power is computed by
    /// repeated multiplication with every step overflow-checked; bases whose
    /// reduced magnitude is zero or one short-circuit, any other base either
    /// finishes or overflows within 64 steps.
    pub fn checked_pow(&self, exponent: i64) -> Result<Self, Error> {
        if exponent == 0 {
            return Ok(Self::ONE);
        }

        let base = self.reduced();

        if base.numerator == 0 {
            return if exponent > 0 { Ok(Self::ZERO) } else { Err(Error::DivisionByZero) };
        }
        if base.numerator.unsigned_abs() == 1 && base.denominator == 1 {
            // (±1)^n, decided by the exponent's parity.
            return Ok(if base.numerator == 1 || exponent % 2 == 0 { Self::ONE } else { base });
        }

        let mut result = base;
        let mut remaining = exponent.unsigned_abs() - 1;
        while remaining > 0 {
            result = result.checked_mul(&base)?;
            remaining -= 1;
        }

        if exponent < 0 {
            result.reciprocal()
        } else {
            Ok(result)
        }
    }

    /// Multiply both fields by a factor, without reducing the result.
    ///
    /// The one sanctioned way to obtain a non-canonical representation, used
    /// to align two denominators for direct numerator comparison. The next
    /// normalizing operation undoes it.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `factor` is smaller than one, `Overflow` if
    /// either scaled field leaves the `i64` range.
    pub fn scale_up(&self, factor: i64) -> Result<Self, Error> {
        if factor < 1 {
            return Err(Error::InvalidArgument(format!(
                "scale factor must be at least 1, got {}", factor,
            )));
        }

        let numerator = self.numerator.checked_mul(factor).ok_or(Error::Overflow)?;
        let denominator = self.denominator.checked_mul(factor).ok_or(Error::Overflow)?;
        debug_assert!(denominator > 0);

        Ok(Self { numerator, denominator })
    }

    /// Divide both fields by a factor that divides them both evenly.
    ///
    /// The inverse of [`Rational::scale_up`]. No reduction is performed
    /// beyond the division itself, so scaling a value down by the factor it
    /// was scaled up by restores the original fields exactly.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `factor` is smaller than one or does not evenly
    /// divide both fields.
    pub fn scale_down(&self, factor: i64) -> Result<Self, Error> {
        if factor < 1 {
            return Err(Error::InvalidArgument(format!(
                "scale factor must be at least 1, got {}", factor,
            )));
        }
        if self.numerator % factor != 0 || self.denominator % factor != 0 {
            return Err(Error::InvalidArgument(format!(
                "{} does not divide both fields of {} / {}",
                factor, self.numerator, self.denominator,
            )));
        }

        Ok(Self {
            numerator: self.numerator / factor,
            denominator: self.denominator / factor,
        })
    }

    /// The smallest denominator common to the reduced forms of two values.
    ///
    /// Equal reduced denominators are their own answer; when one divides the
    /// other, the larger; otherwise their product. Works on reduced copies
    /// and never mutates either operand.
    pub fn scd(&self, other: &Self) -> Result<i64, Error> {
        let left = self.reduced().denominator;
        let right = other.reduced().denominator;

        if left == right {
            Ok(left)
        } else if left % right == 0 {
            Ok(left)
        } else if right % left == 0 {
            Ok(right)
        } else {
            left.checked_mul(right).ok_or(Error::Overflow)
        }
    }
}
