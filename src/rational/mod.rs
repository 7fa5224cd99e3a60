//! # An exact rational number of fixed size
//!
//! A numerator / denominator pair of `i64`s kept in canonical form: the
//! denominator is strictly positive and the two fields share no common factor
//! larger than one. Every operation that produces a new value routes through
//! normalization, so the invariant never escapes to a caller. The one
//! sanctioned exception is scaling (see [`Rational::scale_up`] and
//! [`Rational::scale_down`]), which suspends reduction until the next
//! normalizing operation.
use crate::error::Error;

mod arithmetic;
mod compare;
mod format;
mod macros;
mod ops;


/// An exact fraction of two 64-bit integers.
///
/// The numerator carries the sign; the denominator is always strictly
/// positive. Zero is represented as `0 / 1`. A plain value type: `Copy`,
/// no owned resources, freely shareable.
///
/// All arithmetic is available twice. The `checked_*` methods (and the other
/// `Result`-returning methods) form the primary API: they are pure, never
/// touch their receiver and report [`Error::Overflow`] or
/// [`Error::DivisionByZero`] instead of wrapping or panicking. The operator
/// impls are thin wrappers over those methods that panic on failure, the way
/// operators on primitive integers do in debug builds.
#[derive(Copy, Clone, Debug)]
pub struct Rational {
    /// Sign and magnitude of the value.
    numerator: i64,
    /// Strictly positive at all times.
    denominator: i64,
}

impl Rational {
    /// Zero, in canonical form.
    pub const ZERO: Self = Self { numerator: 0, denominator: 1 };
    /// One.
    pub const ONE: Self = Self { numerator: 1, denominator: 1 };

    /// Create a new value in canonical form.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `denominator` is zero, `Overflow` if the
    /// canonical form is not representable (the only such input is a
    /// denominator of `i64::MIN` next to a numerator it cannot cancel
    /// against).
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, Error> {
        Self::normalized(numerator, denominator)
    }

    /// Create a whole number, `n / 1`.
    pub const fn from_integer(numerator: i64) -> Self {
        Self { numerator, denominator: 1 }
    }

    /// The numerator. Carries the sign of the value.
    pub fn numer(&self) -> i64 {
        self.numerator
    }

    /// The denominator. Strictly positive.
    pub fn denom(&self) -> i64 {
        self.denominator
    }

    /// This value in canonical form.
    ///
    /// A no-op on any value that has not been scaled since its last
    /// normalizing operation. Reduction of a value whose denominator is
    /// already positive cannot fail, which is why this returns `Self` rather
    /// than a `Result`.
    pub fn reduced(&self) -> Self {
        debug_assert!(self.denominator > 0);

        let divisor = gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs());
        debug_assert!(divisor >= 1);

        Self {
            numerator: self.numerator / divisor as i64,
            denominator: self.denominator / divisor as i64,
        }
    }

    /// Normalize an arbitrary field pair into a canonical value.
    ///
    /// Reduction happens on `u64` magnitudes so that `i64::MIN` in either
    /// position is handled without intermediate overflow; the results are
    /// converted back with explicit range checks.
    pub(crate) fn normalized(numerator: i64, denominator: i64) -> Result<Self, Error> {
        if denominator == 0 {
            return Err(Error::InvalidArgument("denominator is zero".to_string()));
        }

        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
        debug_assert!(divisor >= 1);

        let numerator_magnitude = numerator.unsigned_abs() / divisor;
        let denominator_magnitude = denominator.unsigned_abs() / divisor;

        let negative = (numerator < 0) != (denominator < 0);
        let numerator = if negative {
            // Magnitudes up to 2^63 are representable on the negative side.
            numerator_magnitude.wrapping_neg() as i64
        } else {
            i64::try_from(numerator_magnitude).map_err(|_| Error::Overflow)?
        };
        let denominator = i64::try_from(denominator_magnitude).map_err(|_| Error::Overflow)?;

        Ok(Self { numerator, denominator })
    }
}

impl From<i64> for Rational {
    fn from(numerator: i64) -> Self {
        Self::from_integer(numerator)
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = Error;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

/// Greatest common divisor, by Euclid.
///
/// Total on all inputs: `gcd(a, 0) == a` and `gcd(0, 0) == 0`, the zero
/// divisor is checked before any remainder is taken.
pub(crate) fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}
