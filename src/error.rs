//! # Error reporting for rational arithmetic
//!
//! A single enum classifying every way an operation on a rational value can
//! fail. These are deterministic pure-computation errors; nothing in this
//! crate retries internally, the caller decides whether a failure is fatal.
use std::error;
use std::fmt;

/// Any failure of a rational-number operation.
///
/// Every fallible operation fails at the point of violation and leaves its
/// operands untouched; there is never a partially mutated value to observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A structurally invalid argument.
    ///
    /// Covers a zero denominator supplied anywhere, malformed textual input
    /// (slash placement or count), a scaling factor smaller than one and a
    /// scale-down factor that does not divide both fields.
    ///
    /// The contained `String` is a message for the end user.
    InvalidArgument(String),
    /// Division by, or the reciprocal of, a zero-valued operand.
    DivisionByZero,
    /// An arithmetic step whose true mathematical result does not fit `i64`.
    ///
    /// Checked arithmetic turns would-be wraparound into this variant; no
    /// operation ever wraps silently.
    Overflow,
    /// The exact integer value of a non-integral fraction was requested.
    NonIntegerConversion,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(message) => write!(f, "invalid argument: {}", message),
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::Overflow => write!(f, "value not representable in 64 bits"),
            Error::NonIntegerConversion => {
                write!(f, "exact integer requested of a non-integral fraction")
            }
        }
    }
}

impl error::Error for Error {
}
