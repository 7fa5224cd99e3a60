//! # Exact rational arithmetic
//!
//! A rational number as a pair of 64-bit integers, for applications where the
//! representation error of floating point is unacceptable: ratios,
//! probabilities, chains of exact divisions. Values are kept in canonical
//! form (positive denominator, no common factor), arithmetic is
//! overflow-checked, comparison never converts to floating point, and the
//! textual form `"3 / 4"` round-trips.
//!
//! ```
//! use std::str::FromStr;
//!
//! use exact_rational::Rational;
//!
//! let half = Rational::new(4, 8).unwrap();
//! let third = Rational::new(1, 3).unwrap();
//! assert_eq!((half + third).to_string(), "5 / 6");
//! assert_eq!(Rational::from_str("3 / 4").unwrap().checked_pow(-2).unwrap(), Rational::new(16, 9).unwrap());
//! ```
#![warn(missing_docs)]

pub use error::Error;
pub use rational::Rational;

mod error;
mod rational;

#[cfg(test)]
mod tests;
