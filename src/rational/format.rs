//! # Textual round trip
//!
//! The one external format this crate defines: `"5"` or `"-12"` for whole
//! values, `"3 / 4"` or `"-3 / 4"` for fractions, with a single space on each
//! side of the slash and the denominator always rendered positive. The parser
//! accepts the same two shapes, tolerates surrounding whitespace and a
//! missing denominator (defaulting to one), and rejects a leading or trailing
//! slash, more than one slash and a denominator of zero.
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::Error;
use crate::rational::Rational;

impl Rational {
    /// Whether this value is a whole number.
    ///
    /// Decided on the fields as they are, so a scaled value such as `8 / 4`
    /// counts as integral.
    pub fn is_integer(&self) -> bool {
        self.numerator % self.denominator == 0
    }

    /// The exact integer this value equals.
    ///
    /// Truncation is never silent: a non-integral value fails with
    /// `NonIntegerConversion` instead of rounding toward zero.
    pub fn to_integer(&self) -> Result<i64, Error> {
        if self.is_integer() {
            Ok(self.numerator / self.denominator)
        } else {
            Err(Error::NonIntegerConversion)
        }
    }

    /// This value as a float. Lossy.
    ///
    /// The quotient of the fields in `f64`, the widest float available. The
    /// only deliberately inexact operation in this crate.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            // The exact quotient, which for any canonical value is the
            // numerator itself.
            write!(f, "{}", self.numerator / self.denominator)
        } else {
            write!(f, "{} / {}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(Error::InvalidArgument("empty input".to_string()));
        }
        if trimmed.starts_with('/') {
            return Err(Error::InvalidArgument(format!("\"{}\" begins with a slash", trimmed)));
        }
        if trimmed.ends_with('/') {
            return Err(Error::InvalidArgument(format!("\"{}\" ends with a slash", trimmed)));
        }
        if trimmed.matches('/').count() > 1 {
            return Err(Error::InvalidArgument(format!(
                "\"{}\" contains more than one slash", trimmed,
            )));
        }

        let (numerator, denominator) = match trimmed.split_once('/') {
            None => (parse_integer(trimmed)?, 1),
            Some((numerator_text, denominator_text)) => {
                let numerator = parse_integer(numerator_text.trim())?;
                // A slash followed by nothing integer-valued defaults the
                // denominator to one; a literal that is too large does not.
                let denominator = match parse_integer(denominator_text.trim()) {
                    Ok(denominator) => denominator,
                    Err(Error::Overflow) => return Err(Error::Overflow),
                    Err(_) => 1,
                };
                (numerator, denominator)
            }
        };

        Self::normalized(numerator, denominator)
    }
}

/// Parse an integer literal, distinguishing a too-large literal from a
/// malformed one.
fn parse_integer(text: &str) -> Result<i64, Error> {
    i64::from_str(text).map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::Overflow,
        _ => Error::InvalidArgument(format!("\"{}\" is not an integer", text)),
    })
}
