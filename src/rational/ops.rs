//! # The operator surface
//!
//! Thin restatements of the checked primitives as `std::ops` and num-traits
//! impls, generated mechanically for every operand combination: value with
//! value, value with `i64`, in both orders, owned and by reference. The
//! operators panic on [`Error::Overflow`] and [`Error::DivisionByZero`]; any
//! caller that wants those as values uses the `checked_*` API instead.
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{Inv, One, Pow, ToPrimitive, Zero};

use crate::error::Error;
use crate::rational::Rational;

/// Unwrap an exact result, panicking with the error's own message.
fn expect_exact(result: Result<Rational, Error>) -> Rational {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{}", error),
    }
}

macro_rules! binary_operator {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                expect_exact(self.$checked(&rhs))
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Self::Output {
                expect_exact(self.$checked(rhs))
            }
        }

        impl $trait<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                expect_exact(self.$checked(&rhs))
            }
        }

        impl $trait<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Self::Output {
                expect_exact(self.$checked(rhs))
            }
        }

        impl $trait<i64> for Rational {
            type Output = Rational;

            fn $method(self, rhs: i64) -> Self::Output {
                expect_exact(self.$checked(&Rational::from_integer(rhs)))
            }
        }

        impl $trait<i64> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: i64) -> Self::Output {
                expect_exact(self.$checked(&Rational::from_integer(rhs)))
            }
        }

        impl $trait<Rational> for i64 {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                expect_exact(Rational::from_integer(self).$checked(&rhs))
            }
        }

        impl $trait<&Rational> for i64 {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Self::Output {
                expect_exact(Rational::from_integer(self).$checked(rhs))
            }
        }
    };
}

binary_operator!(Add, add, checked_add);
binary_operator!(Sub, sub, checked_sub);
binary_operator!(Mul, mul, checked_mul);
binary_operator!(Div, div, checked_div);

macro_rules! assign_operator {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait<Rational> for Rational {
            fn $method(&mut self, rhs: Rational) {
                *self = expect_exact(self.$checked(&rhs));
            }
        }

        impl $trait<&Rational> for Rational {
            fn $method(&mut self, rhs: &Rational) {
                *self = expect_exact(self.$checked(rhs));
            }
        }

        impl $trait<i64> for Rational {
            fn $method(&mut self, rhs: i64) {
                *self = expect_exact(self.$checked(&Rational::from_integer(rhs)));
            }
        }
    };
}

assign_operator!(AddAssign, add_assign, checked_add);
assign_operator!(SubAssign, sub_assign, checked_sub);
assign_operator!(MulAssign, mul_assign, checked_mul);
assign_operator!(DivAssign, div_assign, checked_div);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        expect_exact(self.checked_neg())
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        expect_exact(self.checked_neg())
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::ZERO, |total, value| total + value)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::ZERO, |total, value| total + value)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::ONE, |total, value| total * value)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::ONE, |total, value| total * value)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::ONE
    }
}

impl Inv for Rational {
    type Output = Rational;

    fn inv(self) -> Self::Output {
        expect_exact(self.reciprocal())
    }
}

impl Inv for &Rational {
    type Output = Rational;

    fn inv(self) -> Self::Output {
        expect_exact(self.reciprocal())
    }
}

impl Pow<i64> for Rational {
    type Output = Rational;

    fn pow(self, exponent: i64) -> Self::Output {
        expect_exact(self.checked_pow(exponent))
    }
}

impl Pow<i64> for &Rational {
    type Output = Rational;

    fn pow(self, exponent: i64) -> Self::Output {
        expect_exact(self.checked_pow(exponent))
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().ok()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_integer().ok().and_then(|value| u64::try_from(value).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self))
    }
}
