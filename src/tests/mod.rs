//! # Cross-module scenarios and randomized properties
//!
//! End-to-end chains through construction, arithmetic, comparison and the
//! textual round trip, followed by property checks over randomly drawn
//! values.
use std::cmp::Ordering;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Error;
use crate::rational::Rational;
use crate::R;

#[test]
fn parse_then_power() {
    let x = Rational::from_str("3 / 4").unwrap();
    let raised = x.checked_pow(-2).unwrap();
    assert_eq!(raised, R!(16, 9));
    assert_eq!(raised.to_string(), "16 / 9");
}

#[test]
fn division_chain_stays_exact() {
    // 1 divided by 3, ten times, and back again: floating point would have
    // drifted long before this.
    let mut x = R!(1);
    for _ in 0..10 {
        x /= 3;
    }
    assert_eq!(x, R!(1, 59_049));
    for _ in 0..10 {
        x *= 3;
    }
    assert_eq!(x, R!(1));
}

#[test]
fn growth_beyond_the_range_is_reported() {
    let third = R!(1, 3);
    assert_eq!(third.checked_pow(40), Err(Error::Overflow));

    // Just inside: 3^39 < 2^63.
    assert!(third.checked_pow(39).is_ok());
}

#[test]
fn scaling_aligns_denominators_for_comparison() {
    let x = R!(2, 3);
    let y = R!(3, 4);

    let common = x.scd(&y).unwrap();
    assert_eq!(common, 12);

    let x_aligned = x.scale_up(common / x.denom()).unwrap();
    let y_aligned = y.scale_up(common / y.denom()).unwrap();
    assert_eq!(x_aligned.denom(), y_aligned.denom());
    assert!(x_aligned.numer() < y_aligned.numer());
    assert!(x < y);
}

fn draw(rng: &mut StdRng) -> Rational {
    Rational::new(rng.gen_range(-10_000..=10_000), rng.gen_range(1..=10_000)).unwrap()
}

#[test]
fn canonical_form_is_maintained() {
    let mut rng = StdRng::seed_from_u64(0);

    for _ in 0..1_000 {
        let x = draw(&mut rng);
        let y = draw(&mut rng);

        for value in [
            x.checked_add(&y).unwrap(),
            x.checked_sub(&y).unwrap(),
            x.checked_mul(&y).unwrap(),
            x.increment().unwrap(),
            x.decrement().unwrap(),
        ] {
            assert!(value.denom() > 0);
            assert_eq!(
                crate::rational::gcd(value.numer().unsigned_abs(), value.denom().unsigned_abs()),
                1,
            );
        }
    }
}

#[test]
fn format_parse_round_trip() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..1_000 {
        let x = draw(&mut rng);
        assert_eq!(Rational::from_str(&x.to_string()), Ok(x));
    }
}

#[test]
fn additive_inverse() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..1_000 {
        let x = draw(&mut rng);
        assert_eq!(x + (-x), R!(0));
    }
}

#[test]
fn reciprocal_involution_and_power_identity() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..1_000 {
        let x = draw(&mut rng);
        if x != 0 {
            assert_eq!(x.reciprocal().unwrap().reciprocal().unwrap(), x);
            assert_eq!(x.checked_pow(0), Ok(R!(1)));
        }
    }
}

#[test]
fn scale_round_trip_restores_fields() {
    let mut rng = StdRng::seed_from_u64(4);

    for _ in 0..1_000 {
        let x = draw(&mut rng);
        let factor = rng.gen_range(1..=1_000);

        let scaled = x.scale_up(factor).unwrap();
        let back = scaled.scale_down(factor).unwrap();
        assert_eq!(back.numer(), x.numer());
        assert_eq!(back.denom(), x.denom());
    }
}

#[test]
fn increment_decrement_inverse() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..1_000 {
        let x = draw(&mut rng);
        let there_and_back = x.increment().unwrap().decrement().unwrap();
        assert_eq!(there_and_back.numer(), x.numer());
        assert_eq!(there_and_back.denom(), x.denom());
    }
}

#[test]
fn total_order_trichotomy() {
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..1_000 {
        let x = draw(&mut rng);
        let y = draw(&mut rng);

        let outcomes = [x < y, x == y, x > y];
        assert_eq!(outcomes.iter().filter(|&&holds| holds).count(), 1);

        // The drawn magnitudes are far inside f64's exact integer range, so
        // the float quotients order the same way.
        match x.cmp(&y) {
            Ordering::Less => assert!(x.to_f64() < y.to_f64()),
            Ordering::Equal => assert_eq!(x.to_f64(), y.to_f64()),
            Ordering::Greater => assert!(x.to_f64() > y.to_f64()),
        }
    }
}
