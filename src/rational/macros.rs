/// Shorthand for creating a rational number in tests.
///
/// `R!(n)` is the whole number `n`, `R!(n, d)` is `n / d` in canonical form.
/// Panics on a zero denominator, which is what a test wants.
#[macro_export]
macro_rules! R {
    ($numer:expr) => {
        $crate::Rational::from_integer($numer)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational::new($numer, $denom).unwrap()
    };
}
