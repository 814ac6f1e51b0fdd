//! Small numeric helpers usable in `const` contexts.

/// Raises `base` to the integer power `n`.
///
/// Positive powers multiply `base` into the result `n` times, negative powers divide the result by `base` `|n|`
/// times, and `n == 0` yields `1.0`. Nothing is trapped: a zero `base` with a negative `n` produces an infinity (or
/// NaN) exactly as the repeated IEEE-754 divisions would.
///
/// Being a `const fn` allows unit conversion factors to be folded at compile time.
///
/// ```rust
/// use measurement_core::math::powi;
///
/// assert_eq!(powi(2.0, 3), 8.0);
/// assert_eq!(powi(2.0, -2), 0.25);
/// assert_eq!(powi(10.0, 0), 1.0);
/// ```
pub const fn powi(base: f64, n: i32) -> f64 {
    if n == 0 {
        return 1.0;
    }

    let mut result = 1.0;
    let steps = n.unsigned_abs();
    let mut i = 0;
    if n > 0 {
        while i < steps {
            result *= base;
            i += 1;
        }
    } else {
        while i < steps {
            result /= base;
            i += 1;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn zero_exponent_is_one() {
        assert_eq!(powi(0.0, 0), 1.0);
        assert_eq!(powi(123.4, 0), 1.0);
        assert_eq!(powi(-7.0, 0), 1.0);
    }

    #[test]
    fn positive_exponents() {
        assert_eq!(powi(2.0, 3), 8.0);
        assert_eq!(powi(10.0, 3), 1000.0);
        assert_eq!(powi(-2.0, 3), -8.0);
    }

    #[test]
    fn negative_exponents() {
        assert_eq!(powi(2.0, -2), 0.25);
        assert_relative_eq!(powi(10.0, -3), 1e-3, max_relative = 1e-15);
        assert_relative_eq!(powi(10.0, -6), 1e-6, max_relative = 1e-15);
    }

    #[test]
    fn zero_base_negative_exponent_is_infinite() {
        assert!(powi(0.0, -1).is_infinite());
        assert!(powi(0.0, -2).is_sign_positive());
    }

    #[test]
    fn usable_in_const_context() {
        const KILO: f64 = powi(10.0, 3);
        assert_eq!(KILO, 1000.0);
    }

    proptest! {
        #[test]
        fn prop_inverse_powers_cancel(base in 0.5..2.0f64, n in 0i32..20) {
            let product = powi(base, n) * powi(base, -n);
            prop_assert!((product - 1.0).abs() < 1e-12);
        }

        #[test]
        fn prop_matches_std_powi(base in -3.0..3.0f64, n in -10i32..10) {
            prop_assume!(base.abs() > 1e-3);
            let expected = base.powi(n);
            prop_assert!((powi(base, n) - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }
}
