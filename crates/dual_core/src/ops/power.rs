//! Integer powers of dual numbers.
//!
//! `x^n` is computed by exponentiation by squaring, so the product rule is
//! applied O(log |n|) times rather than O(|n|). Negative exponents raise the
//! reciprocal `1/x` to `|n|`.

use num_traits::One;

use super::arithmetic::{prd_dual, quo_const};
use crate::types::Dual;

/// Raises `x` to the integer power `n` by repeated squaring.
///
/// The accumulator starts at `(1, 0)`. The bits of `|n|` are consumed from
/// least to most significant: a set bit multiplies the accumulator by the
/// current base, and the base is squared after every bit.
///
/// `n = 0` returns `(1, 0)` without touching `x`.
///
/// # Examples
/// ```
/// use dual_core::ops::pow_by_repeated_squaring;
/// use dual_core::types::Dual;
///
/// // d/dx x³ at x=2 is 3 * 2² = 12
/// let y = pow_by_repeated_squaring(Dual::variable(2.0), 3);
/// assert_eq!(y, Dual::new(8.0, 12.0));
/// ```
pub fn pow_by_repeated_squaring(x: Dual, n: i32) -> Dual {
    let mut base = if n < 0 { quo_const(1.0, x) } else { x };
    // Widen before taking the magnitude: |i32::MIN| does not fit in i32.
    let mut num = i64::from(n).unsigned_abs();
    let mut pow = Dual::one();

    while num != 0 {
        if num & 1 == 1 {
            pow = prd_dual(pow, base);
        }
        base = prd_dual(base, base);
        num >>= 1;
    }
    pow
}

/// Integer power `f^n` with its derivative `n·f^(n-1)·f'`.
///
/// # Examples
/// ```
/// use dual_core::ops::pow_const;
/// use dual_core::types::Dual;
///
/// let x = Dual::variable(2.0);
/// assert_eq!(pow_const(x, 0), Dual::new(1.0, 0.0));
/// assert_eq!(pow_const(x, -1), Dual::new(0.5, -0.25));
/// ```
#[inline]
pub fn pow_const(f: Dual, n: i32) -> Dual {
    pow_by_repeated_squaring(f, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Reference implementation: `|n|` successive products.
    fn pow_naive(x: Dual, n: i32) -> Dual {
        let base = if n < 0 { quo_const(1.0, x) } else { x };
        (0..n.unsigned_abs()).fold(Dual::one(), |acc, _| prd_dual(acc, base))
    }

    #[test]
    fn test_zero_exponent_is_identity() {
        assert_eq!(pow_const(Dual::new(3.7, -2.0), 0), Dual::new(1.0, 0.0));
        assert_eq!(pow_const(Dual::new(0.0, 1.0), 0), Dual::new(1.0, 0.0));
    }

    #[test]
    fn test_first_power_is_unchanged() {
        let x = Dual::new(1.5, 0.25);
        assert_eq!(pow_const(x, 1), x);
    }

    #[test]
    fn test_square() {
        // d/dx x² at x=3 is 6
        assert_eq!(pow_const(Dual::variable(3.0), 2), Dual::new(9.0, 6.0));
    }

    #[test]
    fn test_power_rule_small_exponents() {
        let a = 1.3_f64;
        let x = Dual::variable(a);
        for n in 1..=12 {
            let y = pow_const(x, n);
            assert_relative_eq!(y.value, a.powi(n), max_relative = 1e-12);
            assert_relative_eq!(
                y.derivative,
                n as f64 * a.powi(n - 1),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_chain_factor_is_applied() {
        // f = (2, 3): (f⁴)' = 4 * 2³ * 3 = 96
        let y = pow_const(Dual::new(2.0, 3.0), 4);
        assert_eq!(y, Dual::new(16.0, 96.0));
    }

    #[test]
    fn test_negative_exponent() {
        // x⁻² at x=2: value 1/4, derivative -2 * 2⁻³ = -0.25
        let y = pow_const(Dual::variable(2.0), -2);
        assert_relative_eq!(y.value, 0.25, epsilon = 1e-15);
        assert_relative_eq!(y.derivative, -0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_negative_exponent_is_reciprocal_of_positive() {
        let x = Dual::new(1.7, 0.3);
        for n in 1..=9 {
            let pos = pow_const(x, n);
            let neg = pow_const(x, -n);
            assert_relative_eq!(neg.value, 1.0 / pos.value, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_negative_exponent_power_rule() {
        let a = 0.8_f64;
        let x = Dual::variable(a);
        for n in 1..=6 {
            let y = pow_const(x, -n);
            assert_relative_eq!(
                y.derivative,
                -(n as f64) * a.powi(-n - 1),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_zero_base_negative_exponent_is_non_finite() {
        let y = pow_const(Dual::variable(0.0), -1);
        assert_eq!(y.value, f64::INFINITY);
        assert!(!y.derivative.is_finite());
    }

    #[test]
    fn test_extreme_exponent_terminates() {
        // Only checks termination and IEEE-754 saturation.
        let y = pow_const(Dual::variable(2.0), i32::MAX);
        assert_eq!(y.value, f64::INFINITY);

        let y = pow_const(Dual::variable(2.0), i32::MIN);
        assert_eq!(y.value, 0.0);
    }

    #[test]
    fn test_nan_base_propagates() {
        let y = pow_const(Dual::new(f64::NAN, 1.0), 3);
        assert!(y.value.is_nan());
        assert!(y.derivative.is_nan());
    }

    #[test]
    fn test_matches_naive_multiplication() {
        let x = Dual::new(1.1, -0.4);
        for n in -10..=10 {
            let fast = pow_const(x, n);
            let slow = pow_naive(x, n);
            assert_relative_eq!(fast.value, slow.value, max_relative = 1e-12);
            assert_relative_eq!(fast.derivative, slow.derivative, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_method_form() {
        let x = Dual::variable(3.0);
        assert_eq!(x.powi(3), pow_const(x, 3));
    }

    mod proptest_tests {
        use super::*;
        use approx::assert_relative_eq;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_power_rule_property(
                a in 0.1..3.0_f64,
                d in -5.0..5.0_f64,
                n in 1..16_i32
            ) {
                let y = pow_const(Dual::new(a, d), n);
                assert_relative_eq!(y.value, a.powi(n), max_relative = 1e-11);
                assert_relative_eq!(
                    y.derivative,
                    n as f64 * a.powi(n - 1) * d,
                    max_relative = 1e-11,
                    epsilon = 1e-12
                );
            }

            #[test]
            fn test_negative_power_property(a in 0.1..3.0_f64, n in 1..16_i32) {
                let x = Dual::variable(a);
                let pos = pow_const(x, n);
                let neg = pow_const(x, -n);
                assert_relative_eq!(neg.value, 1.0 / pos.value, max_relative = 1e-11);
            }
        }
    }
}
