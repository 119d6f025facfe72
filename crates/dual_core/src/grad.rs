//! Seeding helpers for single-variable differentiation.
//!
//! These wrap the usual pattern of seeding `x` as `Dual::variable(x)`,
//! evaluating a function built from the engine's operations, and reading
//! off the derivative.
//!
//! # Examples
//! ```
//! use dual_core::grad::{grad, value_and_grad};
//! use dual_core::types::Dual;
//!
//! let f = |x: Dual| x * x;
//! assert_eq!(grad(f, 3.0), 6.0);
//! assert_eq!(value_and_grad(f, 3.0), (9.0, 6.0));
//! ```

use tracing::warn;

use crate::types::{Dual, DualError};

/// Derivative of `f` at `x`.
#[inline]
pub fn grad<F>(f: F, x: f64) -> f64
where
    F: Fn(Dual) -> Dual,
{
    f(Dual::variable(x)).derivative
}

/// Value and derivative of `f` at `x`, from a single evaluation.
#[inline]
pub fn value_and_grad<F>(f: F, x: f64) -> (f64, f64)
where
    F: Fn(Dual) -> Dual,
{
    let y = f(Dual::variable(x));
    (y.value, y.derivative)
}

/// Checked variant of [`value_and_grad`].
///
/// Returns a [`DualError`] if the value or derivative is NaN or infinite.
///
/// # Examples
/// ```
/// use dual_core::grad::try_value_and_grad;
/// use dual_core::types::{Dual, DualError};
///
/// let recip = |x: Dual| 1.0 / x;
/// assert_eq!(try_value_and_grad(recip, 2.0), Ok((0.5, -0.25)));
/// assert!(matches!(
///     try_value_and_grad(recip, 0.0),
///     Err(DualError::NonFiniteValue { .. })
/// ));
/// ```
pub fn try_value_and_grad<F>(f: F, x: f64) -> Result<(f64, f64), DualError>
where
    F: Fn(Dual) -> Dual,
{
    let y = f(Dual::variable(x));
    match y.check_finite(x) {
        Ok(y) => Ok((y.value, y.derivative)),
        Err(e) => {
            warn!(x, value = y.value, derivative = y.derivative, "non-finite result");
            Err(e)
        }
    }
}

/// Evaluates [`value_and_grad`] at each point, in order.
pub fn derivative_at_points<F>(f: F, xs: &[f64]) -> Vec<(f64, f64)>
where
    F: Fn(Dual) -> Dual,
{
    xs.iter().map(|&x| value_and_grad(&f, x)).collect()
}
