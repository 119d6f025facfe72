//! Elementary transcendental functions.
//!
//! Each function applies the chain rule `h(f)' = h'(f)·f'`. Domain
//! failures (overflow in `exp`, poles of `tan`) are not signalled; they
//! surface as non-finite values and propagate.

use crate::types::Dual;

/// `exp(f)`, derivative `exp(f)·f'`.
#[inline]
pub fn exp_dual(f: Dual) -> Dual {
    let e = f.value.exp();
    Dual::new(e, e * f.derivative)
}

/// `sin(f)`, derivative `cos(f)·f'`.
///
/// # Examples
/// ```
/// use dual_core::ops::sin_dual;
/// use dual_core::types::Dual;
///
/// let y = sin_dual(Dual::variable(0.0));
/// assert_eq!(y, Dual::new(0.0, 1.0));
/// ```
#[inline]
pub fn sin_dual(f: Dual) -> Dual {
    Dual::new(f.value.sin(), f.value.cos() * f.derivative)
}

/// `cos(f)`, derivative `-sin(f)·f'`.
#[inline]
pub fn cos_dual(f: Dual) -> Dual {
    Dual::new(f.value.cos(), -f.value.sin() * f.derivative)
}

/// `tan(f)`, derivative `f' / cos²(f)`.
///
/// Undefined at odd multiples of π/2; the result there is whatever IEEE-754
/// division produces.
#[inline]
pub fn tan_dual(f: Dual) -> Dual {
    let c = f.value.cos();
    Dual::new(f.value.tan(), f.derivative / (c * c))
}
