//! Arithmetic rules for dual numbers.
//!
//! # Mathematical Definition
//! ```text
//! (a + a'ε) + (b + b'ε) = (a + b) + (a' + b')ε
//! (a + a'ε) - (b + b'ε) = (a - b) + (a' - b')ε
//! (a + a'ε) * (b + b'ε) = ab + (a'b + b'a)ε
//! (a + a'ε) / (b + b'ε) = a/b + ((a'b - b'a) / b²)ε
//! ```
//!
//! Scalars are treated as dual numbers with zero derivative. All functions
//! are total: a zero divisor yields NaN or infinity, never a panic.
//!
//! The operator impls at the bottom of this module delegate to the free
//! functions so both spellings compute bit-identical results.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::types::Dual;

/// Sum rule: `(f + g)' = f' + g'`.
#[inline]
pub fn add_dual(f: Dual, g: Dual) -> Dual {
    Dual::new(f.value + g.value, f.derivative + g.derivative)
}

/// Adds a constant. The derivative is unchanged.
#[inline]
pub fn add_const(f: Dual, c: f64) -> Dual {
    Dual::new(f.value + c, f.derivative)
}

/// Difference rule: `(f - g)' = f' - g'`.
#[inline]
pub fn sub_dual(f: Dual, g: Dual) -> Dual {
    Dual::new(f.value - g.value, f.derivative - g.derivative)
}

/// Product rule: `(f·g)' = f'·g + g'·f`.
///
/// # Examples
/// ```
/// use dual_core::ops::prd_dual;
/// use dual_core::types::Dual;
///
/// let x = Dual::variable(2.0);
/// let y = prd_dual(x, x);
/// assert_eq!(y, Dual::new(4.0, 4.0));
/// ```
#[inline]
pub fn prd_dual(f: Dual, g: Dual) -> Dual {
    Dual::new(
        f.value * g.value,
        f.derivative * g.value + g.derivative * f.value,
    )
}

/// Multiplies by a constant: `(c·f)' = c·f'`.
#[inline]
pub fn prd_const(f: Dual, c: f64) -> Dual {
    Dual::new(f.value * c, f.derivative * c)
}

/// Quotient rule: `(f / g)' = (f'·g - g'·f) / g²`.
///
/// `g.value == 0` is not guarded; the result follows IEEE-754 division.
#[inline]
pub fn quo_dual(f: Dual, g: Dual) -> Dual {
    Dual::new(
        f.value / g.value,
        (f.derivative * g.value - g.derivative * f.value) / (g.value * g.value),
    )
}

/// Constant divided by a dual number: `(c / f)' = -c·f' / f²`.
///
/// # Examples
/// ```
/// use dual_core::ops::quo_const;
/// use dual_core::types::Dual;
///
/// let r = quo_const(5.0, Dual::new(2.0, 3.0));
/// assert_eq!(r.value, 2.5);
/// assert_eq!(r.derivative, -3.75);
/// ```
#[inline]
pub fn quo_const(c: f64, f: Dual) -> Dual {
    Dual::new(c / f.value, -c * f.derivative / (f.value * f.value))
}

// ========================================
// Operator overloads
// ========================================

impl Add for Dual {
    type Output = Dual;

    #[inline]
    fn add(self, rhs: Dual) -> Dual {
        add_dual(self, rhs)
    }
}

impl Add<f64> for Dual {
    type Output = Dual;

    #[inline]
    fn add(self, rhs: f64) -> Dual {
        add_const(self, rhs)
    }
}

impl Add<Dual> for f64 {
    type Output = Dual;

    #[inline]
    fn add(self, rhs: Dual) -> Dual {
        add_const(rhs, self)
    }
}

impl Sub for Dual {
    type Output = Dual;

    #[inline]
    fn sub(self, rhs: Dual) -> Dual {
        sub_dual(self, rhs)
    }
}

impl Sub<f64> for Dual {
    type Output = Dual;

    #[inline]
    fn sub(self, rhs: f64) -> Dual {
        add_const(self, -rhs)
    }
}

impl Sub<Dual> for f64 {
    type Output = Dual;

    #[inline]
    fn sub(self, rhs: Dual) -> Dual {
        add_const(-rhs, self)
    }
}

impl Mul for Dual {
    type Output = Dual;

    #[inline]
    fn mul(self, rhs: Dual) -> Dual {
        prd_dual(self, rhs)
    }
}

impl Mul<f64> for Dual {
    type Output = Dual;

    #[inline]
    fn mul(self, rhs: f64) -> Dual {
        prd_const(self, rhs)
    }
}

impl Mul<Dual> for f64 {
    type Output = Dual;

    #[inline]
    fn mul(self, rhs: Dual) -> Dual {
        prd_const(rhs, self)
    }
}

impl Div for Dual {
    type Output = Dual;

    #[inline]
    fn div(self, rhs: Dual) -> Dual {
        quo_dual(self, rhs)
    }
}

impl Div<f64> for Dual {
    type Output = Dual;

    #[allow(clippy::suspicious_arithmetic_impl)]
    #[inline]
    fn div(self, rhs: f64) -> Dual {
        prd_const(self, 1.0 / rhs)
    }
}

impl Div<Dual> for f64 {
    type Output = Dual;

    #[inline]
    fn div(self, rhs: Dual) -> Dual {
        quo_const(self, rhs)
    }
}

impl Neg for Dual {
    type Output = Dual;

    #[inline]
    fn neg(self) -> Dual {
        Dual::new(-self.value, -self.derivative)
    }
}

impl AddAssign for Dual {
    #[inline]
    fn add_assign(&mut self, rhs: Dual) {
        *self = add_dual(*self, rhs);
    }
}

impl SubAssign for Dual {
    #[inline]
    fn sub_assign(&mut self, rhs: Dual) {
        *self = sub_dual(*self, rhs);
    }
}

impl MulAssign for Dual {
    #[inline]
    fn mul_assign(&mut self, rhs: Dual) {
        *self = prd_dual(*self, rhs);
    }
}

impl DivAssign for Dual {
    #[inline]
    fn div_assign(&mut self, rhs: Dual) {
        *self = quo_dual(*self, rhs);
    }
}
