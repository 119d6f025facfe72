//! The first-order dual number type.
//!
//! A [`Dual`] carries a function value together with its derivative with
//! respect to a single independent variable. Which variable that is, is a
//! convention fixed by the caller when seeding.
//!
//! ## Usage
//!
//! ```rust
//! use dual_core::types::Dual;
//!
//! // Seed the independent variable: dx/dx = 1
//! let x = Dual::variable(2.0);
//! let y = x * x;
//!
//! assert_eq!(y.value, 4.0);
//! assert_eq!(y.derivative, 4.0);
//! ```

use std::fmt;

use num_traits::{One, Zero};

use super::error::DualError;

/// A dual number `value + derivative·ε` with `ε² = 0`.
///
/// No validation is performed at construction: NaN and infinity are
/// permitted and propagate through every operation per IEEE-754.
///
/// # Examples
/// ```
/// use dual_core::types::Dual;
///
/// let d = Dual::new(3.0, 1.0);
/// assert_eq!(d.value, 3.0);
/// assert_eq!(d.derivative, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dual {
    /// Function value
    pub value: f64,
    /// Derivative of `value` with respect to the seeded variable
    pub derivative: f64,
}

impl Dual {
    /// Creates a dual number from an explicit value and derivative.
    #[inline]
    pub const fn new(value: f64, derivative: f64) -> Self {
        Self { value, derivative }
    }

    /// Creates a constant (derivative = 0).
    ///
    /// # Examples
    /// ```
    /// use dual_core::types::Dual;
    ///
    /// let c = Dual::constant(5.0);
    /// assert_eq!(c.derivative, 0.0);
    /// ```
    #[inline]
    pub const fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Creates the seed for the independent variable (derivative = 1).
    #[inline]
    pub const fn variable(value: f64) -> Self {
        Self::new(value, 1.0)
    }

    /// Returns `true` if both fields are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.derivative.is_finite()
    }

    /// Returns `self` if both fields are finite, otherwise a [`DualError`].
    ///
    /// `x` is the evaluation point, recorded in the error for context.
    ///
    /// # Examples
    /// ```
    /// use dual_core::types::{Dual, DualError};
    ///
    /// let ok = Dual::new(1.0, 2.0).check_finite(0.5);
    /// assert!(ok.is_ok());
    ///
    /// let err = Dual::new(f64::NAN, 2.0).check_finite(0.5);
    /// assert!(matches!(err, Err(DualError::NonFiniteValue { .. })));
    /// ```
    pub fn check_finite(self, x: f64) -> Result<Self, DualError> {
        if !self.value.is_finite() {
            return Err(DualError::NonFiniteValue {
                x,
                value: self.value,
            });
        }
        if !self.derivative.is_finite() {
            return Err(DualError::NonFiniteDerivative {
                x,
                derivative: self.derivative,
            });
        }
        Ok(self)
    }

    /// Integer power via exponentiation by squaring.
    ///
    /// See [`crate::ops::power::pow_const`].
    #[inline]
    pub fn powi(self, n: i32) -> Self {
        crate::ops::power::pow_const(self, n)
    }

    /// Reciprocal `1 / self`.
    #[inline]
    pub fn recip(self) -> Self {
        crate::ops::arithmetic::quo_const(1.0, self)
    }

    /// Exponential.
    #[inline]
    pub fn exp(self) -> Self {
        crate::ops::transcendental::exp_dual(self)
    }

    /// Sine.
    #[inline]
    pub fn sin(self) -> Self {
        crate::ops::transcendental::sin_dual(self)
    }

    /// Cosine.
    #[inline]
    pub fn cos(self) -> Self {
        crate::ops::transcendental::cos_dual(self)
    }

    /// Tangent.
    #[inline]
    pub fn tan(self) -> Self {
        crate::ops::transcendental::tan_dual(self)
    }
}

impl From<f64> for Dual {
    /// Lifts a scalar into a constant.
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl fmt::Display for Dual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dual(value={}, derivative={})",
            self.value, self.derivative
        )
    }
}

impl Zero for Dual {
    fn zero() -> Self {
        Self::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value == 0.0 && self.derivative == 0.0
    }
}

impl One for Dual {
    fn one() -> Self {
        Self::constant(1.0)
    }
}
