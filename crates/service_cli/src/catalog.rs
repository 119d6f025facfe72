//! Built-in functions the CLI can differentiate.
//!
//! The catalogue is a closed set; each entry is composed from `dual_core`
//! operations and carries its closed-form derivative for comparison.

use clap::ValueEnum;
use dual_core::ops::{
    add_const, add_dual, cos_dual, exp_dual, pow_const, prd_const, prd_dual, quo_const, sin_dual,
    sub_dual, tan_dual,
};
use dual_core::Dual;

/// A differentiable function of one variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogFunction {
    /// x²
    Square,
    /// x³
    Cube,
    /// sin(x)
    Sin,
    /// cos(x)
    Cos,
    /// tan(x)
    Tan,
    /// exp(x)
    Exp,
    /// 1/x
    Reciprocal,
    /// exp(-x²/2)
    Gaussian,
    /// x⁴ - 3x² + 2x - 5
    Poly,
}

impl CatalogFunction {
    /// Human-readable formula.
    pub fn formula(self) -> &'static str {
        match self {
            Self::Square => "x^2",
            Self::Cube => "x^3",
            Self::Sin => "sin(x)",
            Self::Cos => "cos(x)",
            Self::Tan => "tan(x)",
            Self::Exp => "exp(x)",
            Self::Reciprocal => "1/x",
            Self::Gaussian => "exp(-x^2/2)",
            Self::Poly => "x^4 - 3x^2 + 2x - 5",
        }
    }

    /// Evaluates the function on a dual number.
    pub fn apply(self, x: Dual) -> Dual {
        match self {
            Self::Square => prd_dual(x, x),
            Self::Cube => pow_const(x, 3),
            Self::Sin => sin_dual(x),
            Self::Cos => cos_dual(x),
            Self::Tan => tan_dual(x),
            Self::Exp => exp_dual(x),
            Self::Reciprocal => quo_const(1.0, x),
            Self::Gaussian => exp_dual(prd_const(prd_dual(x, x), -0.5)),
            Self::Poly => {
                let quartic = pow_const(x, 4);
                let quadratic = prd_const(prd_dual(x, x), 3.0);
                let linear = prd_const(x, 2.0);
                add_const(add_dual(sub_dual(quartic, quadratic), linear), -5.0)
            }
        }
    }

    /// Closed-form `(value, derivative)` at `x`.
    pub fn closed_form(self, x: f64) -> (f64, f64) {
        match self {
            Self::Square => (x * x, 2.0 * x),
            Self::Cube => (x.powi(3), 3.0 * x * x),
            Self::Sin => (x.sin(), x.cos()),
            Self::Cos => (x.cos(), -x.sin()),
            Self::Tan => (x.tan(), 1.0 / (x.cos() * x.cos())),
            Self::Exp => (x.exp(), x.exp()),
            Self::Reciprocal => (1.0 / x, -1.0 / (x * x)),
            Self::Gaussian => {
                let v = (-0.5 * x * x).exp();
                (v, -x * v)
            }
            Self::Poly => (
                x.powi(4) - 3.0 * x * x + 2.0 * x - 5.0,
                4.0 * x.powi(3) - 6.0 * x + 2.0,
            ),
        }
    }
}
