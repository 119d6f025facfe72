//! Demo command: differentiate two textbook functions.
//!
//! # Expected Output
//!
//! ```text
//! Gradient of x^2 at 3 is 6
//! Value of x^2 at 3 is 9 and gradient is 6
//! Gradient of sin(x) at 0 is 1
//! Value of sin(x) at 0 is 0 and gradient is 1
//! ```

use dual_core::grad::value_and_grad;
use dual_core::ops::{prd_dual, sin_dual};
use dual_core::Dual;

use crate::Result;

/// One demo line: function name, evaluation point, value, gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoLine {
    /// Formula shown to the user
    pub formula: &'static str,
    /// Evaluation point
    pub x: f64,
    /// Function value
    pub value: f64,
    /// Derivative
    pub gradient: f64,
}

/// Computes the demo results without printing.
pub fn compute() -> Vec<DemoLine> {
    let square = |x: Dual| prd_dual(x, x);

    let mut lines = Vec::with_capacity(2);

    let x = 3.0;
    let (value, gradient) = value_and_grad(square, x);
    lines.push(DemoLine {
        formula: "x^2",
        x,
        value,
        gradient,
    });

    let x = 0.0;
    let (value, gradient) = value_and_grad(sin_dual, x);
    lines.push(DemoLine {
        formula: "sin(x)",
        x,
        value,
        gradient,
    });

    lines
}

/// Runs the demo and prints the results.
pub fn run() -> Result<()> {
    for line in compute() {
        println!(
            "Gradient of {} at {} is {}",
            line.formula, line.x, line.gradient
        );
        println!(
            "Value of {} at {} is {} and gradient is {}",
            line.formula, line.x, line.value, line.gradient
        );
    }
    Ok(())
}
