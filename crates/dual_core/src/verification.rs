//! Cross-checks of the engine against independent references.
//!
//! Two references are available:
//!
//! - `num-dual`'s [`Dual64`], an independent forward-mode implementation
//! - Closed-form derivatives of the elementary functions
//!
//! | Comparison | Default tolerance |
//! |------------|-------------------|
//! | Engine vs num-dual | 1e-9 |
//! | Engine vs closed form | 1e-9 |
//!
//! Checks are only meaningful away from poles: at `x = 0` the negative
//! powers and `quo_const` diverge, and near odd multiples of π/2 so does
//! `tan_dual`.
//!
//! # Usage
//!
//! ```rust
//! use dual_core::verification::{verify_against_num_dual, VerificationConfig};
//!
//! let report = verify_against_num_dual(0.75, &VerificationConfig::default());
//! assert!(report.all_passed());
//! ```

use num_dual::{Dual64, DualNum};
use tracing::debug;

use crate::ops::{
    add_const, add_dual, cos_dual, exp_dual, pow_const, prd_const, prd_dual, quo_const, quo_dual,
    sin_dual, sub_dual, tan_dual,
};
use crate::types::Dual;

/// Exponents exercised by the power checks.
const POWER_EXPONENTS: [i32; 6] = [-3, -1, 0, 1, 2, 7];

/// Scalar operand used by the mixed dual-scalar checks.
const SCALAR: f64 = 2.5;

/// Configuration for verification runs.
#[derive(Clone, Debug)]
pub struct VerificationConfig {
    /// Relative tolerance (absolute below 1e-10 in magnitude).
    pub tolerance: f64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self { tolerance: 1e-9 }
    }
}

impl VerificationConfig {
    /// Creates a new verification configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerance.
    #[inline]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Result of verifying a single operation.
#[derive(Clone, Debug)]
pub struct OpVerification {
    /// Operation name, e.g. `"prd_dual"` or `"pow_const(-3)"`.
    pub name: String,
    /// Result computed by the engine.
    pub engine: Dual,
    /// Result computed by the reference.
    pub reference: Dual,
    /// Whether both fields agree within tolerance.
    pub passed: bool,
}

impl OpVerification {
    /// Compares `engine` against `reference`.
    pub fn new(name: impl Into<String>, engine: Dual, reference: Dual, tolerance: f64) -> Self {
        let passed = agrees(engine.value, reference.value, tolerance)
            && agrees(engine.derivative, reference.derivative, tolerance);
        Self {
            name: name.into(),
            engine,
            reference,
            passed,
        }
    }
}

/// All operation checks at one evaluation point.
#[derive(Clone, Debug)]
pub struct VerificationReport {
    /// Evaluation point; the seed is `(x, 1)`.
    pub x: f64,
    /// Per-operation results.
    pub results: Vec<OpVerification>,
}

impl VerificationReport {
    /// Returns whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Returns the failed checks.
    pub fn failures(&self) -> impl Iterator<Item = &OpVerification> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Returns the number of failed checks.
    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }
}

/// Second operand for the binary checks, derived from `x` so it varies
/// with the evaluation point.
fn second_operand(x: f64) -> Dual {
    Dual::new(0.5 * x + 1.25, 0.75)
}

fn to_num_dual(d: Dual) -> Dual64 {
    Dual64::new(d.value, d.derivative)
}

fn from_num_dual(d: Dual64) -> Dual {
    Dual::new(d.re, d.eps)
}

/// Compares every engine operation against `num_dual::Dual64` at `x`.
pub fn verify_against_num_dual(x: f64, config: &VerificationConfig) -> VerificationReport {
    let tol = config.tolerance;
    let f = Dual::variable(x);
    let g = second_operand(x);
    let (nf, ng) = (to_num_dual(f), to_num_dual(g));
    let c = Dual64::from(SCALAR);

    let mut results = vec![
        OpVerification::new("add_dual", add_dual(f, g), from_num_dual(nf + ng), tol),
        OpVerification::new("sub_dual", sub_dual(f, g), from_num_dual(nf - ng), tol),
        OpVerification::new("prd_dual", prd_dual(f, g), from_num_dual(nf * ng), tol),
        OpVerification::new("quo_dual", quo_dual(f, g), from_num_dual(nf / ng), tol),
        OpVerification::new("add_const", add_const(f, SCALAR), from_num_dual(nf + c), tol),
        OpVerification::new("prd_const", prd_const(f, SCALAR), from_num_dual(nf * c), tol),
        OpVerification::new("quo_const", quo_const(SCALAR, f), from_num_dual(c / nf), tol),
    ];

    for n in POWER_EXPONENTS {
        results.push(OpVerification::new(
            format!("pow_const({})", n),
            pow_const(f, n),
            from_num_dual(nf.powi(n)),
            tol,
        ));
    }

    results.extend([
        OpVerification::new("exp_dual", exp_dual(f), from_num_dual(nf.exp()), tol),
        OpVerification::new("sin_dual", sin_dual(f), from_num_dual(nf.sin()), tol),
        OpVerification::new("cos_dual", cos_dual(f), from_num_dual(nf.cos()), tol),
        OpVerification::new("tan_dual", tan_dual(f), from_num_dual(nf.tan()), tol),
    ]);

    log_failures(x, &results);
    VerificationReport { x, results }
}

/// Compares the seeded elementary functions against their closed-form
/// derivatives at `x`.
pub fn verify_closed_form(x: f64, config: &VerificationConfig) -> VerificationReport {
    let tol = config.tolerance;
    let f = Dual::variable(x);
    let sec2 = 1.0 / (x.cos() * x.cos());

    let mut results = vec![
        OpVerification::new("exp_dual", exp_dual(f), Dual::new(x.exp(), x.exp()), tol),
        OpVerification::new("sin_dual", sin_dual(f), Dual::new(x.sin(), x.cos()), tol),
        OpVerification::new("cos_dual", cos_dual(f), Dual::new(x.cos(), -x.sin()), tol),
        OpVerification::new("tan_dual", tan_dual(f), Dual::new(x.tan(), sec2), tol),
        OpVerification::new(
            "quo_const",
            quo_const(SCALAR, f),
            Dual::new(SCALAR / x, -SCALAR / (x * x)),
            tol,
        ),
    ];

    for n in POWER_EXPONENTS {
        let reference = if n == 0 {
            Dual::new(1.0, 0.0)
        } else {
            Dual::new(x.powi(n), f64::from(n) * x.powi(n - 1))
        };
        results.push(OpVerification::new(
            format!("pow_const({})", n),
            pow_const(f, n),
            reference,
            tol,
        ));
    }

    log_failures(x, &results);
    VerificationReport { x, results }
}

fn log_failures(x: f64, results: &[OpVerification]) {
    for r in results.iter().filter(|r| !r.passed) {
        debug!(
            x,
            op = %r.name,
            engine = %r.engine,
            reference = %r.reference,
            "verification mismatch"
        );
    }
}

/// Agreement of two floats: identical non-finite values agree, otherwise
/// the relative error must be below `tolerance`.
fn agrees(a: f64, b: f64, tolerance: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    relative_error(a, b) < tolerance
}

fn relative_error(a: f64, b: f64) -> f64 {
    let max_abs = a.abs().max(b.abs());
    if max_abs < 1e-10 {
        (a - b).abs()
    } else {
        (a - b).abs() / max_abs
    }
}
