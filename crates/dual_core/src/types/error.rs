//! Error types for checked evaluation.
//!
//! The engine itself never fails: abnormal conditions surface as NaN or
//! infinity. These errors exist for callers that want non-finite results
//! reported instead of propagated.

use thiserror::Error;

/// Non-finite result detected by a checked helper.
///
/// # Examples
/// ```
/// use dual_core::types::DualError;
///
/// let err = DualError::NonFiniteDerivative { x: 1.5, derivative: f64::INFINITY };
/// assert_eq!(format!("{}", err), "Non-finite derivative at x = 1.5: inf");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DualError {
    /// Function value is NaN or infinite
    #[error("Non-finite value at x = {x}: {value}")]
    NonFiniteValue {
        /// Evaluation point
        x: f64,
        /// Offending value
        value: f64,
    },

    /// Derivative is NaN or infinite
    #[error("Non-finite derivative at x = {x}: {derivative}")]
    NonFiniteDerivative {
        /// Evaluation point
        x: f64,
        /// Offending derivative
        derivative: f64,
    },
}
