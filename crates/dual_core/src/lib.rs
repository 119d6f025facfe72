//! # dual_core: Forward-Mode Automatic Differentiation with Dual Numbers
//!
//! dual_core computes a scalar function's value and its exact derivative at a
//! point in one pass, by propagating `(value, derivative)` pairs through
//! arithmetic and elementary transcendental operations.
//!
//! - Dual number type: [`Dual`] (`types::dual`)
//! - Differentiation rules as free functions and operators (`ops`)
//! - Seeding helpers: [`grad`](grad::grad), [`value_and_grad`](grad::value_and_grad) (`grad`)
//! - Cross-checks against `num-dual` and closed forms (`verification`)
//! - Error type for checked evaluation: [`DualError`] (`types::error`)
//!
//! ## Pure Engine
//!
//! Every operation takes its operands by value and returns a new [`Dual`].
//! There is no shared state, no allocation, and no error signalling: division
//! by zero, overflow, and poles surface as IEEE-754 NaN or infinity and
//! propagate through subsequent operations.
//!
//! ## Usage Examples
//!
//! ```rust
//! use dual_core::ops::{prd_dual, sin_dual};
//! use dual_core::Dual;
//!
//! // d/dx x² at x = 2
//! let x = Dual::variable(2.0);
//! let y = prd_dual(x, x);
//! assert_eq!((y.value, y.derivative), (4.0, 4.0));
//!
//! // d/dx sin(x) at x = 0
//! let y = sin_dual(Dual::variable(0.0));
//! assert_eq!((y.value, y.derivative), (0.0, 1.0));
//!
//! // Operators and methods compose the same rules
//! let x = Dual::variable(1.0);
//! let y = (x * x + 1.0).exp() / x.powi(3);
//! assert!(y.is_finite());
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Enable the `verification` module (cross-check against num-dual)
//! - `serde` (default): Enable serialisation for [`Dual`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod grad;
pub mod ops;
pub mod types;
#[cfg(feature = "num-dual-mode")]
pub mod verification;

pub use types::{Dual, DualError};
