//! Differentiation rules.
//!
//! This module provides:
//! - `arithmetic`: Sum, difference, product and quotient rules, scalar variants,
//!   and the operator overloads on [`Dual`](crate::types::Dual)
//! - `power`: Integer powers by repeated squaring
//! - `transcendental`: `exp`, `sin`, `cos`, `tan` via the chain rule
//!
//! Every function is pure: operands are taken by value and a new dual number
//! is returned.

pub mod arithmetic;
pub mod power;
pub mod transcendental;

pub use arithmetic::{add_const, add_dual, prd_const, prd_dual, quo_const, quo_dual, sub_dual};
pub use power::{pow_by_repeated_squaring, pow_const};
pub use transcendental::{cos_dual, exp_dual, sin_dual, tan_dual};
