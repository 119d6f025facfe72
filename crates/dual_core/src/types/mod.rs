//! Core value and error types.
//!
//! This module provides:
//! - `dual`: The [`Dual`] number type (value and derivative pair)
//! - `error`: [`DualError`] for checked evaluation of non-finite results

pub mod dual;
pub mod error;

pub use dual::Dual;
pub use error::DualError;
