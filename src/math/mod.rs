//! Mathematical utilities: the closed-form least-squares kernel.

pub mod ols;

pub use ols::*;
