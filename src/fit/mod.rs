//! Model fitting.
//!
//! Responsibilities:
//!
//! - pair cleaning ahead of the log-based fits (`clean`)
//! - the per-family fit pipelines: validate, transform, solve, back-transform
//!   (`fitter`)

pub mod clean;
pub mod fitter;

pub use clean::*;
pub use fitter::*;
