//! Fitted model representations.
//!
//! Models are a closed tagged enum carrying their two coefficients, with a
//! single `evaluate` operation, so plotting/report code can stay generic over
//! the three families.

pub mod model;

pub use model::*;
