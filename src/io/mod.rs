//! Input/output helpers.
//!
//! - workbook/CSV ingest + validation (`ingest`)
//! - sampled-curve export (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
