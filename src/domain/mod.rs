//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the model-family selector (`ModelKind`)
//! - sample sets and named datasets (`SampleSet`, `Dataset`, `Session`)
//! - dataset summary stats (`DatasetStats`)
//! - the run configuration (`FitConfig`)

pub mod types;

pub use types::*;
