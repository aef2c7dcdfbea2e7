//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be used
//! in-memory during fitting, rendered by the TUI, and exercised directly in
//! unit tests.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::AppError;

/// Which model family to fit.
///
/// Only three fixed variants exist, so the fitted result is a closed tagged
/// enum (`models::FittedModel`) rather than open-ended polymorphism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelKind {
    /// `y = a·x + b`
    Linear,
    /// `y = b·x^a`
    Power,
    /// `y = b·a^x`
    Exponential,
}

impl ModelKind {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::Power => "power",
            ModelKind::Exponential => "exponential",
        }
    }
}

/// An ordered pair of equal-length numeric sequences, `xs[i]` paired with
/// `ys[i]`.
///
/// Pairing is guaranteed by construction; the length invariant required for a
/// determinate fit (n >= 2) is checked at fit time, not here, so that empty
/// or single-point sheets can still be loaded and inspected.
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl SampleSet {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for (x, y) in pairs {
            xs.push(x);
            ys.push(y);
        }
        Self { xs, ys }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate over the (x, y) pairs in order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// A named sheet of samples (one worksheet of a workbook, or one CSV file).
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: String,
    pub samples: SampleSet,
}

/// The loaded datasets for a run, with explicit selection.
///
/// This replaces the mutable "currently selected sheet" fields a GUI would
/// keep on a shared object: callers pass the session (and a sheet name) as
/// plain values.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub datasets: Vec<Dataset>,
}

impl Session {
    /// Select a dataset by name, or the first one when `name` is `None`.
    pub fn select(&self, name: Option<&str>) -> Result<&Dataset, AppError> {
        match name {
            Some(name) => self
                .datasets
                .iter()
                .find(|d| d.name == name)
                .ok_or_else(|| {
                    AppError::new(
                        2,
                        format!(
                            "No sheet named '{name}'. Available: {}",
                            self.sheet_names().join(", ")
                        ),
                    )
                }),
            None => self
                .datasets
                .first()
                .ok_or_else(|| AppError::new(3, "No datasets loaded.")),
        }
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.datasets.iter().map(|d| d.name.as_str()).collect()
    }
}

/// Summary stats about the points actually used for fitting.
#[derive(Debug, Clone, Copy)]
pub struct DatasetStats {
    pub n_points: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DatasetStats {
    /// Returns `None` when the set is empty or contains non-finite values.
    pub fn from_samples(samples: &SampleSet) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for (x, y) in samples.pairs() {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
            return None;
        }
        Some(Self {
            n_points: samples.len(),
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Workbook (`.json`) or sheet (`.csv`) to load. `None` generates the
    /// built-in demo session instead.
    pub data_path: Option<PathBuf>,
    /// Sheet to fit; defaults to the first sheet.
    pub sheet: Option<String>,
    pub model: ModelKind,

    /// Points per demo sheet.
    pub sample_count: usize,
    /// Seed for demo sample generation.
    pub sample_seed: u64,
    /// Standard deviation of the demo noise.
    pub noise: f64,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            datasets: vec![
                Dataset {
                    name: "alpha".to_string(),
                    samples: SampleSet::from_pairs([(1.0, 2.0)]),
                },
                Dataset {
                    name: "beta".to_string(),
                    samples: SampleSet::default(),
                },
            ],
        }
    }

    #[test]
    fn select_by_name_and_default() {
        let s = session();
        assert_eq!(s.select(Some("beta")).unwrap().name, "beta");
        assert_eq!(s.select(None).unwrap().name, "alpha");
        assert!(s.select(Some("gamma")).is_err());
    }

    #[test]
    fn empty_session_select_fails() {
        let s = Session::default();
        assert!(s.select(None).is_err());
    }

    #[test]
    fn stats_cover_ranges() {
        let samples = SampleSet::from_pairs([(1.0, 10.0), (4.0, -2.0), (2.0, 3.0)]);
        let stats = DatasetStats::from_samples(&samples).unwrap();
        assert_eq!(stats.n_points, 3);
        assert_eq!(stats.x_min, 1.0);
        assert_eq!(stats.x_max, 4.0);
        assert_eq!(stats.y_min, -2.0);
        assert_eq!(stats.y_max, 10.0);
    }

    #[test]
    fn stats_reject_non_finite() {
        let samples = SampleSet::from_pairs([(1.0, f64::NAN)]);
        assert!(DatasetStats::from_samples(&samples).is_none());
        assert!(DatasetStats::from_samples(&SampleSet::default()).is_none());
    }
}
