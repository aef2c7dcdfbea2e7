//! Shared "fit pipeline" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load (file or demo) -> select sheet -> fit -> sample curve
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::data::generate_demo;
use crate::domain::{Dataset, DatasetStats, FitConfig, Session};
use crate::error::AppError;
use crate::io::ingest::{RowError, load_datasets};
use crate::models::{FittedModel, sample_curve};

/// The loaded session plus ingest bookkeeping for reporting.
#[derive(Debug, Clone)]
pub struct LoadedSession {
    pub session: Session,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

/// All computed outputs of a single fit run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub dataset: Dataset,
    pub stats: DatasetStats,
    pub fit: FittedModel,
    /// The fitted curve sampled over the integer x range of the sheet.
    pub curve: Vec<(f64, f64)>,
}

/// Load the configured data file, or generate the demo session.
pub fn load_session(config: &FitConfig) -> Result<LoadedSession, AppError> {
    match &config.data_path {
        Some(path) => {
            let ingested = load_datasets(path)?;
            Ok(LoadedSession {
                session: Session { datasets: ingested.datasets },
                row_errors: ingested.row_errors,
                rows_read: ingested.rows_read,
                rows_used: ingested.rows_used,
            })
        }
        None => {
            let session = generate_demo(config)?;
            let rows: usize = session.datasets.iter().map(|d| d.samples.len()).sum();
            Ok(LoadedSession {
                session,
                row_errors: Vec::new(),
                rows_read: rows,
                rows_used: rows,
            })
        }
    }
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<(LoadedSession, RunOutput), AppError> {
    let loaded = load_session(config)?;
    let run = run_fit_with_session(config, &loaded.session)?;
    Ok((loaded, run))
}

/// Execute the fitting pipeline against an already-loaded session.
///
/// This is what the TUI calls when the user switches sheets or model families
/// without reloading the data file.
pub fn run_fit_with_session(config: &FitConfig, session: &Session) -> Result<RunOutput, AppError> {
    let dataset = session.select(config.sheet.as_deref())?;

    let fit = crate::fit::fit_model(config.model, &dataset.samples.xs, &dataset.samples.ys)?;

    let stats = DatasetStats::from_samples(&dataset.samples).ok_or_else(|| {
        AppError::new(3, format!("Sheet '{}' has no plottable points.", dataset.name))
    })?;

    let curve = sample_curve(&fit, stats.x_min, stats.x_max);

    Ok(RunOutput {
        dataset: dataset.clone(),
        stats,
        fit,
        curve,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelKind;

    fn demo_config(model: ModelKind) -> FitConfig {
        FitConfig {
            data_path: None,
            sheet: None,
            model,
            sample_count: 20,
            sample_seed: 3,
            noise: 0.0,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export: None,
        }
    }

    #[test]
    fn noiseless_demo_linear_sheet_fits_exactly() {
        let (_, run) = run_fit(&demo_config(ModelKind::Linear)).unwrap();
        assert_eq!(run.dataset.name, "linear");
        // The demo linear sheet is y = 2.5x + 4 with no noise.
        assert_eq!(run.fit.to_string(), "y = + 2.500 x + 4.000");
        assert_eq!(run.stats.n_points, 20);
    }

    #[test]
    fn curve_spans_the_integer_x_range() {
        let (_, run) = run_fit(&demo_config(ModelKind::Linear)).unwrap();
        assert_eq!(run.curve.first().map(|&(x, _)| x), Some(1.0));
        assert_eq!(run.curve.last().map(|&(x, _)| x), Some(20.0));
    }

    #[test]
    fn sheet_selection_reaches_the_named_sheet() {
        let mut config = demo_config(ModelKind::Exponential);
        config.sheet = Some("exponential".to_string());
        let (_, run) = run_fit(&config).unwrap();
        assert_eq!(run.dataset.name, "exponential");
        assert!(matches!(run.fit, FittedModel::Exponential { .. }));
    }

    #[test]
    fn unknown_sheet_is_an_error() {
        let mut config = demo_config(ModelKind::Linear);
        config.sheet = Some("missing".to_string());
        assert!(run_fit(&config).is_err());
    }
}
