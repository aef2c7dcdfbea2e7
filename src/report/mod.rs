//! Reporting utilities: formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::{LoadedSession, RunOutput};

/// Format the full run summary (dataset stats + fitted equation).
pub fn format_run_summary(loaded: &LoadedSession, run: &RunOutput) -> String {
    let mut out = String::new();

    out.push_str("=== lsq - Least Squares Curve Fit ===\n");
    out.push_str(&format!(
        "Sheet: {} (of {}: {})\n",
        run.dataset.name,
        loaded.session.datasets.len(),
        loaded.session.sheet_names().join(", ")
    ));
    out.push_str(&format!("Model: {}\n", run.fit.kind().display_name()));
    out.push_str(&format!(
        "Points: n={} | x=[{:.3}, {:.3}] | y=[{:.3}, {:.3}]\n",
        run.stats.n_points,
        run.stats.x_min,
        run.stats.x_max,
        run.stats.y_min,
        run.stats.y_max
    ));
    out.push_str(&format!(
        "Rows: read={} used={}\n",
        loaded.rows_read, loaded.rows_used
    ));
    if let Some(first) = loaded.row_errors.first() {
        out.push_str(&format!(
            "  ({} skipped; first: sheet {} line {}: {})\n",
            loaded.row_errors.len(),
            first.sheet,
            first.line,
            first.message
        ));
    }

    out.push_str("\nFit:\n");
    out.push_str(&format!("* {}\n", run.fit));
    for (name, value) in run.fit.coefficients() {
        out.push_str(&format!("  {name:<9} = {value:.6}\n"));
    }

    out
}

/// Format the sheet listing for `lsq sheets`.
pub fn format_sheet_list(loaded: &LoadedSession) -> String {
    let mut out = String::new();
    for dataset in &loaded.session.datasets {
        out.push_str(&format!("{:<24} n={}\n", dataset.name, dataset.samples.len()));
    }
    out
}
