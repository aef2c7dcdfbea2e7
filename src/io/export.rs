//! Export the sampled fitted curve to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts; it is a one-way dump of plotted points, not a reloadable model.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::AppError;

/// Write the sampled curve as `x,y_fit` rows.
pub fn write_curve_csv(path: &Path, curve: &[(f64, f64)]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "x,y_fit")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for &(x, y) in curve {
        writeln!(file, "{x:.6},{y:.6}")
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
