//! Per-family fit pipelines.
//!
//! Each fit is a pure pipeline: clean/validate, transform, solve the linear
//! kernel, back-transform the coefficients, package as a `FittedModel`.
//!
//! The log-based families linearize as:
//!
//! ```text
//! power:        y = b·x^a   =>  log y = log b + a·(log x)
//! exponential:  y = b·a^x   =>  log y = log b + (log a)·x
//! ```
//!
//! so the kernel runs on the transformed coordinates and the multiplicative
//! coefficients are recovered as powers of ten.

use crate::domain::ModelKind;
use crate::error::FitError;
use crate::fit::clean::remove_zero_pairs;
use crate::math::fit_line;
use crate::models::FittedModel;

/// Fit the requested model family to the paired samples.
///
/// Pairs are formed positionally; trailing unpaired values are ignored. The
/// power and exponential paths first drop zero pairs, then reject any
/// remaining value whose logarithm would be undefined.
pub fn fit_model(kind: ModelKind, xs: &[f64], ys: &[f64]) -> Result<FittedModel, FitError> {
    match kind {
        ModelKind::Linear => {
            let (a, b) = fit_line(xs, ys)?;
            Ok(FittedModel::Linear { slope: a, intercept: b })
        }
        ModelKind::Power => {
            let (xs, ys) = remove_zero_pairs(xs, ys);
            ensure_log_domain(kind, "x", &xs)?;
            ensure_log_domain(kind, "y", &ys)?;
            let log_xs: Vec<f64> = xs.iter().map(|x| x.log10()).collect();
            let log_ys: Vec<f64> = ys.iter().map(|y| y.log10()).collect();
            let (a, b_log) = fit_line(&log_xs, &log_ys)?;
            Ok(FittedModel::Power {
                exponent: a,
                scale: 10f64.powf(b_log),
            })
        }
        ModelKind::Exponential => {
            let (xs, ys) = remove_zero_pairs(xs, ys);
            ensure_log_domain(kind, "y", &ys)?;
            let log_ys: Vec<f64> = ys.iter().map(|y| y.log10()).collect();
            let (a_log, b_log) = fit_line(&xs, &log_ys)?;
            Ok(FittedModel::Exponential {
                base: 10f64.powf(a_log),
                scale: 10f64.powf(b_log),
            })
        }
    }
}

/// Reject values that cannot enter a logarithm (<= 0, or non-finite).
fn ensure_log_domain(model: ModelKind, axis: &'static str, values: &[f64]) -> Result<(), FitError> {
    for &value in values {
        if !(value > 0.0) {
            return Err(FitError::InvalidDomain { model, axis, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_recovers_known_coefficients() {
        // y = 2x + 1
        let fit = fit_model(ModelKind::Linear, &[1.0, 2.0, 3.0, 4.0], &[3.0, 5.0, 7.0, 9.0])
            .unwrap();
        let FittedModel::Linear { slope, intercept } = fit else {
            panic!("expected a linear model");
        };
        assert!((slope - 2.0).abs() < 1e-12);
        assert!((intercept - 1.0).abs() < 1e-12);
        assert_eq!(fit.to_string(), "y = + 2.000 x + 1.000");
    }

    #[test]
    fn linear_zero_variance_is_degenerate() {
        let err = fit_model(ModelKind::Linear, &[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]).unwrap_err();
        assert_eq!(err, FitError::DegenerateFit);
    }

    #[test]
    fn empty_input_is_insufficient() {
        let err = fit_model(ModelKind::Linear, &[], &[]).unwrap_err();
        assert_eq!(err, FitError::InsufficientData { got: 0 });
    }

    #[test]
    fn power_recovers_log_log_slope() {
        // y = 2x, i.e. exponent 1 with scale 2 in log-log space.
        let fit = fit_model(ModelKind::Power, &[1.0, 2.0, 4.0, 8.0], &[2.0, 4.0, 8.0, 16.0])
            .unwrap();
        let FittedModel::Power { exponent, scale } = fit else {
            panic!("expected a power model");
        };
        assert!((exponent - 1.0).abs() < 1e-9);
        assert!((scale - 2.0).abs() < 1e-9);
        assert!((fit.evaluate(4.0) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn power_cleaning_drops_zero_pairs() {
        // The (0, 5) pair is removed before the log transform; the fit is
        // unchanged from the zero-free input.
        let fit = fit_model(
            ModelKind::Power,
            &[0.0, 1.0, 2.0, 4.0, 8.0],
            &[5.0, 2.0, 4.0, 8.0, 16.0],
        )
        .unwrap();
        let FittedModel::Power { exponent, scale } = fit else {
            panic!("expected a power model");
        };
        assert!((exponent - 1.0).abs() < 1e-9);
        assert!((scale - 2.0).abs() < 1e-9);
    }

    #[test]
    fn power_rejects_negative_x() {
        let err =
            fit_model(ModelKind::Power, &[-1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            FitError::InvalidDomain { model: ModelKind::Power, axis: "x", .. }
        ));
    }

    #[test]
    fn exponential_recovers_base_and_scale() {
        // y = 3 · 2^x. The x = 0 pair is dropped by zero cleaning; the
        // remaining exact points still determine the model.
        let fit = fit_model(
            ModelKind::Exponential,
            &[0.0, 1.0, 2.0, 3.0],
            &[3.0, 6.0, 12.0, 24.0],
        )
        .unwrap();
        let FittedModel::Exponential { base, scale } = fit else {
            panic!("expected an exponential model");
        };
        assert!((base - 2.0).abs() < 1e-9);
        assert!((scale - 3.0).abs() < 1e-9);
    }

    #[test]
    fn exponential_rejects_negative_y() {
        let err = fit_model(ModelKind::Exponential, &[1.0, 2.0], &[-1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            FitError::InvalidDomain { model: ModelKind::Exponential, axis: "y", .. }
        ));
    }

    #[test]
    fn cleaning_away_everything_is_insufficient() {
        let err = fit_model(ModelKind::Exponential, &[0.0, 0.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, FitError::InsufficientData { got: 0 });
    }

    #[test]
    fn identical_inputs_fit_identically() {
        let xs = [1.0, 2.0, 4.0, 8.0];
        let ys = [2.1, 3.9, 8.2, 15.8];
        let first = fit_model(ModelKind::Power, &xs, &ys).unwrap();
        let second = fit_model(ModelKind::Power, &xs, &ys).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }
}
