//! The three fitted model families and their evaluation.
//!
//! A fitted model is a pair of (evaluate, label): `evaluate` is a pure
//! function of the two coefficients, and the `Display` impl renders the
//! equation with sign-prefixed, three-decimal coefficients.

use std::fmt;

use crate::domain::ModelKind;

/// A fitted model: the family tag plus its two coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FittedModel {
    /// `y = slope·x + intercept`
    Linear { slope: f64, intercept: f64 },
    /// `y = scale·x^exponent`
    Power { exponent: f64, scale: f64 },
    /// `y = scale·base^x`
    Exponential { base: f64, scale: f64 },
}

impl FittedModel {
    pub fn kind(&self) -> ModelKind {
        match self {
            FittedModel::Linear { .. } => ModelKind::Linear,
            FittedModel::Power { .. } => ModelKind::Power,
            FittedModel::Exponential { .. } => ModelKind::Exponential,
        }
    }

    /// Predict `y` at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            FittedModel::Linear { slope, intercept } => slope * x + intercept,
            FittedModel::Power { exponent, scale } => scale * x.powf(exponent),
            FittedModel::Exponential { base, scale } => scale * base.powf(x),
        }
    }

    /// The named coefficient pair, for reports.
    pub fn coefficients(&self) -> [(&'static str, f64); 2] {
        match *self {
            FittedModel::Linear { slope, intercept } => {
                [("slope", slope), ("intercept", intercept)]
            }
            FittedModel::Power { exponent, scale } => [("exponent", exponent), ("scale", scale)],
            FittedModel::Exponential { base, scale } => [("base", base), ("scale", scale)],
        }
    }
}

/// Render a coefficient with an explicit sign: `+ 2.500`, `- 1.200`.
fn coef(v: f64) -> String {
    if v.is_sign_negative() {
        format!("- {:.3}", -v)
    } else {
        format!("+ {:.3}", v)
    }
}

impl fmt::Display for FittedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FittedModel::Linear { slope, intercept } => {
                write!(f, "y = {} x {}", coef(slope), coef(intercept))
            }
            FittedModel::Power { exponent, scale } => {
                write!(f, "y = {} x^({})", coef(scale), coef(exponent))
            }
            FittedModel::Exponential { base, scale } => {
                write!(f, "y = {} ({})^x", coef(scale), coef(base))
            }
        }
    }
}

/// Sample the fitted curve over the integer range
/// `[floor(x_min), floor(x_max)]`, step 1.
///
/// This is the point set handed to plotting surfaces; renderers interpolate
/// between consecutive samples.
pub fn sample_curve(model: &FittedModel, x_min: f64, x_max: f64) -> Vec<(f64, f64)> {
    let lo = x_min.floor() as i64;
    let hi = x_max.floor() as i64;
    (lo..=hi).map(|i| (i as f64, model.evaluate(i as f64))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_per_family() {
        let lin = FittedModel::Linear { slope: 2.0, intercept: 1.0 };
        assert_eq!(lin.evaluate(3.0), 7.0);

        let pow = FittedModel::Power { exponent: 2.0, scale: 3.0 };
        assert!((pow.evaluate(4.0) - 48.0).abs() < 1e-12);

        let exp = FittedModel::Exponential { base: 2.0, scale: 3.0 };
        assert!((exp.evaluate(2.0) - 12.0).abs() < 1e-12);
    }

    #[test]
    fn labels_show_signed_coefficients() {
        let lin = FittedModel::Linear { slope: 2.0, intercept: 1.0 };
        assert_eq!(lin.to_string(), "y = + 2.000 x + 1.000");

        let lin = FittedModel::Linear { slope: -1.2, intercept: -3.4 };
        assert_eq!(lin.to_string(), "y = - 1.200 x - 3.400");

        let pow = FittedModel::Power { exponent: 1.0, scale: 2.0 };
        assert_eq!(pow.to_string(), "y = + 2.000 x^(+ 1.000)");

        let exp = FittedModel::Exponential { base: 1.5, scale: 2.0 };
        assert_eq!(exp.to_string(), "y = + 2.000 (+ 1.500)^x");
    }

    #[test]
    fn curve_samples_integer_range() {
        let lin = FittedModel::Linear { slope: 1.0, intercept: 0.0 };
        let curve = sample_curve(&lin, 0.5, 3.7);
        let xs: Vec<f64> = curve.iter().map(|&(x, _)| x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
        for &(x, y) in &curve {
            assert_eq!(x, y);
        }
    }

    #[test]
    fn curve_empty_on_inverted_range() {
        let lin = FittedModel::Linear { slope: 1.0, intercept: 0.0 };
        assert!(sample_curve(&lin, 5.0, 1.0).is_empty());
    }
}
