//! Synthetic demo sheets generated from known coefficients plus noise.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{Dataset, FitConfig, SampleSet, Session};
use crate::error::AppError;

/// Generate the demo session: one sheet per model family.
///
/// The linear sheet gets additive Gaussian noise; the power and exponential
/// sheets get multiplicative (log-scale) noise so every y stays positive and
/// the log transforms remain well-defined. Deterministic per seed.
pub fn generate_demo(config: &FitConfig) -> Result<Session, AppError> {
    if config.sample_count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }
    if !(config.noise.is_finite() && config.noise >= 0.0) {
        return Err(AppError::new(2, "Noise level must be finite and >= 0."));
    }

    let mut rng = StdRng::seed_from_u64(config.sample_seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let n = config.sample_count;
    let sigma = config.noise;

    let linear = sheet(n, |x, z| 2.5 * x + 4.0 + sigma * z, &normal, &mut rng);
    let power = sheet(n, |x, z| 1.8 * x.powf(1.4) * (sigma * z).exp(), &normal, &mut rng);
    let exponential = sheet(n, |x, z| 2.0 * 1.2f64.powf(x) * (sigma * z).exp(), &normal, &mut rng);

    Ok(Session {
        datasets: vec![
            Dataset { name: "linear".to_string(), samples: linear },
            Dataset { name: "power".to_string(), samples: power },
            Dataset { name: "exponential".to_string(), samples: exponential },
        ],
    })
}

fn sheet(
    n: usize,
    f: impl Fn(f64, f64) -> f64,
    normal: &Normal<f64>,
    rng: &mut StdRng,
) -> SampleSet {
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    for i in 1..=n {
        let x = i as f64;
        xs.push(x);
        ys.push(f(x, normal.sample(rng)));
    }
    SampleSet { xs, ys }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelKind;

    fn config(seed: u64) -> FitConfig {
        FitConfig {
            data_path: None,
            sheet: None,
            model: ModelKind::Linear,
            sample_count: 25,
            sample_seed: seed,
            noise: 0.5,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export: None,
        }
    }

    #[test]
    fn demo_has_one_sheet_per_family() {
        let session = generate_demo(&config(7)).unwrap();
        assert_eq!(session.sheet_names(), vec!["linear", "power", "exponential"]);
        for dataset in &session.datasets {
            assert_eq!(dataset.samples.len(), 25);
        }
    }

    #[test]
    fn demo_is_deterministic_per_seed() {
        let a = generate_demo(&config(7)).unwrap();
        let b = generate_demo(&config(7)).unwrap();
        assert_eq!(a.datasets[0].samples.ys, b.datasets[0].samples.ys);

        let c = generate_demo(&config(8)).unwrap();
        assert_ne!(a.datasets[0].samples.ys, c.datasets[0].samples.ys);
    }

    #[test]
    fn log_sheets_stay_positive() {
        let session = generate_demo(&config(123)).unwrap();
        for name in ["power", "exponential"] {
            let dataset = session.select(Some(name)).unwrap();
            assert!(dataset.samples.pairs().all(|(x, y)| x > 0.0 && y > 0.0));
        }
    }

    #[test]
    fn zero_count_is_rejected() {
        let mut cfg = config(1);
        cfg.sample_count = 0;
        assert!(generate_demo(&cfg).is_err());
    }
}
