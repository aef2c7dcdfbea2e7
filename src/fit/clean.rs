//! Sample-pair cleaning.

/// Drop every pair where either coordinate is exactly zero, preserving the
/// relative order of the survivors.
///
/// The power and exponential fits take logarithms, which are undefined at
/// zero; callers run this before transforming. Negative values are kept here
/// and rejected later with an explicit domain error (see `fit::fitter`).
pub fn remove_zero_pairs(xs: &[f64], ys: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut kept_xs = Vec::with_capacity(xs.len());
    let mut kept_ys = Vec::with_capacity(ys.len());
    for (&x, &y) in xs.iter().zip(ys) {
        if x != 0.0 && y != 0.0 {
            kept_xs.push(x);
            kept_ys.push(y);
        }
    }
    (kept_xs, kept_ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        let (xs, ys) = remove_zero_pairs(&[], &[]);
        assert!(xs.is_empty());
        assert!(ys.is_empty());
    }

    #[test]
    fn drops_pairs_with_a_zero_on_either_side() {
        let (xs, ys) = remove_zero_pairs(&[0.0, 1.0, 2.0, 3.0], &[5.0, 6.0, 0.0, 8.0]);
        assert_eq!(xs, vec![1.0, 3.0]);
        assert_eq!(ys, vec![6.0, 8.0]);
    }

    #[test]
    fn preserves_order_and_keeps_negatives() {
        let (xs, ys) = remove_zero_pairs(&[-1.0, 2.0, -3.0], &[4.0, -5.0, 6.0]);
        assert_eq!(xs, vec![-1.0, 2.0, -3.0]);
        assert_eq!(ys, vec![4.0, -5.0, 6.0]);
    }

    #[test]
    fn negative_zero_counts_as_zero() {
        let (xs, ys) = remove_zero_pairs(&[-0.0, 1.0], &[1.0, 1.0]);
        assert_eq!(xs, vec![1.0]);
        assert_eq!(ys, vec![1.0]);
    }
}
