//! Pearson and Spearman correlation with two-sided significance.
//!
//! Both tests return the coefficient together with a two-sided p-value from
//! the Student-t approximation: t = r·√((n−2)/(1−r²)) with n−2 degrees of
//! freedom. For Spearman this is applied to the coefficient of the
//! average-rank transform, matching the classic large-sample treatment.

use crate::special::student_t_two_sided;

/// A correlation coefficient with its two-sided significance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    /// The correlation coefficient, in [-1, 1].
    pub coefficient: f64,
    /// Two-sided p-value for the null hypothesis of zero correlation.
    pub p_value: f64,
}

/// Reasons a correlation cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CorrelationError {
    /// The coefficient is undefined below 2 paired observations.
    #[display("correlation requires at least {min} paired observations, got {got}")]
    TooFewObservations { got: usize, min: usize },
    /// One of the columns has zero variance; the coefficient is undefined.
    #[display("correlation is undefined when a variable has zero variance")]
    ConstantInput,
}

/// Minimum number of paired observations.
pub const MIN_OBSERVATIONS: usize = 2;

/// Computes the Pearson product-moment correlation between two samples.
///
/// Symmetric in its arguments: `pearson(x, y) == pearson(y, x)`.
///
/// # Panics
///
/// Panics if the slices have different lengths; pairing is the caller's
/// responsibility.
///
/// # Examples
///
/// ```
/// use corr_stats::correlation::pearson;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [3.0, 5.0, 7.0, 9.0, 11.0];
/// let corr = pearson(&x, &y).unwrap();
/// assert!((corr.coefficient - 1.0).abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn pearson(x: &[f64], y: &[f64]) -> Result<Correlation, CorrelationError> {
    assert_eq!(x.len(), y.len(), "samples must be paired");
    let n = x.len();
    if n < MIN_OBSERVATIONS {
        return Err(CorrelationError::TooFewObservations {
            got: n,
            min: MIN_OBSERVATIONS,
        });
    }

    let nf = n as f64;
    let x_mean = x.iter().sum::<f64>() / nf;
    let y_mean = y.iter().sum::<f64>() / nf;

    let mut ssx = 0.0;
    let mut ssy = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        ssx += dx * dx;
        ssy += dy * dy;
        sxy += dx * dy;
    }
    if ssx <= 0.0 || ssy <= 0.0 {
        return Err(CorrelationError::ConstantInput);
    }

    let coefficient = (sxy / (ssx * ssy).sqrt()).clamp(-1.0, 1.0);
    Ok(Correlation {
        coefficient,
        p_value: two_sided_p(coefficient, n),
    })
}

/// Computes the Spearman rank correlation between two samples.
///
/// Ties receive average ranks; the coefficient is the Pearson correlation
/// of the rank transforms, which makes it invariant under any strictly
/// monotonic increasing transform of either input.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn spearman(x: &[f64], y: &[f64]) -> Result<Correlation, CorrelationError> {
    assert_eq!(x.len(), y.len(), "samples must be paired");
    let n = x.len();
    if n < MIN_OBSERVATIONS {
        return Err(CorrelationError::TooFewObservations {
            got: n,
            min: MIN_OBSERVATIONS,
        });
    }
    pearson(&average_ranks(x), &average_ranks(y))
}

/// Two-sided p-value from the t approximation with n−2 degrees of freedom.
///
/// With exactly 2 points the coefficient is always ±1 and carries no
/// evidence, so p = 1. A perfect correlation on n > 2 points gives p = 0.
#[expect(clippy::cast_precision_loss)]
fn two_sided_p(r: f64, n: usize) -> f64 {
    let df = (n - 2) as f64;
    if df <= 0.0 {
        return 1.0;
    }
    let denom = 1.0 - r * r;
    if denom <= 0.0 {
        return 0.0;
    }
    let t = r * (df / denom).sqrt();
    student_t_two_sided(t, df)
}

/// Replaces each value by its 1-based rank; tied values share the average
/// of the ranks they occupy.
#[expect(clippy::cast_precision_loss)]
fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order = (0..values.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        // Ranks are 1-based; a tie run spanning positions i..=j shares their mean
        let rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = rank;
        }
        i = j + 1;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_observations() {
        assert_eq!(
            pearson(&[1.0], &[2.0]),
            Err(CorrelationError::TooFewObservations { got: 1, min: 2 })
        );
        assert_eq!(
            spearman(&[], &[]),
            Err(CorrelationError::TooFewObservations { got: 0, min: 2 })
        );
    }

    #[test]
    fn test_constant_input() {
        assert_eq!(
            pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]),
            Err(CorrelationError::ConstantInput)
        );
    }

    #[test]
    fn test_perfect_linear_relationship() {
        // y = 2x + 1 must give r ≈ 1, p ≈ 0
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = x.map(|v| 2.0 * v + 1.0);
        let corr = pearson(&x, &y).unwrap();
        assert!((corr.coefficient - 1.0).abs() < 1e-12);
        assert!(corr.p_value < 1e-9);
    }

    #[test]
    fn test_perfect_negative_relationship() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = x.map(|v| -3.0 * v + 7.0);
        let corr = pearson(&x, &y).unwrap();
        assert!((corr.coefficient + 1.0).abs() < 1e-12);
        assert!(corr.p_value < 1e-9);
    }

    #[test]
    fn test_known_p_value() {
        // r = 0.8 on 5 points: t = 0.8·√(3/0.36), p ≈ 0.1041
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 1.0, 4.0, 3.0, 5.0];
        let corr = pearson(&x, &y).unwrap();
        assert!((corr.coefficient - 0.8).abs() < 1e-12);
        assert!((corr.p_value - 0.104_088).abs() < 1e-3);
    }

    #[test]
    fn test_symmetry() {
        let x = [1.2, 3.4, 2.2, 5.6, 4.4, 0.7];
        let y = [2.0, 1.0, 4.5, 3.3, 5.1, 2.8];
        assert_eq!(pearson(&x, &y).unwrap(), pearson(&y, &x).unwrap());
        assert_eq!(spearman(&x, &y).unwrap(), spearman(&y, &x).unwrap());
    }

    #[test]
    fn test_two_points_carry_no_evidence() {
        let corr = pearson(&[1.0, 2.0], &[5.0, 3.0]).unwrap();
        assert!((corr.coefficient + 1.0).abs() < 1e-12);
        assert!((corr.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_spearman_monotonic_invariance() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y = [2.5, 1.0, 4.0, 3.5, 6.0, 5.0];
        let base = spearman(&x, &y).unwrap();
        // exp is strictly increasing, cube preserves order for positives
        let x_exp = x.map(f64::exp);
        let y_cube = y.map(|v| v.powi(3));
        assert_eq!(spearman(&x_exp, &y).unwrap(), base);
        assert_eq!(spearman(&x, &y_cube).unwrap(), base);
    }

    #[test]
    fn test_average_ranks_with_ties() {
        let ranks = average_ranks(&[10.0, 20.0, 20.0, 30.0]);
        assert_eq!(ranks, vec![1.0, 2.5, 2.5, 4.0]);
    }

    #[test]
    fn test_spearman_perfect_monotonic() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 8.0, 27.0, 64.0, 125.0];
        let corr = spearman(&x, &y).unwrap();
        assert!((corr.coefficient - 1.0).abs() < 1e-12);
    }
}
