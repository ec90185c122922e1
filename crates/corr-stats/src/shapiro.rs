//! Shapiro–Wilk normality test.
//!
//! Implements Royston's approximation (algorithm AS R94, Applied Statistics
//! 1995), the same algorithm behind R's `shapiro.test` and SciPy's
//! `shapiro`: normal-scores weights for the W statistic, then a
//! log-normal transformation of `1 - W` whose standardized value is looked
//! up in the normal tail. Small samples (n ≤ 11) use Royston's dedicated
//! polynomial fits; n = 3 has a closed form.

use crate::special::{normal_quantile, normal_sf, poly};

/// Result of a Shapiro–Wilk test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapiroWilk {
    /// The W statistic, in (0, 1]. Values near 1 are consistent with
    /// normality.
    pub statistic: f64,
    /// Two-sided p-value for the null hypothesis that the sample is drawn
    /// from a normal distribution.
    pub p_value: f64,
}

/// Reasons a Shapiro–Wilk test cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ShapiroWilkError {
    /// The test is degenerate below 3 observations.
    #[display("normality test requires at least {min} observations, got {got}")]
    TooFewObservations { got: usize, min: usize },
    /// All observations are identical; W is undefined for zero range.
    #[display("normality test is undefined when all observations are identical")]
    ConstantInput,
}

/// Minimum sample size for the test.
pub const MIN_OBSERVATIONS: usize = 3;

// Royston's polynomial coefficients (ascending order).
const C1: [f64; 6] = [0.0, 0.221_157, -0.147_981, -2.071_190, 4.434_685, -2.706_056];
const C2: [f64; 6] = [0.0, 0.042_981, -0.293_762, -1.752_461, 5.682_633, -3.582_633];
const C3: [f64; 4] = [0.544, -0.399_78, 0.025_054, -6.714e-4];
const C4: [f64; 4] = [1.382_2, -0.778_57, 0.062_767, -2.032_2e-3];
const C5: [f64; 4] = [-1.586_1, -0.310_82, -0.083_751, 3.891_5e-3];
const C6: [f64; 3] = [-0.480_3, -0.082_676, 3.030_2e-3];
const G: [f64; 2] = [-2.273, 0.459];

/// Computes the Shapiro–Wilk statistic and p-value for a sample.
///
/// The caller is expected to have dropped missing values already; every
/// element of `values` participates in the test.
///
/// # Examples
///
/// ```
/// use corr_stats::shapiro::shapiro_wilk;
///
/// // Three equally spaced points fit a normal perfectly: W = 1, p = 1.
/// let result = shapiro_wilk(&[1.0, 2.0, 3.0]).unwrap();
/// assert!((result.statistic - 1.0).abs() < 1e-12);
/// assert!((result.p_value - 1.0).abs() < 1e-6);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn shapiro_wilk(values: &[f64]) -> Result<ShapiroWilk, ShapiroWilkError> {
    let n = values.len();
    if n < MIN_OBSERVATIONS {
        return Err(ShapiroWilkError::TooFewObservations {
            got: n,
            min: MIN_OBSERVATIONS,
        });
    }

    let mut x = values.to_vec();
    x.sort_by(f64::total_cmp);
    let range = x[n - 1] - x[0];
    if range <= 0.0 {
        return Err(ShapiroWilkError::ConstantInput);
    }

    let statistic = w_statistic(&x, range);
    let p_value = p_value(statistic, n as f64);
    Ok(ShapiroWilk { statistic, p_value })
}

/// Computes the normal-scores weight half-vector `a[0..n/2]`.
///
/// Weights are positive and apply antisymmetrically: `-a[i]` to the i-th
/// smallest observation, `+a[i]` to the i-th largest.
#[expect(clippy::cast_precision_loss)]
fn weights(n: usize) -> Vec<f64> {
    let nn2 = n / 2;
    if n == 3 {
        return vec![0.5_f64.sqrt()];
    }

    let an = n as f64;
    let an25 = an + 0.25;
    let mut a = (0..nn2)
        .map(|i| normal_quantile(((i + 1) as f64 - 0.375) / an25))
        .collect::<Vec<_>>();
    let summ2 = 2.0 * a.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / an.sqrt();

    let a1 = poly(&C1, rsn) - a[0] / ssumm2;
    let (first_unadjusted, a2, fac) = if n > 5 {
        let a2 = -a[1] / ssumm2 + poly(&C2, rsn);
        let fac = ((summ2 - 2.0 * a[0] * a[0] - 2.0 * a[1] * a[1])
            / (1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2))
            .sqrt();
        (2, Some(a2), fac)
    } else {
        let fac = ((summ2 - 2.0 * a[0] * a[0]) / (1.0 - 2.0 * a1 * a1)).sqrt();
        (1, None, fac)
    };

    for v in &mut a[first_unadjusted..] {
        *v /= -fac;
    }
    a[0] = a1;
    if let Some(a2) = a2 {
        a[1] = a2;
    }
    a
}

/// The W statistic: squared correlation between the sorted sample and the
/// normal-scores weights, computed in centered form for stability.
#[expect(clippy::cast_precision_loss)]
fn w_statistic(sorted: &[f64], range: f64) -> f64 {
    let n = sorted.len();
    let a = weights(n);

    let mut w = vec![0.0; n];
    for (i, &ai) in a.iter().enumerate() {
        w[i] = -ai;
        w[n - 1 - i] = ai;
    }

    let an = n as f64;
    let w_mean = w.iter().sum::<f64>() / an;
    let x_mean = sorted.iter().map(|v| v / range).sum::<f64>() / an;

    let mut ssa = 0.0;
    let mut ssx = 0.0;
    let mut sax = 0.0;
    for i in 0..n {
        let da = w[i] - w_mean;
        let dx = sorted[i] / range - x_mean;
        ssa += da * da;
        ssx += dx * dx;
        sax += da * dx;
    }

    let ssassx = (ssa * ssx).sqrt();
    let w1 = ((ssassx - sax) * (ssassx + sax) / (ssa * ssx)).max(0.0);
    1.0 - w1
}

/// Royston's p-value approximation for a given W and sample size.
fn p_value(w: f64, an: f64) -> f64 {
    if an == 3.0 {
        // Exact small-sample form: p = (6/π)(asin(√W) − π/3)
        let pi6 = 6.0 / std::f64::consts::PI;
        let stqr = std::f64::consts::FRAC_PI_3;
        return (pi6 * (w.sqrt().asin() - stqr)).clamp(0.0, 1.0);
    }

    let y = (1.0 - w).ln();
    let (m, s, y) = if an <= 11.0 {
        let gamma = poly(&G, an);
        if y >= gamma {
            return 0.0;
        }
        (poly(&C3, an), poly(&C4, an).exp(), -(gamma - y).ln())
    } else {
        let log_n = an.ln();
        (poly(&C5, log_n), poly(&C6, log_n).exp(), y)
    };

    normal_sf((y - m) / s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::special::normal_quantile;

    #[test]
    fn test_too_few_observations() {
        assert_eq!(
            shapiro_wilk(&[1.0, 2.0]),
            Err(ShapiroWilkError::TooFewObservations { got: 2, min: 3 })
        );
    }

    #[test]
    fn test_constant_input() {
        assert_eq!(
            shapiro_wilk(&[5.0, 5.0, 5.0, 5.0]),
            Err(ShapiroWilkError::ConstantInput)
        );
    }

    #[test]
    fn test_three_equally_spaced_points() {
        let result = shapiro_wilk(&[1.0, 2.0, 3.0]).unwrap();
        assert!((result.statistic - 1.0).abs() < 1e-12);
        assert!((result.p_value - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_statistic_and_p_within_bounds() {
        let data = [2.1, 4.7, 3.3, 8.2, 5.5, 6.0, 4.1, 3.9, 5.2, 7.7];
        let result = shapiro_wilk(&data).unwrap();
        assert!(result.statistic > 0.0 && result.statistic <= 1.0);
        assert!((0.0..=1.0).contains(&result.p_value));
    }

    #[test]
    fn test_normal_scores_sample_looks_normal() {
        // A sample placed exactly at its own normal scores is as normal as
        // a sample can be: W near 1 and a comfortably large p-value.
        let n = 20;
        let data = (1..=n)
            .map(|i| normal_quantile((f64::from(i) - 0.375) / (f64::from(n) + 0.25)))
            .collect::<Vec<_>>();
        let result = shapiro_wilk(&data).unwrap();
        assert!(result.statistic > 0.98);
        assert!(result.p_value > 0.5);
    }

    #[test]
    fn test_extreme_outlier_rejects_normality() {
        let mut data = (1..=19).map(f64::from).collect::<Vec<_>>();
        data.push(1.0e4);
        let result = shapiro_wilk(&data).unwrap();
        assert!(result.p_value < 0.05);
    }

    #[test]
    fn test_translation_and_scale_invariance() {
        let data = [2.0, 3.5, 1.1, 4.8, 3.2, 2.9, 4.0, 1.9];
        let shifted = data.iter().map(|v| 10.0 * v + 3.0).collect::<Vec<_>>();
        let a = shapiro_wilk(&data).unwrap();
        let b = shapiro_wilk(&shifted).unwrap();
        assert!((a.statistic - b.statistic).abs() < 1e-10);
        assert!((a.p_value - b.p_value).abs() < 1e-10);
    }
}
