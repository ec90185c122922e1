//! Ordinary least squares trend line.

/// A fitted straight line `y = slope · x + intercept`.
///
/// Used for scatter-plot overlays; carries no inferential statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

/// Reasons a trend line cannot be fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TrendLineError {
    #[display("trend line requires at least {min} paired observations, got {got}")]
    TooFewObservations { got: usize, min: usize },
    #[display("trend line is undefined when x has zero variance")]
    ConstantInput,
}

impl TrendLine {
    /// Fits a least-squares line through the paired points.
    ///
    /// # Panics
    ///
    /// Panics if the slices have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use corr_stats::regression::TrendLine;
    ///
    /// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let y = [3.0, 5.0, 7.0, 9.0, 11.0];
    /// let line = TrendLine::fit(&x, &y).unwrap();
    /// assert!((line.slope - 2.0).abs() < 1e-12);
    /// assert!((line.intercept - 1.0).abs() < 1e-12);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self, TrendLineError> {
        assert_eq!(x.len(), y.len(), "samples must be paired");
        let n = x.len();
        if n < 2 {
            return Err(TrendLineError::TooFewObservations { got: n, min: 2 });
        }

        let nf = n as f64;
        let x_mean = x.iter().sum::<f64>() / nf;
        let y_mean = y.iter().sum::<f64>() / nf;

        let mut ssx = 0.0;
        let mut sxy = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            let dx = xi - x_mean;
            ssx += dx * dx;
            sxy += dx * (yi - y_mean);
        }
        if ssx <= 0.0 {
            return Err(TrendLineError::ConstantInput);
        }

        let slope = sxy / ssx;
        Ok(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    /// The predicted y at a given x.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let x = [0.0, 1.0, 2.0];
        let y = [1.0, 3.0, 5.0];
        let line = TrendLine::fit(&x, &y).unwrap();
        assert!((line.slope - 2.0).abs() < 1e-12);
        assert!((line.intercept - 1.0).abs() < 1e-12);
        assert!((line.predict(10.0) - 21.0).abs() < 1e-12);
    }

    #[test]
    fn test_noisy_points_pass_through_means() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.1, 1.9, 3.2, 3.8];
        let line = TrendLine::fit(&x, &y).unwrap();
        let x_mean = 2.5;
        let y_mean = 2.5;
        assert!((line.predict(x_mean) - y_mean).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(
            TrendLine::fit(&[1.0], &[1.0]),
            Err(TrendLineError::TooFewObservations { got: 1, min: 2 })
        );
        assert_eq!(
            TrendLine::fit(&[2.0, 2.0], &[1.0, 3.0]),
            Err(TrendLineError::ConstantInput)
        );
    }
}
