use std::ops::Range;

/// A histogram representation of a dataset's distribution.
///
/// The histogram divides the data range into equal-width bins and counts the
/// frequency of values falling into each bin. Used for the distribution
/// preview attached to each column summary.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending range order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive
    /// end; the last bin includes its end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// This method sorts the input internally. Returns an empty histogram
    /// for an empty dataset or `num_bins == 0`. A degenerate dataset where
    /// every value is identical yields a single bin holding all values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use corr_stats::histogram::Histogram;
    /// let values = [5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 6.0, 10.0];
    /// let histogram = Histogram::new(values, 5);
    /// assert_eq!(histogram.bins.len(), 5);
    /// assert_eq!(histogram.total_count(), 10);
    /// ```
    #[must_use]
    pub fn new<I>(values: I, num_bins: usize) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, num_bins)
    }

    /// Creates a histogram from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], num_bins: usize) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        if sorted_values.is_empty() || num_bins == 0 {
            return Self { bins: vec![] };
        }

        let min = sorted_values[0];
        let max = sorted_values[sorted_values.len() - 1];
        if max <= min {
            // All values identical: one bin covering the single point
            return Self {
                bins: vec![HistogramBin {
                    range: min..max,
                    count: sorted_values.len() as u64,
                }],
            };
        }

        let width = (max - min) / num_bins as f64;
        let mut bins = (0..num_bins)
            .map(|i| HistogramBin {
                range: (min + i as f64 * width)..(min + (i + 1) as f64 * width),
                count: 0,
            })
            .collect::<Vec<_>>();

        for &v in sorted_values {
            let idx = (((v - min) / width) as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Total number of values counted across all bins.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        let histogram = Histogram::new([], 5);
        assert!(histogram.bins.is_empty());
    }

    #[test]
    fn test_all_values_counted() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let histogram = Histogram::new(values, 4);
        assert_eq!(histogram.total_count(), 10);
    }

    #[test]
    fn test_max_value_lands_in_last_bin() {
        let histogram = Histogram::new([0.0, 10.0], 5);
        assert_eq!(histogram.bins.last().unwrap().count, 1);
        assert_eq!(histogram.bins.first().unwrap().count, 1);
    }

    #[test]
    fn test_constant_values_single_bin() {
        let histogram = Histogram::new([3.0, 3.0, 3.0], 5);
        assert_eq!(histogram.bins.len(), 1);
        assert_eq!(histogram.total_count(), 3);
    }
}
