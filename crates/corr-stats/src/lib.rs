//! Statistical building blocks for the corr analysis pipeline.
//!
//! This crate provides the pure numeric layer: everything here operates on
//! plain `f64` slices with no knowledge of tables, columns, or reports.
//!
//! - **Descriptive statistics**: min, max, mean, median, variance, standard deviation
//! - **Histogram generation**: equal-width frequency bins for distribution previews
//! - **Normality testing**: Shapiro–Wilk statistic and p-value (Royston's AS R94)
//! - **Correlation**: Pearson and Spearman coefficients with two-sided p-values
//! - **Regression**: ordinary least squares trend line fitting
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`histogram`]: Histogram construction for visualizing data distributions
//! - [`shapiro`]: Shapiro–Wilk normality test
//! - [`correlation`]: Pearson and Spearman correlation with significance
//! - [`regression`]: Least-squares trend line
//! - [`special`]: Special functions backing the p-value computations
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use corr_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Testing a correlation for significance
//!
//! ```
//! use corr_stats::correlation::pearson;
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [3.0, 5.0, 7.0, 9.0, 11.0];
//! let corr = pearson(&x, &y).unwrap();
//! assert!((corr.coefficient - 1.0).abs() < 1e-12);
//! assert!(corr.p_value < 1e-9);
//! ```

pub mod correlation;
pub mod descriptive;
pub mod histogram;
pub mod regression;
pub mod shapiro;
pub mod special;
