//! Serializable result types handed to the presentation layer.
//!
//! These mirror the `corr-stats` value types in plain serde-friendly form
//! so the statistics crate stays serialization-free.

use corr_stats::{descriptive::DescriptiveStats, histogram::Histogram, regression::TrendLine};
use corr_table::numeric::CoercionWarning;
use serde::{Deserialize, Serialize};

use crate::{interpret::Method, interpret::Verdict, normality::NormalityResult};

/// The complete result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub preview: TablePreview,
    pub warnings: Vec<CoercionWarning>,
    /// One summary per selected numeric column, in table order.
    pub summaries: Vec<ColumnSummary>,
    /// One entry per variable the caller asked to test for normality.
    pub normality: Vec<NormalityEntry>,
    pub correlation: CorrelationOutcome,
}

/// The first rows of the ingested table, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePreview {
    pub column_names: Vec<String>,
    pub column_count: usize,
    pub row_count: usize,
    /// Raw string cells of the first rows, pre-coercion.
    pub rows: Vec<Vec<String>>,
}

/// Descriptive summary of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    /// Non-missing observation count.
    pub count: usize,
    pub missing: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub histogram: Vec<HistogramBar>,
}

/// One bar of a column's frequency histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBar {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

impl ColumnSummary {
    #[must_use]
    pub fn new(
        name: String,
        missing: usize,
        stats: &DescriptiveStats,
        histogram: &Histogram,
    ) -> Self {
        Self {
            name,
            count: stats.count,
            missing,
            min: stats.min,
            max: stats.max,
            mean: stats.mean,
            median: stats.median,
            std_dev: stats.std_dev,
            histogram: histogram
                .bins
                .iter()
                .map(|bin| HistogramBar {
                    start: bin.range.start,
                    end: bin.range.end,
                    count: bin.count,
                })
                .collect(),
        }
    }
}

/// Normality outcome for one variable.
///
/// A variable with too few observations is reported as skipped instead of
/// failing the run; the rest of the report stays intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NormalityEntry {
    Tested(NormalityResult),
    Skipped { variable: String, reason: String },
}

/// Correlation outcome for the chosen pair.
///
/// Mirrors the normality handling: a failed test (too few paired rows,
/// constant column) is carried in the report rather than discarding the
/// results already computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CorrelationOutcome {
    Computed(CorrelationReport),
    Failed { x: String, y: String, reason: String },
}

/// A computed correlation with its verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    pub method: Method,
    pub x: String,
    pub y: String,
    /// Paired observations after the row-wise inner join.
    pub paired_count: usize,
    pub coefficient: f64,
    pub p_value: f64,
    pub verdict: Verdict,
    pub summary: String,
    /// Least-squares overlay; only computed for Pearson.
    pub trend_line: Option<TrendLineParams>,
}

/// Slope and intercept of the visualization trend line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLineParams {
    pub slope: f64,
    pub intercept: f64,
}

impl From<TrendLine> for TrendLineParams {
    fn from(line: TrendLine) -> Self {
        Self {
            slope: line.slope,
            intercept: line.intercept,
        }
    }
}
