//! The end-to-end analysis pipeline.
//!
//! One request maps raw input text to a full report:
//! parse → coerce → select → summarize → normality → correlation →
//! interpretation. Each stage is a pure function of its input plus the
//! request parameters; nothing survives across runs.

use corr_stats::{
    correlation::{self, Correlation},
    descriptive::DescriptiveStats,
    histogram::Histogram,
    regression::TrendLine,
    shapiro,
};
use corr_table::{
    format::FormatOptions,
    numeric::{NumericColumn, SelectError, Selection},
    raw::{FormatError, RawTable},
};

use crate::{
    interpret::{Method, Verdict, summary_sentence},
    normality::NormalityResult,
    report::{
        AnalysisReport, ColumnSummary, CorrelationOutcome, CorrelationReport, NormalityEntry,
        TablePreview,
    },
};

/// Number of rows shown in the report preview.
pub const PREVIEW_ROWS: usize = 5;
/// Number of bins in the per-column histograms.
pub const HISTOGRAM_BINS: usize = 10;

/// Parameters of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub format: FormatOptions,
    /// Columns to include in the analysis; must project to at least two
    /// numeric-eligible columns.
    pub selected_columns: Vec<String>,
    /// Variables to test for normality. `None` tests every selected
    /// numeric column.
    pub normality_columns: Option<Vec<String>>,
    /// The pair to correlate; both names must be distinct members of the
    /// selection.
    pub pair: (String, String),
    pub method: Method,
}

/// Reasons an analysis run aborts before any test can produce results.
///
/// Per-test failures (too few observations, constant input) do not abort
/// the run; they are carried inside the report.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AnalysisError {
    #[display("{_0}")]
    Format(FormatError),
    #[display("{_0}")]
    Select(SelectError),
    #[display("pair must name two distinct selected numeric columns, got '{x}' and '{y}'")]
    #[from(skip)]
    InvalidPair { x: String, y: String },
}

/// Runs the full pipeline over raw input text.
///
/// # Examples
///
/// ```
/// use corr_analysis::{
///     interpret::Method,
///     pipeline::{AnalysisRequest, run_analysis},
///     report::CorrelationOutcome,
/// };
/// use corr_table::format::FormatOptions;
///
/// let input = "x;y\n1;3\n2;5\n3;7\n4;9\n5;11\n";
/// let request = AnalysisRequest {
///     format: FormatOptions::default(),
///     selected_columns: vec!["x".into(), "y".into()],
///     normality_columns: None,
///     pair: ("x".into(), "y".into()),
///     method: Method::Pearson,
/// };
/// let report = run_analysis(input, &request).unwrap();
/// let CorrelationOutcome::Computed(corr) = &report.correlation else {
///     panic!("correlation should be computed");
/// };
/// assert!((corr.coefficient - 1.0).abs() < 1e-12);
/// ```
pub fn run_analysis(text: &str, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
    let raw = RawTable::parse(text, &request.format)?;
    let numeric = raw.coerce(&request.format);
    let selection = numeric.select(&request.selected_columns)?;

    let preview = TablePreview {
        column_names: raw.column_names().to_vec(),
        column_count: raw.column_count(),
        row_count: raw.row_count(),
        rows: raw.preview(PREVIEW_ROWS).to_vec(),
    };

    let summaries = selection
        .columns()
        .iter()
        .filter_map(|column| summarize(column))
        .collect();

    let normality = normality_entries(&selection, request);
    let correlation = correlate(&selection, request)?;

    Ok(AnalysisReport {
        preview,
        warnings: numeric.warnings().to_vec(),
        summaries,
        normality,
        correlation,
    })
}

fn summarize(column: &NumericColumn) -> Option<ColumnSummary> {
    let values = column.non_missing();
    let stats = DescriptiveStats::new(values.iter().copied())?;
    let histogram = Histogram::new(values, HISTOGRAM_BINS);
    Some(ColumnSummary::new(
        column.name().to_owned(),
        column.missing_count(),
        &stats,
        &histogram,
    ))
}

fn normality_entries(selection: &Selection<'_>, request: &AnalysisRequest) -> Vec<NormalityEntry> {
    let variables: Vec<&str> = match &request.normality_columns {
        Some(names) => names.iter().map(String::as_str).collect(),
        None => selection.columns().iter().map(|c| c.name()).collect(),
    };

    variables
        .into_iter()
        .map(|variable| {
            let Some(column) = selection.column(variable) else {
                return NormalityEntry::Skipped {
                    variable: variable.to_owned(),
                    reason: "not among the selected numeric columns".to_owned(),
                };
            };
            match shapiro::shapiro_wilk(&column.non_missing()) {
                Ok(test) => NormalityEntry::Tested(NormalityResult::new(variable.to_owned(), test)),
                Err(err) => NormalityEntry::Skipped {
                    variable: variable.to_owned(),
                    reason: err.to_string(),
                },
            }
        })
        .collect()
}

fn correlate(
    selection: &Selection<'_>,
    request: &AnalysisRequest,
) -> Result<CorrelationOutcome, AnalysisError> {
    let (x, y) = (&request.pair.0, &request.pair.1);
    let Some((xs, ys)) = selection.paired(x, y) else {
        return Err(AnalysisError::InvalidPair {
            x: x.clone(),
            y: y.clone(),
        });
    };

    let computed = match request.method {
        Method::Pearson => correlation::pearson(&xs, &ys),
        Method::Spearman => correlation::spearman(&xs, &ys),
    };
    let Correlation {
        coefficient,
        p_value,
    } = match computed {
        Ok(correlation) => correlation,
        Err(err) => {
            return Ok(CorrelationOutcome::Failed {
                x: x.clone(),
                y: y.clone(),
                reason: err.to_string(),
            });
        }
    };

    let verdict = Verdict::new(coefficient, p_value);
    let trend_line = match request.method {
        // Fit is defined whenever Pearson succeeded: n >= 2 and x non-constant
        Method::Pearson => TrendLine::fit(&xs, &ys).ok().map(Into::into),
        Method::Spearman => None,
    };

    Ok(CorrelationOutcome::Computed(CorrelationReport {
        method: request.method,
        x: x.clone(),
        y: y.clone(),
        paired_count: xs.len(),
        coefficient,
        p_value,
        verdict,
        summary: summary_sentence(verdict, x, y),
        trend_line,
    }))
}
