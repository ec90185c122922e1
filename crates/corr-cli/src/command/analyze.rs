//! Analyze command: run the pipeline over a file and print the report.

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Args;
use corr_analysis::{
    interpret::Method,
    pipeline::{AnalysisRequest, run_analysis},
    report::{AnalysisReport, ColumnSummary, CorrelationOutcome, NormalityEntry},
};
use corr_table::{format::FormatOptions, raw::RawTable};

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    /// Path to the delimited input file
    pub input: PathBuf,

    /// Field delimiter
    #[arg(long, default_value_t = ';')]
    pub delimiter: char,

    /// Decimal marker used inside numeric cells
    #[arg(long, default_value_t = ',')]
    pub decimal: char,

    /// Columns to include in the analysis (comma-separated; default: all)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Variables to test for normality (comma-separated; default: all selected)
    #[arg(long, value_delimiter = ',')]
    pub normality: Vec<String>,

    /// First variable of the correlation pair
    #[arg(short, long)]
    pub x: String,

    /// Second variable of the correlation pair
    #[arg(short, long)]
    pub y: String,

    /// Correlation method (pearson or spearman)
    #[arg(long, default_value = "pearson")]
    pub method: Method,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let text = fs::read_to_string(&arg.input)
        .with_context(|| format!("failed to read {}", arg.input.display()))?;

    let delimiter = u8::try_from(u32::from(arg.delimiter))
        .ok()
        .filter(u8::is_ascii)
        .context("delimiter must be an ASCII character")?;
    let format = FormatOptions {
        delimiter,
        decimal: arg.decimal,
    };

    let selected_columns = if arg.columns.is_empty() {
        // Default to every column in the file
        RawTable::parse(&text, &format)?
            .column_names()
            .to_vec()
    } else {
        arg.columns.clone()
    };

    let request = AnalysisRequest {
        format,
        selected_columns,
        normality_columns: (!arg.normality.is_empty()).then(|| arg.normality.clone()),
        pair: (arg.x.clone(), arg.y.clone()),
        method: arg.method,
    };

    let report = run_analysis(&text, &request)?;

    if arg.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    println!("Data Preview");
    println!("============");
    println!(
        "Columns ({}): {}",
        report.preview.column_count,
        report.preview.column_names.join(", ")
    );
    println!("Rows: {}", report.preview.row_count);
    for row in &report.preview.rows {
        println!("  {}", row.join(" | "));
    }
    println!();

    if !report.warnings.is_empty() {
        println!("Warnings");
        println!("========");
        for warning in &report.warnings {
            println!("  {warning}");
        }
        println!();
    }

    println!("Column Summaries");
    println!("================");
    for summary in &report.summaries {
        print_summary(summary);
    }

    println!("Normality (Shapiro-Wilk)");
    println!("========================");
    for entry in &report.normality {
        match entry {
            NormalityEntry::Tested(result) => {
                println!("{}:", result.variable);
                println!("  W = {:.4}, p = {:.4}", result.statistic, result.p_value);
                println!(
                    "  Verdict: {} (recommended method: {})",
                    result.verdict, result.recommended_method
                );
            }
            NormalityEntry::Skipped { variable, reason } => {
                println!("{variable}: skipped ({reason})");
            }
        }
    }
    println!();

    println!("Correlation");
    println!("===========");
    match &report.correlation {
        CorrelationOutcome::Computed(corr) => {
            println!(
                "{} correlation between {} and {} ({} paired rows)",
                corr.method, corr.x, corr.y, corr.paired_count
            );
            println!(
                "  coefficient = {:.4} ({} {})",
                corr.coefficient, corr.verdict.strength, corr.verdict.direction
            );
            println!(
                "  p = {:.4} ({})",
                corr.p_value,
                if corr.verdict.significant {
                    "statistically significant"
                } else {
                    "not statistically significant"
                }
            );
            if let Some(trend) = corr.trend_line {
                println!(
                    "  trend line: y = {:.4}x + {:.4}",
                    trend.slope, trend.intercept
                );
            }
            println!("\n{}", corr.summary);
        }
        CorrelationOutcome::Failed { x, y, reason } => {
            println!("Could not correlate {x} and {y}: {reason}");
        }
    }
}

#[expect(clippy::cast_possible_truncation)]
fn print_summary(summary: &ColumnSummary) {
    println!(
        "{} (n = {}, missing = {})",
        summary.name, summary.count, summary.missing
    );
    println!(
        "  min = {:.4}  max = {:.4}  mean = {:.4}  median = {:.4}  sd = {:.4}",
        summary.min, summary.max, summary.mean, summary.median, summary.std_dev
    );
    let max_count = summary.histogram.iter().map(|b| b.count).max().unwrap_or(0);
    if max_count > 0 {
        for bar in &summary.histogram {
            let width = (bar.count * 40 / max_count) as usize;
            println!(
                "  [{:>10.3}, {:>10.3})  {:>4}  {}",
                bar.start,
                bar.end,
                bar.count,
                "#".repeat(width)
            );
        }
    }
    println!();
}
