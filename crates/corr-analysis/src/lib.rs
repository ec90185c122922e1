//! Analysis orchestration for the corr pipeline.
//!
//! This crate composes the table and statistics layers into the full
//! request-scoped decision pipeline and owns the interpretation rules that
//! turn raw numbers into categorical verdicts:
//!
//! 1. Ingestion / coercion / selection (via `corr-table`)
//! 2. Per-column summaries and histograms (via `corr-stats`)
//! 3. Shapiro–Wilk normality verdicts per selected variable
//! 4. Pearson or Spearman correlation for the chosen pair
//! 5. Strength / direction / significance verdicts and the summary sentence
//!
//! The entry point is [`pipeline::run_analysis`], which maps an
//! [`pipeline::AnalysisRequest`] over raw input text to an
//! [`report::AnalysisReport`] — the structured result handed to whatever
//! presentation layer sits on top.
//!
//! # Modules
//!
//! - [`interpret`]: Fixed-threshold verdict mapping and summary composition
//! - [`normality`]: Normality verdicts and method recommendations
//! - [`pipeline`]: The end-to-end request pipeline
//! - [`report`]: Serializable result types
//! - [`template`]: The downloadable example-file artifact

pub mod interpret;
pub mod normality;
pub mod pipeline;
pub mod report;
pub mod template;
