//! Tabular data model for the corr analysis pipeline.
//!
//! This crate owns the first three pipeline stages:
//!
//! 1. **Ingestion** ([`raw::RawTable::parse`]): split delimited text into a
//!    rectangular grid of string cells under a header row.
//! 2. **Coercion** ([`raw::RawTable::coerce`]): convert every cell to a
//!    [`cell::Cell`] (numeric or missing), classifying each column as
//!    numeric-eligible or not.
//! 3. **Selection** ([`numeric::NumericTable::select`]): project the table
//!    onto a user-chosen subset of numeric-eligible columns.
//!
//! All types are request-scoped values: a table is built fresh from the
//! uploaded bytes on every run and nothing survives across runs.
//!
//! # Examples
//!
//! ```
//! use corr_table::{format::FormatOptions, raw::RawTable};
//!
//! let input = "x;y\n1,5;2\n2,5;4\n3,5;6\n";
//! let options = FormatOptions::default();
//! let table = RawTable::parse(input, &options).unwrap();
//! let numeric = table.coerce(&options);
//! let selection = numeric.select(&["x", "y"]).unwrap();
//! assert_eq!(selection.columns().len(), 2);
//! ```

pub mod cell;
pub mod format;
pub mod numeric;
pub mod raw;
