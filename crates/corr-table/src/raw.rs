//! Ingestion: delimited text to a rectangular grid of string cells.

use std::collections::BTreeSet;

use crate::{
    cell::Cell,
    format::FormatOptions,
    numeric::{CoercionWarning, NumericColumn, NumericTable},
};

/// A rectangular table of raw string cells under a header row.
///
/// Produced only by [`RawTable::parse`]; row count and column order are
/// fixed from that point on.
#[derive(Debug, Clone)]
pub struct RawTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Reasons raw input cannot be ingested as a table.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum FormatError {
    /// The input has no header row.
    #[display("input is empty")]
    Empty,
    /// The underlying reader failed to split the input into records.
    #[display("input could not be read as delimited text: {_0}")]
    Read(csv::Error),
    /// A header cell is blank.
    #[display("column {position} has an empty name")]
    EmptyColumnName { position: usize },
    /// Two header cells carry the same name.
    #[display("duplicate column name '{name}'")]
    DuplicateColumnName { name: String },
    /// A data row does not match the header width.
    #[display("row {row} has {got} fields, expected {expected}")]
    InconsistentFieldCount {
        row: usize,
        expected: usize,
        got: usize,
    },
}

impl RawTable {
    /// Parses delimited text into a rectangular table.
    ///
    /// The first record is the header and must consist of unique, non-empty
    /// names; every following record must have exactly as many fields.
    /// Record splitting and quoting follow CSV conventions with the
    /// delimiter from `options`.
    ///
    /// # Examples
    ///
    /// ```
    /// use corr_table::{format::FormatOptions, raw::RawTable};
    ///
    /// let table = RawTable::parse("a;b\n1;2\n3;4\n", &FormatOptions::default()).unwrap();
    /// assert_eq!(table.column_names(), ["a", "b"]);
    /// assert_eq!(table.row_count(), 2);
    /// ```
    pub fn parse(text: &str, options: &FormatOptions) -> Result<Self, FormatError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut records = reader.records();
        let header = match records.next() {
            Some(record) => record.map_err(FormatError::Read)?,
            None => return Err(FormatError::Empty),
        };

        let mut seen = BTreeSet::new();
        let mut names = Vec::with_capacity(header.len());
        for (position, name) in header.iter().enumerate() {
            let name = name.trim();
            if name.is_empty() {
                return Err(FormatError::EmptyColumnName { position });
            }
            if !seen.insert(name.to_owned()) {
                return Err(FormatError::DuplicateColumnName {
                    name: name.to_owned(),
                });
            }
            names.push(name.to_owned());
        }

        let mut rows = Vec::new();
        for (i, record) in records.enumerate() {
            let record = record.map_err(FormatError::Read)?;
            if record.len() != names.len() {
                return Err(FormatError::InconsistentFieldCount {
                    // 1-based, counting the header as row 1
                    row: i + 2,
                    expected: names.len(),
                    got: record.len(),
                });
            }
            rows.push(record.iter().map(str::to_owned).collect());
        }

        Ok(Self {
            header: names,
            rows,
        })
    }

    /// Column names in table order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.header
    }

    /// Number of data rows (excluding the header).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// The first `limit` data rows, for report previews.
    #[must_use]
    pub fn preview(&self, limit: usize) -> &[Vec<String>] {
        &self.rows[..self.rows.len().min(limit)]
    }

    /// Coerces every cell to numeric-or-missing, classifying each column.
    ///
    /// Coercion never fails: a cell that cannot be parsed becomes missing,
    /// and a column with no numeric cells at all is carried along as
    /// ineligible with a [`CoercionWarning`]. Row count and column order
    /// are preserved.
    #[must_use]
    pub fn coerce(&self, options: &FormatOptions) -> NumericTable {
        let columns = self
            .header
            .iter()
            .enumerate()
            .map(|(col, name)| {
                let cells = self
                    .rows
                    .iter()
                    .map(|row| Cell::coerce(&row[col], options))
                    .collect::<Vec<_>>();
                NumericColumn::new(name.clone(), cells)
            })
            .collect::<Vec<_>>();

        let warnings = columns
            .iter()
            .filter(|c| !c.is_numeric_eligible())
            .map(|c| CoercionWarning {
                column: c.name().to_owned(),
            })
            .collect();

        NumericTable::new(columns, warnings)
    }
}
