//! Coerced numeric table and column selection.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// A named column of coerced cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericColumn {
    name: String,
    cells: Vec<Cell>,
}

impl NumericColumn {
    #[must_use]
    pub fn new(name: String, cells: Vec<Cell>) -> Self {
        Self { name, cells }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// A column takes part in numeric analysis iff it has at least one
    /// non-missing value after coercion.
    #[must_use]
    pub fn is_numeric_eligible(&self) -> bool {
        self.cells.iter().any(|c| !c.is_missing())
    }

    /// The non-missing values, in row order.
    #[must_use]
    pub fn non_missing(&self) -> Vec<f64> {
        self.cells.iter().filter_map(|c| c.as_f64()).collect()
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_missing()).count()
    }
}

/// A non-fatal, per-column warning: the column could not be numerically
/// interpreted and is excluded from analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("column '{column}' has no numeric values and was excluded from analysis")]
pub struct CoercionWarning {
    pub column: String,
}

/// A table whose cells have been coerced to numeric-or-missing.
///
/// Immutable after coercion; all downstream stages borrow from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericTable {
    columns: Vec<NumericColumn>,
    warnings: Vec<CoercionWarning>,
}

/// Reasons a column selection cannot be used for analysis.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SelectError {
    /// A requested name is not a column of the table.
    #[display("column '{name}' does not exist in the table")]
    UnknownColumn { name: String },
    /// Fewer than two numeric-eligible columns remain after projection.
    #[display(
        "analysis requires at least {min} numeric columns, but only {eligible} of the selected columns are numeric"
    )]
    InsufficientColumns { eligible: usize, min: usize },
}

/// Minimum number of numeric-eligible columns for any analysis.
pub const MIN_SELECTED_COLUMNS: usize = 2;

impl NumericTable {
    #[must_use]
    pub fn new(columns: Vec<NumericColumn>, warnings: Vec<CoercionWarning>) -> Self {
        Self { columns, warnings }
    }

    #[must_use]
    pub fn columns(&self) -> &[NumericColumn] {
        &self.columns
    }

    /// Per-column coercion warnings gathered during ingestion.
    #[must_use]
    pub fn warnings(&self) -> &[CoercionWarning] {
        &self.warnings
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&NumericColumn> {
        self.columns.iter().find(|c| c.name() == name)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells().len())
    }

    /// Projects the table onto the named columns, keeping only the
    /// numeric-eligible ones.
    ///
    /// Column order follows the table, not the request. Fails when a name
    /// is unknown or when fewer than two eligible columns remain; both
    /// tests downstream need at least a pair.
    pub fn select<S>(&self, names: &[S]) -> Result<Selection<'_>, SelectError>
    where
        S: AsRef<str>,
    {
        for name in names {
            if self.column(name.as_ref()).is_none() {
                return Err(SelectError::UnknownColumn {
                    name: name.as_ref().to_owned(),
                });
            }
        }

        let columns = self
            .columns
            .iter()
            .filter(|c| names.iter().any(|n| n.as_ref() == c.name()))
            .filter(|c| c.is_numeric_eligible())
            .collect::<Vec<_>>();

        if columns.len() < MIN_SELECTED_COLUMNS {
            return Err(SelectError::InsufficientColumns {
                eligible: columns.len(),
                min: MIN_SELECTED_COLUMNS,
            });
        }

        Ok(Selection { columns })
    }
}

/// A projection of a [`NumericTable`] onto at least two numeric-eligible
/// columns, in table order.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    columns: Vec<&'a NumericColumn>,
}

impl<'a> Selection<'a> {
    #[must_use]
    pub fn columns(&self) -> &[&'a NumericColumn] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&'a NumericColumn> {
        self.columns.iter().find(|c| c.name() == name).copied()
    }

    /// Row-wise inner join of two columns: only rows where both values are
    /// present participate.
    ///
    /// Returns `None` when either name is not part of the selection or the
    /// names are not distinct.
    #[must_use]
    pub fn paired(&self, x: &str, y: &str) -> Option<(Vec<f64>, Vec<f64>)> {
        if x == y {
            return None;
        }
        let cx = self.column(x)?;
        let cy = self.column(y)?;
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for (a, b) in cx.cells().iter().zip(cy.cells()) {
            if let (Some(a), Some(b)) = (a.as_f64(), b.as_f64()) {
                xs.push(a);
                ys.push(b);
            }
        }
        Some((xs, ys))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{format::FormatOptions, raw::RawTable};

    fn table(text: &str) -> NumericTable {
        let options = FormatOptions::default();
        RawTable::parse(text, &options).unwrap().coerce(&options)
    }

    #[test]
    fn test_select_unknown_column() {
        let numeric = table("a;b\n1;2\n");
        assert_eq!(
            numeric.select(&["a", "nope"]).unwrap_err(),
            SelectError::UnknownColumn {
                name: "nope".to_owned()
            }
        );
    }

    #[test]
    fn test_select_insufficient_columns() {
        let numeric = table("a;label\n1;foo\n2;bar\n");
        assert_eq!(
            numeric.select(&["a", "label"]).unwrap_err(),
            SelectError::InsufficientColumns {
                eligible: 1,
                min: 2
            }
        );
    }

    #[test]
    fn test_select_never_silently_empty() {
        let numeric = table("label;tag\nfoo;x\nbar;y\n");
        assert!(matches!(
            numeric.select(&["label", "tag"]),
            Err(SelectError::InsufficientColumns { eligible: 0, .. })
        ));
    }

    #[test]
    fn test_select_keeps_table_order() {
        let numeric = table("a;b;c\n1;2;3\n");
        let selection = numeric.select(&["c", "a", "b"]).unwrap();
        let names = selection
            .columns()
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_paired_inner_join() {
        // A = [1, missing, 3], B = [missing, 2, 4]: only (3, 4) survives
        let numeric = table("a;b\n1;x\nx;2\n3;4\n");
        let selection = numeric.select(&["a", "b"]).unwrap();
        let (xs, ys) = selection.paired("a", "b").unwrap();
        assert_eq!(xs, vec![3.0]);
        assert_eq!(ys, vec![4.0]);
    }

    #[test]
    fn test_paired_requires_distinct_columns() {
        let numeric = table("a;b\n1;2\n3;4\n");
        let selection = numeric.select(&["a", "b"]).unwrap();
        assert!(selection.paired("a", "a").is_none());
    }
}
