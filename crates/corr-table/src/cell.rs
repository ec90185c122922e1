//! Per-cell coercion result.

use serde::{Deserialize, Serialize};

use crate::format::FormatOptions;

/// A coerced cell: either a parsed number or an explicit missing marker.
///
/// Coercion never fails a whole column; a cell that cannot be read as a
/// number degrades to [`Cell::Missing`] so downstream handling stays
/// exhaustive instead of exception-driven.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Numeric(f64),
    Missing,
}

impl Cell {
    /// Parses one raw cell under the given format options.
    ///
    /// The cell is trimmed and its decimal marker normalized to `.` before
    /// parsing. Anything that still fails to parse (including an empty
    /// cell) becomes [`Cell::Missing`].
    ///
    /// # Examples
    ///
    /// ```
    /// use corr_table::{cell::Cell, format::FormatOptions};
    ///
    /// let options = FormatOptions::default();
    /// assert_eq!(Cell::coerce(" 3,5 ", &options), Cell::Numeric(3.5));
    /// assert_eq!(Cell::coerce("abc", &options), Cell::Missing);
    /// assert_eq!(Cell::coerce("", &options), Cell::Missing);
    /// ```
    #[must_use]
    pub fn coerce(raw: &str, options: &FormatOptions) -> Self {
        let normalized = options.normalize_decimal(raw.trim());
        match normalized.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Numeric(value),
            _ => Self::Missing,
        }
    }

    /// The numeric value, if present.
    #[must_use]
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Numeric(value) => Some(value),
            Self::Missing => None,
        }
    }

    #[must_use]
    pub fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_integer_and_decimal() {
        let options = FormatOptions::default();
        assert_eq!(Cell::coerce("42", &options), Cell::Numeric(42.0));
        assert_eq!(Cell::coerce("-1,25", &options), Cell::Numeric(-1.25));
    }

    #[test]
    fn test_coerce_rejects_non_finite() {
        let options = FormatOptions::default();
        assert_eq!(Cell::coerce("inf", &options), Cell::Missing);
        assert_eq!(Cell::coerce("NaN", &options), Cell::Missing);
    }

    #[test]
    fn test_coerce_is_idempotent() {
        // Re-coercing the canonical rendering of a coerced value changes nothing
        let options = FormatOptions::default();
        for raw in ["1,5", "-2", "0,001", "1e3"] {
            let first = Cell::coerce(raw, &options);
            let value = first.as_f64().unwrap();
            let second = Cell::coerce(&value.to_string(), &options);
            assert_eq!(first, second);
        }
    }
}
