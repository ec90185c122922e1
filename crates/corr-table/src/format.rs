//! Input format parameters.
//!
//! The target locale writes decimals with a comma, which would collide with
//! a comma field delimiter; hence the `;` field delimiter default. Both
//! markers are explicit request parameters, never process-global locale
//! state, so parsing stays deterministic and testable.

use serde::{Deserialize, Serialize};

/// Delimiter and decimal-marker configuration for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Field delimiter between cells.
    pub delimiter: u8,
    /// Decimal marker used inside numeric cells.
    pub decimal: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            decimal: ',',
        }
    }
}

impl FormatOptions {
    /// Rewrites the configured decimal marker to `.` so the cell can be
    /// handed to the standard float parser.
    #[must_use]
    pub fn normalize_decimal(&self, cell: &str) -> String {
        if self.decimal == '.' {
            cell.to_owned()
        } else {
            cell.replace(self.decimal, ".")
        }
    }
}
