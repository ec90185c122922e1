//! The downloadable example-file artifact.
//!
//! Emits a small two-column dataset in the exact input format the pipeline
//! expects (`;` delimiter, decimal comma), so users have a working
//! reference for their own files.

use corr_table::format::FormatOptions;

/// Renders the example dataset in the given format.
///
/// # Examples
///
/// ```
/// use corr_analysis::template::example_csv;
/// use corr_table::format::FormatOptions;
///
/// let text = example_csv(&FormatOptions::default());
/// assert!(text.starts_with("height_cm;weight_kg\n"));
/// ```
#[must_use]
pub fn example_csv(options: &FormatOptions) -> String {
    const ROWS: [(f64, f64); 8] = [
        (152.4, 48.2),
        (158.0, 52.9),
        (163.5, 58.1),
        (167.2, 61.5),
        (171.8, 66.3),
        (175.0, 70.8),
        (180.3, 76.4),
        (185.1, 82.0),
    ];

    let delimiter = char::from(options.delimiter);
    let mut out = format!("height_cm{delimiter}weight_kg\n");
    for (height, weight) in ROWS {
        let height = format_value(height, options.decimal);
        let weight = format_value(weight, options.decimal);
        out.push_str(&format!("{height}{delimiter}{weight}\n"));
    }
    out
}

fn format_value(value: f64, decimal: char) -> String {
    format!("{value:.1}").replace('.', &decimal.to_string())
}
