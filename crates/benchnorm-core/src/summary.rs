//! Fixed-width textual summary of a normalized series.
//!
//! ```text
//!         lto |   0.50   0.50; GMean: 0.50
//! ```

use std::fmt::Write;

use crate::report::Series;

/// Default width of the right-justified series name column.
pub const NAME_WIDTH: usize = 11;

/// Each value as ` %6.2f`, followed by `; GMean: %.2f` when a mean is given.
pub fn format_values(values: &[f64], geometric_mean: Option<f64>) -> String {
    let mut out = String::with_capacity(values.len() * 7 + 16);
    for v in values {
        let _ = write!(out, " {v:6.2}");
    }
    if let Some(gm) = geometric_mean {
        let _ = write!(out, "; GMean: {gm:.2}");
    }
    out
}

/// A full summary line: right-justified name, `|`, then [`format_values`].
/// Names longer than `name_width` are not truncated.
pub fn summary_line(series: &Series, name_width: usize) -> String {
    format!(
        "{:>width$} |{}",
        series.name,
        format_values(&series.values, series.geometric_mean),
        width = name_width
    )
}
