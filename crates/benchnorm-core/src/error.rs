//! Error taxonomy for benchnorm-core.
//!
//! Every variant is terminal: the core returns it, the binary reports it and
//! exits. Input problems (unreadable, malformed, empty or misaligned logs)
//! and the math problem of a geometric mean with nothing to average are kept
//! apart so callers can tell them apart with [`NormError::is_input_error`].

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout benchnorm-core.
pub type Result<T> = std::result::Result<T, NormError>;

#[derive(Debug, Error)]
pub enum NormError {
    /// The log file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not match the configured layout.
    #[error("{}:{line}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        reason: String,
    },

    /// The baseline log contained no data rows.
    #[error("no bench found in {}", path.display())]
    NoBench { path: PathBuf },

    /// A comparison log does not have one row per baseline row.
    #[error("length mismatch: baseline has {expected} entries, log has {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A baseline value that would be divided by is zero.
    #[error("baseline value at row {row} is zero")]
    ZeroBaseline {
        /// 1-based data row of the baseline.
        row: usize,
    },

    /// No normalized value was strictly positive, so the geometric mean has
    /// no terms.
    #[error("geometric mean undefined: no strictly positive normalized values")]
    NoPositiveValues,
}

impl NormError {
    /// `true` for problems with the input files, `false` for math errors.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, NormError::NoPositiveValues)
    }
}
