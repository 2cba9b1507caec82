//! Parser: reads tab-separated benchmark logs into [`BenchmarkLog`] values.
//!
//! Each data line holds exactly two tab-separated fields whose order is given
//! by [`Layout`]. Lines starting with `#` are comments when
//! [`ParseOptions::skip_comments`] is set; blank lines are always ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{NormError, Result};
use crate::types::{BenchmarkLog, Label, Layout, LogEntry, GMEAN_LABEL};

/// Options controlling how a log file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Skip lines whose first character is `#`.
    pub skip_comments: bool,
    pub layout: Layout,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { skip_comments: true, layout: Layout::ValueLabel }
    }
}

/// A parsed baseline: the label axis and the reference values.
///
/// `labels` has one more element than `values`; the extra trailing label is
/// [`GMEAN_LABEL`].
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineLog {
    pub labels: Vec<Label>,
    pub values: Vec<f64>,
}

/// Read a log from any buffered reader. `path` is only used in error messages.
pub fn read_log<R: BufRead>(reader: R, path: &Path, opts: &ParseOptions) -> Result<BenchmarkLog> {
    let mut entries = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| NormError::Io { path: path.to_path_buf(), source })?;

        if opts.skip_comments && line.starts_with('#') {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let entry = parse_line(&line, opts.layout).map_err(|reason| NormError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            reason,
        })?;
        entries.push(entry);
    }

    Ok(BenchmarkLog { entries })
}

/// Open and read a log file.
pub fn parse_log(path: impl AsRef<Path>, opts: &ParseOptions) -> Result<BenchmarkLog> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| NormError::Io { path: path.to_path_buf(), source })?;
    let log = read_log(BufReader::new(file), path, opts)?;
    tracing::debug!(path = %path.display(), entries = log.len(), "parsed log");
    Ok(log)
}

/// Read a baseline log, failing with [`NormError::NoBench`] when it has no
/// data rows.
pub fn load_baseline(path: impl AsRef<Path>, opts: &ParseOptions) -> Result<BenchmarkLog> {
    let path = path.as_ref();
    let log = parse_log(path, opts)?;
    if log.is_empty() {
        return Err(NormError::NoBench { path: PathBuf::from(path) });
    }
    Ok(log)
}

/// Read a baseline log and split it into labels (with the trailing
/// `G-Mean` label) and values.
pub fn parse_baseline_log(path: impl AsRef<Path>, opts: &ParseOptions) -> Result<BaselineLog> {
    let log = load_baseline(path, opts)?;
    let mut labels = log.labels();
    labels.push(Label::Name(GMEAN_LABEL.to_string()));
    Ok(BaselineLog { labels, values: log.values() })
}

/// Read a comparison log, keeping only the numeric column.
pub fn parse_comparison_log(path: impl AsRef<Path>, opts: &ParseOptions) -> Result<Vec<f64>> {
    Ok(parse_log(path, opts)?.values())
}

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

fn parse_line(line: &str, layout: Layout) -> std::result::Result<LogEntry, String> {
    let fields: Vec<&str> = line.split('\t').collect();
    let &[first, second] = fields.as_slice() else {
        return Err(format!("expected 2 tab-separated fields, found {}", fields.len()));
    };

    match layout {
        Layout::ValueLabel => Ok(LogEntry {
            value: parse_value(first)?,
            label: Label::Name(second.trim().to_string()),
        }),
        Layout::WorkloadValue => {
            let count = first.trim();
            let workload = count
                .parse::<u64>()
                .map_err(|_| format!("invalid workload count {count:?}"))?;
            Ok(LogEntry { value: parse_value(second)?, label: Label::Workload(workload) })
        }
    }
}

fn parse_value(field: &str) -> std::result::Result<f64, String> {
    let field = field.trim();
    field.parse::<f64>().map_err(|_| format!("invalid value {field:?}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
