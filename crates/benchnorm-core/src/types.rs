//! Core types for benchnorm-core.
//!
//! This module defines the data structures shared by every stage of a run:
//! the parsed [`LogEntry`] and its [`Label`], the [`BenchmarkLog`] a file
//! parses into, and the [`Layout`] / [`Mode`] / [`NameSource`] switches that
//! select between the relative and the workload-scaling variants.

use serde::{Deserialize, Serialize};

/// Label appended after the last benchmark so it lines up with the geometric
/// mean appended to every normalized series.
pub const GMEAN_LABEL: &str = "G-Mean";

/// One record of a benchmark log: a measurement and what it measured.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Measured value (usually wall-clock time).
    pub value: f64,
    /// Benchmark name or workload count, depending on the file layout.
    pub label: Label,
}

/// The non-numeric column of a log line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Label {
    /// Benchmark name (`value-label` layout).
    Name(String),
    /// Number of concurrent workloads (`workload-value` layout).
    Workload(u64),
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Name(name) => write!(f, "{name}"),
            Label::Workload(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label::Name(name.to_string())
    }
}

impl From<u64> for Label {
    fn from(n: u64) -> Self {
        Label::Workload(n)
    }
}

/// An ordered benchmark log. Position is the join key between a baseline and
/// the logs normalized against it; labels are never matched by value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkLog {
    pub entries: Vec<LogEntry>,
}

impl BenchmarkLog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The numeric column, in file order.
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }

    /// The label column, in file order.
    pub fn labels(&self) -> Vec<Label> {
        self.entries.iter().map(|e| e.label.clone()).collect()
    }
}

impl FromIterator<LogEntry> for BenchmarkLog {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Column order of a log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// `<float_time>\t<bench_name>`
    #[default]
    ValueLabel,
    /// `<int_workload_count>\t<float_time>`
    WorkloadValue,
}

/// How comparison logs are normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Position-by-position ratio against the baseline, with a geometric mean.
    #[default]
    Relative,
    /// Every value divided by the baseline's first measurement.
    Scaling,
}

impl Mode {
    /// The column layout this mode reads unless told otherwise.
    pub fn default_layout(self) -> Layout {
        match self {
            Mode::Relative => Layout::ValueLabel,
            Mode::Scaling => Layout::WorkloadValue,
        }
    }
}

/// Which path component names a comparison series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum NameSource {
    /// Name of the directory holding the log (`runs/lto/time.log` → `lto`).
    #[default]
    ParentDir,
    /// File name without extension (`runs/lto.log` → `lto`).
    FileStem,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Relative => write!(f, "relative"),
            Mode::Scaling => write!(f, "scaling"),
        }
    }
}
