//! Report: the structured result of a run and the [`Normalizer`] that
//! builds it one comparison file at a time.
//!
//! The normalizer holds the baseline in memory and turns each comparison log
//! into a named [`Series`]. It never prints; callers render each series as it
//! is added (see [`crate::summary`]) and hand the finished [`Report`] to a
//! chart renderer.

use std::path::Path;

use serde::Serialize;

use crate::error::{NormError, Result};
use crate::normalize::{check_nonzero, normalize, scale_to};
use crate::parse::{load_baseline, parse_baseline_log, parse_comparison_log, ParseOptions};
use crate::types::{Label, Mode, NameSource};

/// Name given to the baseline's own series in scaling mode.
pub const BASE_SERIES_NAME: &str = "Base";

/// Everything that decides how a run reads and normalizes its logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    pub mode: Mode,
    pub parse: ParseOptions,
    pub name_source: NameSource,
}

/// One normalized log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    /// Normalized values, one per baseline row.
    pub values: Vec<f64>,
    /// Present in relative mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometric_mean: Option<f64>,
}

impl Series {
    /// Values in label-axis order: the geometric mean, when present, is the
    /// last point so it sits under the `G-Mean` label.
    pub fn points(&self) -> Vec<f64> {
        let mut out = self.values.clone();
        out.extend(self.geometric_mean);
        out
    }
}

/// The result of a whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub mode: Mode,
    /// Label axis shared by every series.
    pub labels: Vec<Label>,
    pub series: Vec<Series>,
}

impl Report {
    /// Serialise as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds a [`Report`] against a fixed baseline.
#[derive(Debug)]
pub struct Normalizer {
    opts: RunOptions,
    baseline: Vec<f64>,
    report: Report,
}

impl Normalizer {
    /// Load the baseline log.
    ///
    /// In scaling mode the baseline is itself normalized against its first
    /// value and becomes the first series of the report; that first value
    /// must not be zero.
    pub fn from_baseline(path: impl AsRef<Path>, opts: RunOptions) -> Result<Self> {
        let path = path.as_ref();
        match opts.mode {
            Mode::Relative => {
                let base = parse_baseline_log(path, &opts.parse)?;
                Ok(Self {
                    opts,
                    baseline: base.values,
                    report: Report { mode: opts.mode, labels: base.labels, series: Vec::new() },
                })
            }
            Mode::Scaling => {
                let log = load_baseline(path, &opts.parse)?;
                let baseline = log.values();
                check_nonzero(&baseline[..1])?;
                let base = Series {
                    name: BASE_SERIES_NAME.to_string(),
                    values: scale_to(&baseline, baseline[0]),
                    geometric_mean: None,
                };
                Ok(Self {
                    opts,
                    baseline,
                    report: Report { mode: opts.mode, labels: log.labels(), series: vec![base] },
                })
            }
        }
    }

    /// Number of rows every comparison log must have.
    pub fn baseline_len(&self) -> usize {
        self.baseline.len()
    }

    /// Series already in the report (in scaling mode this starts with the
    /// baseline's own series).
    pub fn series(&self) -> &[Series] {
        &self.report.series
    }

    /// Read and normalize one comparison log and add it to the report.
    pub fn add_comparison(&mut self, path: impl AsRef<Path>) -> Result<&Series> {
        let path = path.as_ref();
        let values = parse_comparison_log(path, &self.opts.parse)?;
        let name = series_name(path, self.opts.name_source);
        let series = self.normalize_series(name, &values)?;

        tracing::debug!(series = %series.name, points = series.values.len(), "normalized log");
        self.report.series.push(series);
        Ok(&self.report.series[self.report.series.len() - 1])
    }

    /// Normalize already-parsed values under `name`.
    pub fn normalize_series(&self, name: String, values: &[f64]) -> Result<Series> {
        match self.opts.mode {
            Mode::Relative => {
                let n = normalize(values, &self.baseline)?;
                Ok(Series { name, values: n.values, geometric_mean: Some(n.geometric_mean) })
            }
            Mode::Scaling => {
                if values.len() != self.baseline.len() {
                    return Err(NormError::LengthMismatch {
                        expected: self.baseline.len(),
                        actual: values.len(),
                    });
                }
                Ok(Series { name, values: scale_to(values, self.baseline[0]), geometric_mean: None })
            }
        }
    }

    pub fn finish(self) -> Report {
        self.report
    }
}

/// Derive a series name from a log path.
///
/// Falls back to the file name and then to the path as given when the
/// requested component is missing (`time.log` has no parent directory name).
pub fn series_name(path: &Path, source: NameSource) -> String {
    let preferred = match source {
        NameSource::ParentDir => path.parent().and_then(Path::file_name),
        NameSource::FileStem => path.file_stem(),
    };
    preferred
        .filter(|s| !s.is_empty())
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Layout, GMEAN_LABEL};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::path::PathBuf;

    fn write(dir: &Path, rel: &str, body: &str) -> PathBuf {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, body).unwrap();
        path
    }

    #[rstest]
    #[case::parent_dir("runs/lto/time.log", NameSource::ParentDir, "lto")]
    #[case::file_stem("runs/lto.log", NameSource::FileStem, "lto")]
    #[case::no_parent("time.log", NameSource::ParentDir, "time.log")]
    #[case::current_dir("./time.log", NameSource::ParentDir, "time.log")]
    #[case::no_extension("runs/pgo", NameSource::FileStem, "pgo")]
    fn names(#[case] path: &str, #[case] source: NameSource, #[case] expected: &str) {
        assert_eq!(series_name(Path::new(path), source), expected);
    }

    #[test]
    fn relative_run() {
        let dir = tempfile::tempdir().unwrap();
        let base = write(dir.path(), "base/time.log", "10.0\ta\n20.0\tb\n");
        let fast = write(dir.path(), "fast/time.log", "5.0\ta\n10.0\tb\n");

        let mut norm = Normalizer::from_baseline(&base, RunOptions::default()).unwrap();
        assert_eq!(norm.baseline_len(), 2);
        let series = norm.add_comparison(&fast).unwrap().clone();
        assert_eq!(series.name, "fast");
        assert_eq!(series.values, vec![0.5, 0.5]);

        let report = norm.finish();
        assert_eq!(report.labels.last(), Some(&Label::from(GMEAN_LABEL)));
        assert_eq!(report.series.len(), 1);
        assert_eq!(report.series[0].points().len(), report.labels.len());
    }

    #[test]
    fn relative_length_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let base = write(dir.path(), "base/time.log", "1.0\ta\n1.0\tb\n1.0\tc\n");
        let short = write(dir.path(), "short/time.log", "1.0\ta\n1.0\tb\n");

        let mut norm = Normalizer::from_baseline(&base, RunOptions::default()).unwrap();
        let err = norm.add_comparison(&short).unwrap_err();
        assert!(matches!(err, NormError::LengthMismatch { expected: 3, actual: 2 }));
    }

    #[test]
    fn scaling_run() {
        let dir = tempfile::tempdir().unwrap();
        let base = write(dir.path(), "base.log", "0\t10.0\n2\t15.0\n4\t20.0\n");
        let cfs = write(dir.path(), "cfs.log", "0\t12.0\n2\t18.0\n4\t30.0\n");

        let opts = RunOptions {
            mode: Mode::Scaling,
            parse: ParseOptions { layout: Layout::WorkloadValue, ..Default::default() },
            name_source: NameSource::FileStem,
        };
        let mut norm = Normalizer::from_baseline(&base, opts).unwrap();
        norm.add_comparison(&cfs).unwrap();
        let report = norm.finish();

        assert_eq!(report.labels, vec![Label::Workload(0), Label::Workload(2), Label::Workload(4)]);
        assert_eq!(report.series[0].name, BASE_SERIES_NAME);
        assert_eq!(report.series[0].values, vec![1.0, 1.5, 2.0]);
        assert_eq!(report.series[1].name, "cfs");
        assert_eq!(report.series[1].values, vec![1.2, 1.8, 3.0]);
        assert_eq!(report.series[1].geometric_mean, None);
    }

    #[test]
    fn relative_zero_baseline() {
        let dir = tempfile::tempdir().unwrap();
        let base = write(dir.path(), "base/time.log", "10.0\ta\n0.0\tb\n");
        let run = write(dir.path(), "run/time.log", "5.0\ta\n1.0\tb\n");

        let mut norm = Normalizer::from_baseline(&base, RunOptions::default()).unwrap();
        let err = norm.add_comparison(&run).unwrap_err();
        assert!(matches!(err, NormError::ZeroBaseline { row: 2 }), "{err}");
        assert!(norm.series().is_empty());
    }

    #[test]
    fn scaling_zero_first_value() {
        let dir = tempfile::tempdir().unwrap();
        let base = write(dir.path(), "base.log", "0\t0.0\n2\t15.0\n");
        let opts = RunOptions {
            mode: Mode::Scaling,
            parse: ParseOptions { layout: Layout::WorkloadValue, ..Default::default() },
            name_source: NameSource::FileStem,
        };

        let err = Normalizer::from_baseline(&base, opts).unwrap_err();
        assert!(matches!(err, NormError::ZeroBaseline { row: 1 }), "{err}");
    }

    #[test]
    fn scaling_length_mismatch() {
        let opts = RunOptions {
            mode: Mode::Scaling,
            parse: ParseOptions { layout: Layout::WorkloadValue, ..Default::default() },
            name_source: NameSource::FileStem,
        };
        let dir = tempfile::tempdir().unwrap();
        let base = write(dir.path(), "base.log", "0\t10.0\n2\t15.0\n");
        let norm = Normalizer::from_baseline(&base, opts).unwrap();
        let err = norm.normalize_series("x".to_string(), &[1.0]).unwrap_err();
        assert!(matches!(err, NormError::LengthMismatch { expected: 2, actual: 1 }));
    }
}
