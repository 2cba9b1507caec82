//! Test builders: log files on disk.
//!
//! These builders are designed for readability in test bodies, not for
//! production use. They panic on I/O failure rather than returning `Result`.

use std::path::{Path, PathBuf};

/// A temporary directory of log files, removed on drop.
///
/// # Example
///
/// ```rust
/// let dir = LogDir::new();
/// let base = dir.log("base/time.log", BASE_TWO);
/// let lto = dir.rows("lto/time.log", &[(5.0, "a"), (10.0, "b")]);
/// ```
pub struct LogDir {
    dir: tempfile::TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `body` to `rel` (parent directories are created).
    pub fn log(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create log dir");
        }
        std::fs::write(&path, body).expect("write log");
        path
    }

    /// Write `<value>\t<label>` rows to `rel`.
    pub fn rows(&self, rel: &str, rows: &[(f64, &str)]) -> PathBuf {
        self.log(rel, &render_rows(rows))
    }
}

/// Render `(value, label)` rows in the `value-label` layout.
pub fn render_rows(rows: &[(f64, &str)]) -> String {
    rows.iter().map(|(v, l)| format!("{v}\t{l}\n")).collect()
}

/// Render plain values with generated labels `b0`, `b1`, …
pub fn render_values(values: &[f64]) -> String {
    values.iter().enumerate().map(|(i, v)| format!("{v}\tb{i}\n")).collect()
}
