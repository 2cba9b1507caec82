//! benchnorm-core: benchmark log normalization.
//!
//! Reads tab-separated benchmark logs, normalizes comparison runs against a
//! baseline run and summarises each with a geometric mean.
//!
//! # Pipeline
//!
//! ```text
//! parse ──► normalize ──► Report ──► summary (stdout)
//!                            │
//!                            └──► chart renderer
//! ```
//!
//! Nothing in this crate prints or exits; every failure is a [`NormError`]
//! returned to the caller.

pub mod config;
pub mod error;
pub mod normalize;
pub mod parse;
pub mod report;
pub mod summary;
pub mod types;

pub use error::{NormError, Result};
pub use normalize::{geometric_mean, normalize, Normalized};
pub use parse::{parse_baseline_log, parse_comparison_log, BaselineLog, ParseOptions};
pub use report::{Normalizer, Report, RunOptions, Series};
pub use types::{BenchmarkLog, Label, Layout, LogEntry, Mode, NameSource, GMEAN_LABEL};
