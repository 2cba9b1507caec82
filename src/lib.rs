//! benchnorm: normalize benchmark timing logs against a baseline.
//!
//! This crate is the command-line shell around `benchnorm-core` (parsing,
//! normalization, summaries) and `benchnorm-chart` (SVG output). It owns the
//! argument surface and the order of a run; [`run`] returns every failure to
//! `main`, which is the only place the process exits.
//!
//! # Flow
//!
//! ```text
//! baseline ──► Normalizer ◄── comparison logs (one at a time)
//!                  │
//!                  ├──► summary line per series (stdout)
//!                  └──► Report ──► SvgRenderer
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use benchnorm_chart::{Renderer, SvgRenderer};
use benchnorm_core::config::{Config, SummaryFormat};
use benchnorm_core::summary::summary_line;
use benchnorm_core::{Layout, Mode, NameSource, Normalizer};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "benchnorm",
    version,
    about = "Normalize benchmark timing logs against a baseline and chart them"
)]
pub struct Cli {
    /// Baseline log every other log is normalized against.
    pub baseline: PathBuf,

    /// Logs to compare against the baseline.
    #[arg(required = true)]
    pub comparisons: Vec<PathBuf>,

    /// Extra TOML config layered over the defaults and the user config.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Normalization mode.
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Column layout of the logs (defaults to the mode's layout).
    #[arg(long, value_enum)]
    pub layout: Option<Layout>,

    /// Where series names come from.
    #[arg(long, value_enum)]
    pub name_from: Option<NameSource>,

    /// Treat `#` lines as data instead of comments.
    #[arg(long)]
    pub keep_comments: bool,

    /// Chart output path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not write a chart.
    #[arg(long)]
    pub no_chart: bool,

    /// Summary format on stdout.
    #[arg(short, long, value_enum)]
    pub format: Option<SummaryFormat>,

    /// Debug-level logs on stderr (RUST_LOG takes precedence).
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.input.mode = mode;
        }
        if let Some(layout) = self.layout {
            config.input.layout = Some(layout);
        }
        if let Some(name) = self.name_from {
            config.input.name_source = name;
        }
        if self.keep_comments {
            config.input.skip_comments = false;
        }
        if let Some(output) = &self.output {
            config.chart.output = output.clone();
        }
        if self.no_chart {
            config.chart.enabled = false;
        }
        if let Some(format) = self.format {
            config.summary.format = format;
        }
    }
}

/// Run one normalization: load config, normalize every comparison log,
/// print the summary and render the chart.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    cli.apply(&mut config);
    let opts = config.run_options();
    tracing::debug!(mode = %opts.mode, layout = ?opts.parse.layout, "starting run");

    let mut normalizer = Normalizer::from_baseline(&cli.baseline, opts)
        .with_context(|| format!("loading baseline {}", cli.baseline.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let text = config.summary.format == SummaryFormat::Text;
    let width = config.summary.name_width;

    if text {
        // scaling mode starts with the baseline's own series
        for series in normalizer.series() {
            writeln!(out, "{}", summary_line(series, width))?;
        }
    }

    for path in &cli.comparisons {
        let series = normalizer
            .add_comparison(path)
            .with_context(|| format!("normalizing {}", path.display()))?;
        if text {
            writeln!(out, "{}", summary_line(series, width))?;
        }
    }

    let report = normalizer.finish();
    if config.summary.format == SummaryFormat::Json {
        writeln!(out, "{}", report.to_json()?)?;
    }
    out.flush()?;

    if config.chart.enabled {
        let chart = &config.chart;
        SvgRenderer::new(&chart.output, (chart.width, chart.height))
            .render(&report)
            .with_context(|| format!("writing chart {}", chart.output.display()))?;
    }

    Ok(())
}
