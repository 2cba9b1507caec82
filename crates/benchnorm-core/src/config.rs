//! Configuration types for benchnorm.
//!
//! [`Config::load`] layers the built-in defaults, the user's
//! `~/.config/benchnorm/config.toml` (if present) and an optional explicit
//! file. [`Config::defaults`] returns the built-in defaults without touching
//! the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::parse::ParseOptions;
use crate::report::RunOptions;
use crate::summary::NAME_WIDTH;
use crate::types::{Layout, Mode, NameSource};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[input]
skip_comments = true
mode          = "relative"
name_source   = "parent-dir"

[summary]
name_width = 11
format     = "text"

[chart]
enabled = true
output  = "plot.svg"
width   = 1600
height  = 500
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

/// `[input]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_skip_comments")]
    pub skip_comments: bool,
    #[serde(default)]
    pub mode: Mode,
    /// Column layout. When unset, follows [`Mode::default_layout`].
    #[serde(default)]
    pub layout: Option<Layout>,
    #[serde(default)]
    pub name_source: NameSource,
}

fn default_skip_comments() -> bool { true }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            skip_comments: default_skip_comments(),
            mode: Mode::default(),
            layout: None,
            name_source: NameSource::default(),
        }
    }
}

/// Format of the per-series summary written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

/// `[summary]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    #[serde(default = "default_name_width")]
    pub name_width: usize,
    #[serde(default)]
    pub format: SummaryFormat,
}

fn default_name_width() -> usize { NAME_WIDTH }

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { name_width: default_name_width(), format: SummaryFormat::default() }
    }
}

/// `[chart]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_chart_enabled")]
    pub enabled: bool,
    #[serde(default = "default_chart_output")]
    pub output: PathBuf,
    #[serde(default = "default_chart_width")]
    pub width: u32,
    #[serde(default = "default_chart_height")]
    pub height: u32,
}

fn default_chart_enabled() -> bool { true }
fn default_chart_output() -> PathBuf { PathBuf::from("plot.svg") }
fn default_chart_width() -> u32 { 1600 }
fn default_chart_height() -> u32 { 500 }

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            enabled: default_chart_enabled(),
            output: default_chart_output(),
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults, then the user config file if it exists,
    /// then `extra` (which must exist when given).
    pub fn load(extra: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(config_path().as_path())
                    .format(config::FileFormat::Toml)
                    .required(false),
            );

        if let Some(path) = extra {
            tracing::debug!(path = %path.display(), "loading extra config");
            builder = builder
                .add_source(config::File::from(path).format(config::FileFormat::Toml).required(true));
        }

        builder.build()?.try_deserialize().map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Resolve the `[input]` section into the options a run needs. An unset
    /// layout follows the mode.
    pub fn run_options(&self) -> RunOptions {
        let input = &self.input;
        RunOptions {
            mode: input.mode,
            parse: ParseOptions {
                skip_comments: input.skip_comments,
                layout: input.layout.unwrap_or_else(|| input.mode.default_layout()),
            },
            name_source: input.name_source,
        }
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("benchnorm")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
