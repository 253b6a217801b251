// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loader and render configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

/// Public feed the chart is drawn from.
pub const DEFAULT_DATA_URL: &str = "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Viewport width assumed when none is configured.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

/// Parses a viewport width. Only finite, positive widths are accepted.
pub fn parse_viewport_width(s: &str) -> Result<f64, String> {
    let width: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(format!("`{s}` is not a positive, finite width"))
    }
}

/// Where the dataset comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Fetch over HTTP.
    Url(String),
    /// Read a local JSON file.
    File(PathBuf),
}

/// Dataset loading configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Dataset location.
    pub source: DataSource,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            source: DataSource::Url(DEFAULT_DATA_URL.to_owned()),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Output document format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A standalone HTML page with title, chart, tooltip, and hover wiring.
    #[default]
    Html,
    /// A bare SVG document of the drawing surface.
    Svg,
}

/// Rendering configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Viewport width the canvas is sized against.
    pub viewport_width: f64,
    /// Output format.
    pub format: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            format: OutputFormat::Html,
        }
    }
}
