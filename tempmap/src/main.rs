// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the monthly global temperature heat map to HTML or SVG.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use tempmap::config::{DEFAULT_DATA_URL, DEFAULT_VIEWPORT_WIDTH, parse_viewport_width};
use tempmap::{
    Chart, ChartDimensions, DataLoader, DataSource, LoaderConfig, OutputFormat, RenderConfig,
    export, html,
};

#[derive(Parser, Debug)]
#[command(name = "tempmap")]
#[command(about = "Render a heat map of monthly global temperature variance")]
struct Args {
    /// Dataset URL
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    url: String,

    /// Read the dataset from a local JSON file instead of fetching it
    #[arg(long, conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Viewport width the canvas is sized against
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH, value_parser = parse_viewport_width)]
    viewport_width: f64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn loader_config(&self) -> LoaderConfig {
        let source = match &self.input {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Url(self.url.clone()),
        };
        LoaderConfig {
            source,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            viewport_width: self.viewport_width,
            format: self.format,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let loader_config = args.loader_config();
    let render_config = args.render_config();
    info!(source = ?loader_config.source, "Starting tempmap");

    match load_and_render(loader_config, &render_config).await {
        Ok(chart) => {
            info!(
                cells = chart.cells().len(),
                width = chart.dimensions.width,
                format = ?render_config.format,
                "Rendered chart"
            );
            write_output(args.output.as_deref(), &export(&chart, render_config.format))?;
            Ok(())
        }
        Err(e) => {
            error!(kind = e.kind(), "Failed to render chart: {e}");
            if render_config.format == OutputFormat::Html {
                write_output(args.output.as_deref(), &html::error_page(&e))?;
            }
            Err(e).context("chart could not be rendered")
        }
    }
}

async fn load_and_render(
    loader_config: LoaderConfig,
    render_config: &RenderConfig,
) -> tempmap::Result<Chart> {
    let dataset = DataLoader::new(loader_config)?.load().await?;
    let dims = ChartDimensions::for_viewport(render_config.viewport_width);
    Chart::render(&dataset, dims)
}

fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
    }
}
