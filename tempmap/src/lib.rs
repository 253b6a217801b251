// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A heat map of monthly global temperature variance.
//!
//! The pipeline runs once, in order:
//! - [`loader`] fetches (or reads) and parses the dataset,
//! - [`dimensions`] sizes the canvas from the viewport width,
//! - [`scales`] validates the records and derives the month, year, and color scales,
//! - [`scaffold`] builds the empty document with named slots,
//! - [`marks`] binds one cell per record,
//! - [`peripherals`] draws axes, heading, and legend.
//!
//! The result is a [`Chart`], which owns the hover/tooltip state and can be exported with
//! [`svg`] or [`html`].

pub mod config;
pub mod dataset;
pub mod dimensions;
pub mod error;
pub mod html;
pub mod interaction;
pub mod loader;
pub mod marks;
pub mod peripherals;
pub mod render;
pub mod scaffold;
pub mod scales;
pub mod svg;
pub mod theme;

pub use config::{DataSource, LoaderConfig, OutputFormat, RenderConfig};
pub use dataset::{Dataset, TemperatureRecord, Tenths};
pub use dimensions::ChartDimensions;
pub use error::{ChartError, Result};
pub use interaction::{HoverTransition, PointerEvent, Tooltip};
pub use loader::{DataLoader, load_file};
pub use marks::CellDatum;
pub use render::Chart;
pub use scaffold::{ChartDocument, Slot};
pub use scales::HeatmapScales;
pub use theme::Theme;

/// Renders `chart` in the requested output format.
pub fn export(chart: &Chart, format: OutputFormat) -> String {
    match format {
        OutputFormat::Html => html::chart_page(chart),
        OutputFormat::Svg => svg::to_svg_document(&chart.document.surface),
    }
}
