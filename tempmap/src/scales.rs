// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The heat map's scales: months down, years across, temperature to color.

use peniko::Color;
use tempmap_charts::{ScaleOrdinalBand, ScaleSequential};

use crate::dataset::{Dataset, Tenths};
use crate::dimensions::ChartDimensions;
use crate::error::{ChartError, Result};

/// Band padding of the month scale, as a fraction of the step.
pub const MONTH_PADDING: f64 = 0.015;
/// Band padding of the year scale, as a fraction of the step.
pub const YEAR_PADDING: f64 = 0.15;
/// Year ticks are drawn at multiples of this.
pub const YEAR_TICK_INTERVAL: i32 = 10;

/// Scales derived from a dataset and the chart dimensions.
#[derive(Clone, Debug)]
pub struct HeatmapScales {
    /// Month index (`0..=11`) to vertical band. The range runs from the plot bottom to its
    /// top, so January is the lowest row.
    pub month: ScaleOrdinalBand<u8>,
    /// Year to horizontal band, over distinct years in first-occurrence order.
    pub year: ScaleOrdinalBand<i32>,
    /// Rounded temperature to color, over the observed extent.
    pub color: ScaleSequential,
    /// Years that get an axis tick.
    pub year_ticks: Vec<i32>,
}

impl HeatmapScales {
    /// Builds the scales.
    ///
    /// Fails with [`ChartError::Validation`] if the dataset is empty or repeats a cell.
    pub fn build(dataset: &Dataset, dims: &ChartDimensions) -> Result<Self> {
        dataset.validate()?;
        let (min, max) = dataset
            .temperature_extent()
            .ok_or_else(|| ChartError::Validation("the dataset has no records".into()))?;

        let month = ScaleOrdinalBand::new(0_u8..12, (dims.bounded_height, 0.0))
            .with_uniform_padding(MONTH_PADDING);
        let years = dataset.years();
        let year_ticks = years
            .iter()
            .copied()
            .filter(|y| y % YEAR_TICK_INTERVAL == 0)
            .collect();
        let year = ScaleOrdinalBand::new(years, (0.0, dims.bounded_width))
            .with_uniform_padding(YEAR_PADDING);
        let color = ScaleSequential::viridis((min.celsius(), max.celsius()));

        Ok(Self {
            month,
            year,
            color,
            year_ticks,
        })
    }

    /// Fill color for a rounded temperature.
    pub fn fill(&self, temperature: Tenths) -> Color {
        self.color.map(temperature.celsius())
    }
}
