// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas and plot-area sizing.

use kurbo::{Rect, Vec2};

/// Fraction of the viewport width used by the canvas.
pub const CANVAS_WIDTH_FRACTION: f64 = 0.9;

/// Space reserved around the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin (holds the x axis, its label, and the legend).
    pub bottom: f64,
    /// Left margin (holds the y axis and its label).
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 15.0,
            right: 15.0,
            bottom: 120.0,
            left: 90.0,
        }
    }
}

/// Canvas, legend, and plot-area sizes. Computed once per chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartDimensions {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Legend width.
    pub legend_width: f64,
    /// Legend height.
    pub legend_height: f64,
    /// Margins around the plot area.
    pub margin: Margin,
    /// Plot-area width (`width - left - right`, at least `0`).
    pub bounded_width: f64,
    /// Plot-area height (`height - top - bottom`, at least `0`).
    pub bounded_height: f64,
}

impl ChartDimensions {
    /// Canvas height.
    pub const HEIGHT: f64 = 500.0;
    /// Legend width.
    pub const LEGEND_WIDTH: f64 = 200.0;
    /// Legend height.
    pub const LEGEND_HEIGHT: f64 = 20.0;

    /// Sizes the chart for a viewport `viewport_width` wide.
    pub fn for_viewport(viewport_width: f64) -> Self {
        Self::new(viewport_width * CANVAS_WIDTH_FRACTION, Self::HEIGHT)
    }

    /// Sizes the chart for an explicit canvas size with the default margins.
    ///
    /// Negative or non-finite sizes clamp to `0`.
    pub fn new(width: f64, height: f64) -> Self {
        let margin = Margin::default();
        let width = non_negative(width);
        let height = non_negative(height);
        Self {
            width,
            height,
            legend_width: Self::LEGEND_WIDTH,
            legend_height: Self::LEGEND_HEIGHT,
            margin,
            bounded_width: (width - margin.left - margin.right).max(0.0),
            bounded_height: (height - margin.top - margin.bottom).max(0.0),
        }
    }

    /// Offset of the plot area from the canvas origin.
    pub fn bounds_offset(&self) -> Vec2 {
        Vec2::new(self.margin.left, self.margin.top)
    }

    /// Plot area in canvas coordinates.
    pub fn bounds_rect(&self) -> Rect {
        Rect::from_origin_size(
            self.bounds_offset().to_point(),
            (self.bounded_width, self.bounded_height),
        )
    }

    /// Offset of the legend group inside the plot area: right-aligned with a 10px inset, halfway
    /// into the bottom margin.
    pub fn legend_offset(&self) -> Vec2 {
        Vec2::new(
            self.bounded_width - self.legend_width - 10.0,
            self.bounded_height + self.margin.bottom / 2.0,
        )
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_area_subtracts_margins() {
        let d = ChartDimensions::for_viewport(1280.0);
        assert_eq!(d.width, 1152.0);
        assert_eq!(d.height, 500.0);
        assert_eq!(d.bounded_width, 1152.0 - 90.0 - 15.0);
        assert_eq!(d.bounded_height, 365.0);
        assert_eq!(d.bounds_rect(), Rect::new(90.0, 15.0, 1137.0, 380.0));
    }

    #[test]
    fn legend_sits_in_bottom_margin_right_aligned() {
        let d = ChartDimensions::new(1000.0, 500.0);
        assert_eq!(d.legend_offset(), Vec2::new(895.0 - 210.0, 365.0 + 60.0));
    }

    #[test]
    fn tiny_viewports_clamp_to_empty_plot() {
        let d = ChartDimensions::for_viewport(50.0);
        assert_eq!(d.bounded_width, 0.0);
        assert!(d.bounded_height > 0.0);
    }

    #[test]
    fn negative_and_non_finite_viewports_clamp_to_zero() {
        for viewport in [-100.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let d = ChartDimensions::for_viewport(viewport);
            assert_eq!(d.width, 0.0, "{viewport}");
            assert_eq!(d.bounded_width, 0.0, "{viewport}");
            assert_eq!(d.height, 500.0, "{viewport}");
        }
        let d = ChartDimensions::new(800.0, -1.0);
        assert_eq!((d.height, d.bounded_height), (0.0, 0.0));
    }
}
