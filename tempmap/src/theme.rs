// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and font sizes shared by the scaffold, guides, and exporters.

use peniko::Color;

/// Chart styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Drawing-surface background.
    pub background: Color,
    /// Text color of titles, axis labels, and legend labels.
    pub foreground: Color,
    /// Font size of the "MONTH" / "YEAR" axis labels.
    pub axis_title_font_size: f64,
    /// Font size of tick labels.
    pub tick_font_size: f64,
    /// Font size of legend labels.
    pub legend_font_size: f64,
    /// Font size of the chart title.
    pub title_font_size: f64,
    /// Font size of the description line.
    pub description_font_size: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0xb3, 0x35, 0x03),
            foreground: Color::from_rgb8(0xe0, 0xbe, 0xb0),
            axis_title_font_size: 16.0,
            tick_font_size: 10.0,
            legend_font_size: 10.0,
            title_font_size: 16.0,
            description_font_size: 12.0,
        }
    }
}
