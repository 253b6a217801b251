// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation.
//!
//! A color legend is a horizontal row of swatches with a label centered under each one. The
//! swatches can be listed explicitly or sampled from a [`ScaleSequential`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::color::palette::css;
use peniko::{Brush, Color};
use tempmap_core::{Mark, MarkId, TextBaseline};

use crate::color::ScaleSequential;
use crate::z_order;

/// A simple legend item.
#[derive(Clone, Debug)]
pub struct LegendItem {
    /// The label string shown under the swatch.
    pub label: String,
    /// The swatch fill paint.
    pub fill: Brush,
}

impl LegendItem {
    /// Convenience constructor for a solid-color swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            fill: Brush::Solid(color),
        }
    }
}

/// A horizontal, discrete-swatch color legend.
#[derive(Clone, Debug)]
pub struct ColorLegendSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Swatch width.
    pub swatch_width: f64,
    /// Swatch height.
    pub swatch_height: f64,
    /// Horizontal gap between swatches.
    pub swatch_padding: f64,
    /// Gap between the bottom of a swatch and its label.
    pub label_offset: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Brush,
    /// Items in display order (left to right).
    pub items: Vec<LegendItem>,
}

impl ColorLegendSpec {
    /// Creates a legend over explicit items.
    pub fn new(id_base: u64, items: Vec<LegendItem>) -> Self {
        Self {
            id_base,
            swatch_width: 15.0,
            swatch_height: 15.0,
            swatch_padding: 2.0,
            label_offset: 10.0,
            font_size: 10.0,
            text_fill: Brush::Solid(css::BLACK),
            items,
        }
    }

    /// Creates a legend with `cells` swatches sampled evenly across `scale`'s domain.
    ///
    /// Each swatch is filled with the scale's color at its value and labeled by `format`.
    pub fn from_sequential(
        id_base: u64,
        scale: &ScaleSequential,
        cells: usize,
        format: impl Fn(f64) -> String,
    ) -> Self {
        let items = scale
            .cell_values(cells)
            .into_iter()
            .map(|v| LegendItem::solid(format(v), scale.map(v)))
            .collect();
        Self::new(id_base, items)
    }

    /// Sets the swatch size.
    pub fn with_swatch_size(mut self, width: f64, height: f64) -> Self {
        self.swatch_width = width;
        self.swatch_height = height;
        self
    }

    /// Sets the gap between swatches.
    pub fn with_swatch_padding(mut self, padding: f64) -> Self {
        self.swatch_padding = padding;
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the label color.
    pub fn with_text_fill(mut self, text_fill: impl Into<Brush>) -> Self {
        self.text_fill = text_fill.into();
        self
    }

    /// Returns the extent of the swatch row, with its origin at `(0, 0)`.
    pub fn swatch_bounds(&self) -> Rect {
        let n = self.items.len() as f64;
        let width = if self.items.is_empty() {
            0.0
        } else {
            n * self.swatch_width + (n - 1.0) * self.swatch_padding
        };
        Rect::new(0.0, 0.0, width, self.swatch_height)
    }

    /// Generates legend marks (swatch rect + label text per item) with the row origin at `(x, y)`.
    pub fn marks(&self, x: f64, y: f64) -> Vec<Mark> {
        let mut out = Vec::with_capacity(2 * self.items.len());
        let stride = self.swatch_width + self.swatch_padding;
        for (i, item) in self.items.iter().enumerate() {
            let x0 = x + i as f64 * stride;

            out.push(
                Mark::builder(MarkId::from_raw(self.id_base + i as u64))
                    .rect()
                    .class("swatch")
                    .z_index(z_order::LEGEND_SWATCHES)
                    .x(x0)
                    .y(y)
                    .w(self.swatch_width)
                    .h(self.swatch_height)
                    .fill_brush(item.fill.clone())
                    .build(),
            );

            out.push(
                Mark::builder(MarkId::from_raw(self.id_base + 1000 + i as u64))
                    .text()
                    .class("label")
                    .z_index(z_order::LEGEND_LABELS)
                    .x(x0 + 0.5 * self.swatch_width)
                    .y(y + self.swatch_height + self.label_offset)
                    .content(item.label.clone())
                    .font_size(self.font_size)
                    .fill_brush(self.text_fill.clone())
                    .text_anchor_middle()
                    .text_baseline(TextBaseline::Hanging)
                    .build(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use tempmap_core::{MarkKind, TextAnchor};

    use super::*;
    use crate::format::format_fixed;

    #[test]
    fn sequential_legend_samples_domain_endpoints() {
        let scale = ScaleSequential::viridis((2.0, 10.0));
        let legend = ColorLegendSpec::from_sequential(0, &scale, 5, |v| format_fixed(v, 1));
        let labels: Vec<_> = legend.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["2.0", "4.0", "6.0", "8.0", "10.0"]);
        assert_eq!(legend.items[0].fill, Brush::Solid(scale.map(2.0)));
    }

    #[test]
    fn swatches_step_by_width_plus_padding_and_labels_center_below() {
        let legend = ColorLegendSpec::new(
            50,
            std::vec![
                LegendItem::solid("a", Color::BLACK),
                LegendItem::solid("b", Color::WHITE),
            ],
        )
        .with_swatch_size(40.0, 15.0)
        .with_swatch_padding(5.0);

        let marks = legend.marks(0.0, 0.0);
        assert_eq!(marks.len(), 4);

        let swatches: Vec<_> = marks
            .iter()
            .filter(|m| m.kind() == MarkKind::Rect)
            .filter_map(|m| m.payload.bounds())
            .collect();
        assert_eq!(
            swatches,
            [
                Rect::new(0.0, 0.0, 40.0, 15.0),
                Rect::new(45.0, 0.0, 85.0, 15.0)
            ]
        );

        let second_label = marks
            .iter()
            .find(|m| m.id == MarkId::from_raw(1051))
            .and_then(Mark::as_text)
            .expect("second label");
        assert_eq!(second_label.pos.x, 65.0);
        assert_eq!(second_label.pos.y, 25.0);
        assert_eq!(second_label.anchor, TextAnchor::Middle);

        assert_eq!(legend.swatch_bounds(), Rect::new(0.0, 0.0, 85.0, 15.0));
    }
}
