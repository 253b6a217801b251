// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! An [`AxisSpec`] is a single axis type with an `orient` of `top`, `bottom`, `left`, or `right`.
//! Marks are generated in axis-local coordinates: the axis line sits at `0` on the cross axis and
//! ticks extend outward (away from the plot). Callers translate the owning group into place.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use kurbo::BezPath;
use peniko::Brush;
use peniko::color::palette::css;
use tempmap_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::scale::ScaleOrdinalBand;
use crate::z_order;

/// A paint + width pair for stroked paths (domain lines, ticks).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Fill paint for the axis title.
    pub title_fill: Brush,
    /// Font size for the axis title.
    pub title_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            rule: rule.clone(),
            label_fill: rule.brush.clone(),
            label_font_size: 10.0,
            title_fill: rule.brush,
            title_font_size: 11.0,
        }
    }
}

/// Axis orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed above the plot area.
    Top,
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
    /// A vertical axis placed to the right of the plot area.
    Right,
}

impl AxisOrient {
    fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// `+1` when ticks grow toward positive coordinates, `-1` otherwise.
    fn outward(self) -> f64 {
        match self {
            Self::Top | Self::Left => -1.0,
            Self::Bottom | Self::Right => 1.0,
        }
    }
}

/// A positioned, labeled tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Position along the axis, in range coordinates.
    pub position: f64,
    /// Label text.
    pub label: String,
}

/// An axis specification.
#[derive(Clone, Debug)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Extent of the domain line along the axis, in range coordinates.
    pub range: (f64, f64),
    /// Ticks in display order.
    pub ticks: Vec<AxisTick>,
    /// Length of inner and outer tick marks.
    pub tick_size: f64,
    /// Gap between a tick's end and its label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional axis title text.
    pub title: Option<String>,
    /// Distance from the axis line to the title anchor.
    pub title_offset: f64,
}

impl AxisSpec {
    /// Creates an axis over `range` with no ticks.
    ///
    /// Defaults: `tick_size = 6`, `tick_padding = 3`, no title.
    pub fn new(id_base: u64, orient: AxisOrient, range: (f64, f64)) -> Self {
        Self {
            id_base,
            orient,
            range,
            ticks: Vec::new(),
            tick_size: 6.0,
            tick_padding: 3.0,
            style: AxisStyle::default(),
            title: None,
            title_offset: 0.0,
        }
    }

    /// Convenience for [`AxisOrient::Bottom`].
    pub fn bottom(id_base: u64, range: (f64, f64)) -> Self {
        Self::new(id_base, AxisOrient::Bottom, range)
    }

    /// Convenience for [`AxisOrient::Top`].
    pub fn top(id_base: u64, range: (f64, f64)) -> Self {
        Self::new(id_base, AxisOrient::Top, range)
    }

    /// Convenience for [`AxisOrient::Left`].
    pub fn left(id_base: u64, range: (f64, f64)) -> Self {
        Self::new(id_base, AxisOrient::Left, range)
    }

    /// Convenience for [`AxisOrient::Right`].
    pub fn right(id_base: u64, range: (f64, f64)) -> Self {
        Self::new(id_base, AxisOrient::Right, range)
    }

    /// Replaces the ticks.
    pub fn with_ticks(mut self, ticks: Vec<AxisTick>) -> Self {
        self.ticks = ticks;
        self
    }

    /// Places one tick at the center of each band for `values`, labeled by `format`.
    ///
    /// Values outside the scale's domain are skipped.
    pub fn with_band_ticks<K: Copy + Eq + Hash>(
        mut self,
        scale: &ScaleOrdinalBand<K>,
        values: impl IntoIterator<Item = K>,
        format: impl Fn(K) -> String,
    ) -> Self {
        self.ticks = values
            .into_iter()
            .filter_map(|v| {
                scale.center(v).map(|position| AxisTick {
                    position,
                    label: format(v),
                })
            })
            .collect();
        self
    }

    /// Sets the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the title and its distance from the axis line.
    ///
    /// Vertical axes rotate the title to read along the axis.
    pub fn with_title(mut self, title: impl Into<String>, offset: f64) -> Self {
        self.title = Some(title.into());
        self.title_offset = offset;
        self
    }

    /// Generates the domain path, tick, and tick-label marks.
    pub fn marks(&self) -> Vec<Mark> {
        let k = self.orient.outward();
        let vertical = self.orient.is_vertical();
        let spacing = self.tick_size.max(0.0) + self.tick_padding;
        let mut out = Vec::with_capacity(1 + 2 * self.ticks.len());

        out.push(self.domain_mark());

        let (anchor, baseline) = match self.orient {
            AxisOrient::Left => (TextAnchor::End, TextBaseline::Middle),
            AxisOrient::Right => (TextAnchor::Start, TextBaseline::Middle),
            AxisOrient::Bottom => (TextAnchor::Middle, TextBaseline::Hanging),
            AxisOrient::Top => (TextAnchor::Middle, TextBaseline::Alphabetic),
        };

        for (i, tick) in self.ticks.iter().enumerate() {
            let p = tick.position;
            out.push(self.tick_mark(i, p));
            let (x, y) = if vertical {
                (k * spacing, p)
            } else {
                (p, k * spacing)
            };
            out.push(
                Mark::builder(self.label_id(i))
                    .text()
                    .z_index(z_order::AXIS_LABELS)
                    .x(x)
                    .y(y)
                    .content(tick.label.clone())
                    .text_anchor(anchor)
                    .text_baseline(baseline)
                    .font_size(self.style.label_font_size)
                    .fill_brush(self.style.label_fill.clone())
                    .build(),
            );
        }

        out
    }

    /// Generates the title mark, if a title is set.
    pub fn title_mark(&self) -> Option<Mark> {
        let title = self.title.as_ref()?;
        let mid = 0.5 * (self.range.0 + self.range.1);
        let offset = self.orient.outward() * self.title_offset;
        let (x, y, angle) = match self.orient {
            AxisOrient::Left => (offset, mid, -90.0),
            AxisOrient::Right => (offset, mid, 90.0),
            AxisOrient::Top | AxisOrient::Bottom => (mid, offset, 0.0),
        };
        let mark = Mark::builder(MarkId::from_raw(self.id_base + 9000))
            .text()
            .z_index(z_order::AXIS_TITLES)
            .x(x)
            .y(y)
            .angle(angle)
            .content(title.clone())
            .font_size(self.style.title_font_size)
            .fill_brush(self.style.title_fill.clone())
            .text_anchor_middle()
            .build();
        Some(mark)
    }

    fn domain_mark(&self) -> Mark {
        let outer = self.orient.outward() * self.tick_size;
        let (r0, r1) = self.range;
        let mut p = BezPath::new();
        if self.orient.is_vertical() {
            p.move_to((outer, r0));
            p.line_to((0.0, r0));
            p.line_to((0.0, r1));
            p.line_to((outer, r1));
        } else {
            p.move_to((r0, outer));
            p.line_to((r0, 0.0));
            p.line_to((r1, 0.0));
            p.line_to((r1, outer));
        }
        let mut mark = self.stroked(MarkId::from_raw(self.id_base), p);
        mark.class = Some("domain");
        mark
    }

    /// A tick of `tick_size` at `position`, pointing away from the plot.
    fn tick_mark(&self, i: usize, position: f64) -> Mark {
        let end = self.orient.outward() * self.tick_size;
        let mut p = BezPath::new();
        if self.orient.is_vertical() {
            p.move_to((0.0, position));
            p.line_to((end, position));
        } else {
            p.move_to((position, 0.0));
            p.line_to((position, end));
        }
        self.stroked(self.tick_id(i), p)
    }

    fn stroked(&self, id: MarkId, path: BezPath) -> Mark {
        Mark::builder(id)
            .path()
            .shape(path)
            .z_index(z_order::AXIS_RULES)
            .fill(peniko::Color::TRANSPARENT)
            .stroke_brush(self.style.rule.brush.clone())
            .stroke_width(self.style.rule.stroke_width)
            .build()
    }

    fn tick_id(&self, i: usize) -> MarkId {
        MarkId::from_raw(self.id_base + 1 + i as u64)
    }

    fn label_id(&self, i: usize) -> MarkId {
        MarkId::from_raw(self.id_base + 1000 + i as u64)
    }
}
