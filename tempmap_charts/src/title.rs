// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart titles.
//!
//! Titles are guides rather than data-bound marks. A [`TitleSpec`] emits the title and an
//! optional subtitle as text marks anchored at an explicit point.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Brush;
use tempmap_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::z_order;

/// A chart-level title.
#[derive(Clone, Debug)]
pub struct TitleSpec {
    /// Stable mark id. The subtitle uses the next id.
    pub id: MarkId,
    /// Title text (unshaped).
    pub text: String,
    /// Optional subtitle text (unshaped).
    pub subtitle: Option<String>,
    /// Element id of the title mark.
    pub element_id: Option<&'static str>,
    /// Element id of the subtitle mark.
    pub subtitle_element_id: Option<&'static str>,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Subtitle font size in scene coordinates.
    pub subtitle_font_size: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Subtitle fill paint.
    pub subtitle_fill: Brush,
    /// Vertical distance from the title anchor to the subtitle anchor.
    pub subtitle_gap: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Rendering order hint.
    pub z_index: i32,
}

impl TitleSpec {
    /// Creates a title spec with default styling.
    pub fn new(id: MarkId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            subtitle: None,
            element_id: None,
            subtitle_element_id: None,
            font_size: 12.0,
            subtitle_font_size: 11.0,
            fill: Brush::default(),
            subtitle_fill: Brush::default(),
            subtitle_gap: 14.0,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Alphabetic,
            z_index: z_order::TITLES,
        }
    }

    /// Sets the subtitle text.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the element ids of the title and subtitle marks.
    pub fn with_element_ids(mut self, title: &'static str, subtitle: &'static str) -> Self {
        self.element_id = Some(title);
        self.subtitle_element_id = Some(subtitle);
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint of both title and subtitle.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        let fill = fill.into();
        self.subtitle_fill = fill.clone();
        self.fill = fill;
        self
    }

    /// Sets the subtitle font size.
    pub fn with_subtitle_font_size(mut self, font_size: f64) -> Self {
        self.subtitle_font_size = font_size;
        self
    }

    /// Sets the gap between title and subtitle anchors.
    pub fn with_subtitle_gap(mut self, gap: f64) -> Self {
        self.subtitle_gap = gap;
        self
    }

    /// Emits the title mark anchored at `origin`, followed by the subtitle mark if set.
    pub fn marks(&self, origin: Point) -> Vec<Mark> {
        let mut out = Vec::with_capacity(2);
        out.push(self.text_mark(
            self.id,
            self.element_id,
            origin,
            &self.text,
            self.font_size,
            &self.fill,
        ));
        if let Some(subtitle) = &self.subtitle {
            out.push(self.text_mark(
                MarkId::from_raw(self.id.0.wrapping_add(1)),
                self.subtitle_element_id,
                Point::new(origin.x, origin.y + self.subtitle_gap),
                subtitle,
                self.subtitle_font_size,
                &self.subtitle_fill,
            ));
        }
        out
    }

    fn text_mark(
        &self,
        id: MarkId,
        element_id: Option<&'static str>,
        pos: Point,
        text: &str,
        font_size: f64,
        fill: &Brush,
    ) -> Mark {
        let mut builder = Mark::builder(id)
            .text()
            .z_index(self.z_index)
            .x(pos.x)
            .y(pos.y)
            .content(text)
            .font_size(font_size)
            .fill_brush(fill.clone())
            .text_anchor(self.anchor)
            .text_baseline(self.baseline);
        if let Some(element_id) = element_id {
            builder = builder.element_id(element_id);
        }
        builder.build()
    }
}
