// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle mark generation.

extern crate alloc;

use alloc::string::String;

use kurbo::Rect;
use peniko::Brush;
use tempmap_core::{DataAttrs, Mark, MarkId};

/// A rectangle mark spec.
#[derive(Clone, Debug)]
pub struct RectMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Rectangle geometry in group coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Class name.
    pub class: Option<&'static str>,
    /// Whether the mark receives pointer events.
    pub interactive: bool,
    /// `data-*` attributes.
    pub data: DataAttrs,
    /// Rendering order hint (`tempmap_core::Mark::z_index`).
    pub z_index: i32,
}

impl RectMarkSpec {
    /// Creates a new rectangle mark spec.
    pub fn new(id: MarkId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            fill: Brush::default(),
            class: None,
            interactive: false,
            data: DataAttrs::new(),
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the class name.
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Flags the mark as a pointer-event target.
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Appends a `data-*` attribute.
    pub fn with_data(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.data.push((name, value.into()));
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let mut builder = Mark::builder(self.id)
            .rect()
            .z_index(self.z_index)
            .interactive(self.interactive)
            .x(self.rect.x0)
            .y(self.rect.y0)
            .w(self.rect.width())
            .h(self.rect.height())
            .fill_brush(self.fill.clone());
        if let Some(class) = self.class {
            builder = builder.class(class);
        }
        for (name, value) in &self.data {
            builder = builder.data(*name, value.clone());
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn carries_metadata_into_the_mark() {
        let mark = RectMarkSpec::new(MarkId::from_raw(3), Rect::new(1.0, 2.0, 4.0, 8.0))
            .with_class("cell")
            .with_interactive(true)
            .with_data("year", "1990")
            .mark();
        assert_eq!(mark.class, Some("cell"));
        assert!(mark.interactive);
        assert_eq!(mark.data_attr("year"), Some("1990"));
        assert_eq!(mark.payload.bounds(), Some(Rect::new(1.0, 2.0, 4.0, 8.0)));
    }
}
