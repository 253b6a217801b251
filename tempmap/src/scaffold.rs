// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart's structural scaffold.
//!
//! The scaffold is built once, before any data is bound: heading text slots, then the drawing
//! surface with a translated bounds group holding the axis, legend, and cell slots. Renderers
//! only ever attach marks into these slots.

use kurbo::Vec2;
use tempmap_core::{Group, Mark, MarkId, Surface};

use crate::dimensions::ChartDimensions;
use crate::theme::Theme;

/// Stable mark-id bases. Each guide derives its mark ids from its base.
pub(crate) mod ids {
    /// Title (the description uses the next id).
    pub(crate) const TITLE: u64 = 1;
    /// Y axis marks.
    pub(crate) const Y_AXIS: u64 = 100;
    /// X axis marks.
    pub(crate) const X_AXIS: u64 = 20_000;
    /// Legend marks.
    pub(crate) const LEGEND: u64 = 40_000;
    /// Offset of an axis's title mark from its base.
    pub(crate) const AXIS_TITLE_OFFSET: u64 = 9000;
    /// Namespace of cell marks (see `tempmap_core::MarkId::for_row`).
    pub(crate) const CELL_NAMESPACE: u16 = 1;
}

/// A named attachment point in the scaffold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// `#title` text.
    Title,
    /// `#description` text.
    Description,
    /// `#y-axis` group.
    YAxis,
    /// `#y-axis-label` text inside the y axis.
    YAxisLabel,
    /// `#x-axis` group.
    XAxis,
    /// `#x-axis-label` text inside the x axis.
    XAxisLabel,
    /// `#legend` group.
    Legend,
    /// `.cells` group.
    Cells,
}

impl Slot {
    /// The slot's selector name: an element id, or a class for [`Slot::Cells`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::YAxis => "y-axis",
            Self::YAxisLabel => "y-axis-label",
            Self::XAxis => "x-axis",
            Self::XAxisLabel => "x-axis-label",
            Self::Legend => "legend",
            Self::Cells => "cells",
        }
    }

    /// Whether the slot is a text mark rather than a group.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Self::Title | Self::Description | Self::YAxisLabel | Self::XAxisLabel
        )
    }
}

/// The full chart document: heading text outside the surface, and the surface itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDocument {
    /// Title and description, in document order.
    pub heading: Group,
    /// The drawing surface.
    pub surface: Surface,
}

impl ChartDocument {
    /// Builds the empty scaffold for `dims`.
    pub fn scaffold(dims: &ChartDimensions, theme: &Theme) -> Self {
        let mut heading = Group::new().with_class("heading");
        heading.push_mark(text_slot(ids::TITLE, Slot::Title));
        heading.push_mark(text_slot(ids::TITLE + 1, Slot::Description));

        let mut bounds = Group::new()
            .with_class("bounds")
            .with_translate(dims.bounds_offset());

        let mut y_axis = Group::new().with_element_id(Slot::YAxis.name());
        y_axis.push_mark(text_slot(
            ids::Y_AXIS + ids::AXIS_TITLE_OFFSET,
            Slot::YAxisLabel,
        ));
        bounds.push_group(y_axis);

        let mut x_axis = Group::new()
            .with_element_id(Slot::XAxis.name())
            .with_translate(Vec2::new(0.0, dims.bounded_height));
        x_axis.push_mark(text_slot(
            ids::X_AXIS + ids::AXIS_TITLE_OFFSET,
            Slot::XAxisLabel,
        ));
        bounds.push_group(x_axis);

        bounds.push_group(
            Group::new()
                .with_element_id(Slot::Legend.name())
                .with_class("legend")
                .with_translate(dims.legend_offset()),
        );
        bounds.push_group(Group::new().with_class(Slot::Cells.name()));

        let mut surface = Surface::new(dims.width, dims.height)
            .with_background(theme.background)
            .with_class("svg");
        surface.root.push_group(bounds);

        Self { heading, surface }
    }

    /// Returns a group slot. Text slots return `None`.
    pub fn group(&self, slot: Slot) -> Option<&Group> {
        match slot {
            Slot::Cells => self.surface.root.find_class(slot.name()),
            _ if slot.is_text() => None,
            _ => self.surface.root.find(slot.name()),
        }
    }

    /// Mutable variant of [`ChartDocument::group`].
    pub fn group_mut(&mut self, slot: Slot) -> Option<&mut Group> {
        match slot {
            Slot::Cells => self.surface.root.find_class_mut(slot.name()),
            _ if slot.is_text() => None,
            _ => self.surface.root.find_mut(slot.name()),
        }
    }

    /// Returns a text slot. Group slots return `None`.
    pub fn text(&self, slot: Slot) -> Option<&Mark> {
        if !slot.is_text() {
            return None;
        }
        self.heading
            .find_mark(slot.name())
            .or_else(|| self.surface.root.find_mark(slot.name()))
    }

    /// Replaces the content of a text slot, keeping its element id. Returns `false` if `slot`
    /// is not a text slot.
    pub fn fill_text(&mut self, slot: Slot, mut mark: Mark) -> bool {
        if !slot.is_text() {
            return false;
        }
        let target = match slot {
            Slot::Title | Slot::Description => self.heading.find_mark_mut(slot.name()),
            _ => self.surface.root.find_mark_mut(slot.name()),
        };
        match target {
            Some(target) => {
                mark.element_id = Some(slot.name());
                *target = mark;
                true
            }
            None => false,
        }
    }
}

fn text_slot(id: u64, slot: Slot) -> Mark {
    Mark::builder(MarkId::from_raw(id))
        .text()
        .element_id(slot.name())
        .build()
}
