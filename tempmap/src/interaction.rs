// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tooltip state.
//!
//! A single tooltip is shared by every cell. It is shown on pointer enter and hidden on pointer
//! leave; nothing else is retained.

use kurbo::Point;
use tempmap_core::MarkId;

use crate::dataset::month_label;
use crate::marks::CellDatum;

/// Horizontal offset from the pointer to the tooltip anchor.
pub const TOOLTIP_OFFSET_X: f64 = -5.0;
/// Vertical offset from the pointer to the tooltip anchor.
pub const TOOLTIP_OFFSET_Y: f64 = -45.0;
/// CSS transform that centers the tooltip on its anchor.
pub const TOOLTIP_TRANSFORM: &str = "translate(-50%, -50%)";

/// A pointer position, both on the drawing surface and on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Position in surface coordinates (used for hit testing).
    pub position: Point,
    /// Position in page coordinates (used to place the tooltip).
    pub page: Point,
}

impl PointerEvent {
    /// An event whose page position equals its surface position.
    pub fn at(position: Point) -> Self {
        Self {
            position,
            page: position,
        }
    }
}

/// A change in which cell is hovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTransition {
    /// The pointer entered a cell.
    Enter(MarkId),
    /// The pointer left a cell.
    Leave(MarkId),
}

/// The shared tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// `0` when hidden, `1` when shown.
    pub opacity: f64,
    /// CSS `left`, in page pixels.
    pub left: f64,
    /// CSS `top`, in page pixels.
    pub top: f64,
    /// CSS transform.
    pub transform: &'static str,
    /// `data-year` of the hovered cell.
    pub data_year: Option<i32>,
    /// `#time` text: `"<Month> <Year>"`.
    pub time: String,
    /// `#temp` text: `"<Temperature>°C"`.
    pub temp: String,
    /// Scale-derived center of the hovered cell, in surface coordinates.
    pub anchor: Option<Point>,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            opacity: 0.0,
            left: 0.0,
            top: 0.0,
            transform: "",
            data_year: None,
            time: String::new(),
            temp: String::new(),
            anchor: None,
        }
    }
}

impl Tooltip {
    /// Whether the tooltip is shown.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Shows the tooltip for `datum`, near the pointer.
    pub fn show(&mut self, datum: &CellDatum, anchor: Point, event: &PointerEvent) {
        self.opacity = 1.0;
        self.left = event.page.x + TOOLTIP_OFFSET_X;
        self.top = event.page.y + TOOLTIP_OFFSET_Y;
        self.transform = TOOLTIP_TRANSFORM;
        self.data_year = Some(datum.year);
        self.time = format!("{} {}", month_label(datum.month), datum.year);
        self.temp = format!("{}°C", datum.temperature);
        self.anchor = Some(anchor);
    }

    /// Hides the tooltip. Its last content is kept.
    pub fn hide(&mut self) {
        self.opacity = 0.0;
    }
}

/// The chart's only mutable state: which cell is hovered and the tooltip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverState {
    /// Currently hovered cell.
    pub hovered: Option<MarkId>,
    /// The tooltip.
    pub tooltip: Tooltip,
}

impl HoverState {
    /// Handles pointer enter on a cell.
    pub fn enter(&mut self, id: MarkId, datum: &CellDatum, anchor: Point, event: &PointerEvent) {
        self.hovered = Some(id);
        self.tooltip.show(datum, anchor, event);
    }

    /// Handles pointer leave.
    pub fn leave(&mut self) {
        self.hovered = None;
        self.tooltip.hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Tenths;

    fn datum() -> CellDatum {
        CellDatum {
            month: 0,
            year: 2000,
            temperature: Tenths(92),
        }
    }

    #[test]
    fn enter_shows_text_and_offsets_from_pointer() {
        let mut state = HoverState::default();
        assert!(!state.tooltip.is_visible());

        let event = PointerEvent {
            position: Point::new(10.0, 10.0),
            page: Point::new(200.0, 300.0),
        };
        state.enter(MarkId::from_raw(1), &datum(), Point::new(12.0, 14.0), &event);

        let t = &state.tooltip;
        assert_eq!(t.opacity, 1.0);
        assert_eq!((t.left, t.top), (195.0, 255.0));
        assert_eq!(t.transform, "translate(-50%, -50%)");
        assert_eq!(t.data_year, Some(2000));
        assert_eq!(t.time, "January 2000");
        assert_eq!(t.temp, "9.2°C");
        assert_eq!(t.anchor, Some(Point::new(12.0, 14.0)));
    }

    #[test]
    fn leave_hides() {
        let mut state = HoverState::default();
        state.enter(
            MarkId::from_raw(1),
            &datum(),
            Point::ORIGIN,
            &PointerEvent::at(Point::ORIGIN),
        );
        state.leave();
        assert_eq!(state.tooltip.opacity, 0.0);
        assert_eq!(state.hovered, None);
    }
}
