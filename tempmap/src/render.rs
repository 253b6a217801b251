// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render pipeline and the rendered chart.

use kurbo::Point;
use tempmap_core::MarkId;
use tracing::debug;

use crate::dataset::Dataset;
use crate::dimensions::ChartDimensions;
use crate::error::{ChartError, Result};
use crate::interaction::{HoverState, HoverTransition, PointerEvent, Tooltip};
use crate::marks::{CellDatum, CellIndex, render_cells};
use crate::peripherals::render_peripherals;
use crate::scaffold::{ChartDocument, Slot};
use crate::scales::HeatmapScales;
use crate::theme::Theme;

/// A rendered chart and its hover state.
#[derive(Clone, Debug)]
pub struct Chart {
    /// Heading and drawing surface.
    pub document: ChartDocument,
    /// Scales the marks were placed with.
    pub scales: HeatmapScales,
    /// Canvas and plot sizes.
    pub dimensions: ChartDimensions,
    /// Styling.
    pub theme: Theme,
    cells: CellIndex,
    hover: HoverState,
}

impl Chart {
    /// Renders `dataset` with the default theme.
    pub fn render(dataset: &Dataset, dimensions: ChartDimensions) -> Result<Self> {
        Self::render_with_theme(dataset, dimensions, Theme::default())
    }

    /// Renders `dataset`: scales, scaffold, cells, then guides.
    ///
    /// Scale building validates the dataset, so an empty dataset or a repeated `(year, month)`
    /// cell fails with [`ChartError::Validation`] before the scaffold exists.
    pub fn render_with_theme(
        dataset: &Dataset,
        dimensions: ChartDimensions,
        theme: Theme,
    ) -> Result<Self> {
        let scales = HeatmapScales::build(dataset, &dimensions)?;
        debug!(
            years = scales.year.domain().len(),
            year_ticks = scales.year_ticks.len(),
            color_domain = ?scales.color.domain(),
            "Built scales"
        );

        let mut document = ChartDocument::scaffold(&dimensions, &theme);

        let cells_group = document
            .group_mut(Slot::Cells)
            .ok_or_else(|| ChartError::Validation("scaffold is missing `cells`".into()))?;
        let cells = render_cells(dataset, &scales, cells_group);
        debug!(cells = cells.len(), "Rendered cells");

        render_peripherals(&mut document, dataset, &scales, &dimensions, &theme)?;

        Ok(Self {
            document,
            scales,
            dimensions,
            theme,
            cells,
            hover: HoverState::default(),
        })
    }

    /// Metadata of every cell, keyed by mark id.
    pub fn cells(&self) -> &CellIndex {
        &self.cells
    }

    /// Metadata of one cell.
    pub fn cell(&self, id: MarkId) -> Option<&CellDatum> {
        self.cells.get(&id)
    }

    /// The tooltip.
    pub fn tooltip(&self) -> &Tooltip {
        &self.hover.tooltip
    }

    /// The hovered cell, if any.
    pub fn hovered(&self) -> Option<MarkId> {
        self.hover.hovered
    }

    /// Scale-derived center of a cell in surface coordinates.
    pub fn cell_anchor(&self, datum: &CellDatum) -> Option<Point> {
        let x = self.scales.year.center(datum.year)?;
        let y = self.scales.month.center(datum.month)?;
        Some(Point::new(x, y) + self.dimensions.bounds_offset())
    }

    /// Routes pointer enter on the mark `id`. Returns `false` if `id` is not a cell.
    pub fn pointer_enter(&mut self, id: MarkId, event: &PointerEvent) -> bool {
        let Some(datum) = self.cells.get(&id).copied() else {
            return false;
        };
        let anchor = self.cell_anchor(&datum).unwrap_or(event.position);
        self.hover.enter(id, &datum, anchor, event);
        true
    }

    /// Routes pointer leave on the mark `id`. Returns `false` if `id` is not a cell.
    pub fn pointer_leave(&mut self, id: MarkId) -> bool {
        if !self.cells.contains_key(&id) {
            return false;
        }
        self.hover.leave();
        true
    }

    /// Hit-tests the cells under the pointer and emits leave/enter as the hovered cell changes.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> Vec<HoverTransition> {
        let hit = self
            .document
            .surface
            .hit_test(event.position)
            .map(|(mark, _)| mark.id)
            .filter(|id| self.cells.contains_key(id));

        let mut transitions = Vec::new();
        if hit == self.hover.hovered {
            return transitions;
        }
        if let Some(prev) = self.hover.hovered {
            self.pointer_leave(prev);
            transitions.push(HoverTransition::Leave(prev));
        }
        if let Some(id) = hit {
            self.pointer_enter(id, event);
            transitions.push(HoverTransition::Enter(id));
        }
        transitions
    }
}
