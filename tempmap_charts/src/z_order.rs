// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated marks.
//!
//! `tempmap_core` marks carry an explicit `z_index`; renderers paint each group's marks in
//! `(z_index, document order)` order. The chart layer sets z-indexes consistently so that guides
//! drawn into the same group as series marks stay on top.

/// Filled series marks (heat-map cells).
pub const SERIES_FILL: i32 = 0;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Axis title labels.
pub const AXIS_TITLES: i32 = 50;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
/// Chart-level titles and annotations.
pub const TITLES: i32 = 80;
