// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `tempmap_core`.
//!
//! This crate is a small, reusable layer above `tempmap_core`:
//! - **Scales** map data values into range coordinates or colors.
//! - **Guides** (axes, legends, titles) are built by generating `tempmap_core::Mark`s.
//!
//! Text shaping and layout are out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod calendar;
mod color;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod legend;
mod rect_mark;
mod scale;
mod title;
mod z_order;

pub use axis::{AxisOrient, AxisSpec, AxisStyle, AxisTick, StrokeStyle};
pub use calendar::{MONTH_NAMES, month_name};
pub use color::{ColorRamp, ScaleSequential};
pub use format::format_fixed;
pub use legend::{ColorLegendSpec, LegendItem};
pub use rect_mark::RectMarkSpec;
pub use scale::{ScaleBand, ScaleOrdinalBand};
pub use title::TitleSpec;
pub use z_order::*;
