// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene primitives for `tempmap`.
//!
//! This crate is the small layer every other `tempmap` crate builds on:
//! - **Marks** are stable-identity drawing primitives (rectangles, text, paths) carrying a
//!   resolved payload plus DOM-style metadata (element id, class, `data-*` attributes).
//! - **Groups** form the scene graph: a tree of translated containers that marks are attached
//!   to, addressed by element id.
//! - A **surface** is the sized, painted root of a scene graph.
//!
//! Marks are fully resolved: geometry and paint are plain values, not encodings. Text shaping
//! is out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;

mod group;
mod mark;

pub use group::{Group, Node, Surface};
pub use mark::{
    DataAttrs, Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathPayload, RectPayload,
    TextAnchor, TextBaseline, TextPayload,
};
