// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene graph: translated groups of marks under a sized surface.
//!
//! Groups are addressed by element id, the way a DOM is addressed by `#id` selectors. Chart code
//! builds a scaffold of empty, named groups first and fills them in later passes.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};
use peniko::Brush;

use crate::mark::Mark;

/// A child of a [`Group`].
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A nested group.
    Group(Group),
    /// A mark.
    Mark(Mark),
}

/// A translated container of groups and marks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    /// Element id (e.g. `"x-axis"`), unique within a document.
    pub element_id: Option<&'static str>,
    /// Class name (e.g. `"bounds"`).
    pub class: Option<&'static str>,
    /// Offset applied to every child.
    pub translate: Vec2,
    /// Children in document order.
    pub children: Vec<Node>,
}

impl Group {
    /// Creates an empty, untranslated group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element id.
    pub fn with_element_id(mut self, element_id: &'static str) -> Self {
        self.element_id = Some(element_id);
        self
    }

    /// Sets the class name.
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Sets the translation.
    pub fn with_translate(mut self, translate: Vec2) -> Self {
        self.translate = translate;
        self
    }

    /// Appends a child group.
    pub fn push_group(&mut self, group: Self) {
        self.children.push(Node::Group(group));
    }

    /// Appends a mark.
    pub fn push_mark(&mut self, mark: Mark) {
        self.children.push(Node::Mark(mark));
    }

    /// Appends marks in order.
    pub fn extend_marks(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.children.extend(marks.into_iter().map(Node::Mark));
    }

    /// Finds a group by element id, searching `self` and all descendants depth-first.
    pub fn find(&self, element_id: &str) -> Option<&Self> {
        if self.element_id == Some(element_id) {
            return Some(self);
        }
        self.groups().find_map(|g| g.find(element_id))
    }

    /// Mutable variant of [`Group::find`].
    pub fn find_mut(&mut self, element_id: &str) -> Option<&mut Self> {
        if self.element_id == Some(element_id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Node::Group(g) => g.find_mut(element_id),
            Node::Mark(_) => None,
        })
    }

    /// Finds the first group with the given class, searching `self` and all descendants.
    pub fn find_class(&self, class: &str) -> Option<&Self> {
        if self.class == Some(class) {
            return Some(self);
        }
        self.groups().find_map(|g| g.find_class(class))
    }

    /// Mutable variant of [`Group::find_class`].
    pub fn find_class_mut(&mut self, class: &str) -> Option<&mut Self> {
        if self.class == Some(class) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Node::Group(g) => g.find_class_mut(class),
            Node::Mark(_) => None,
        })
    }

    /// Finds a mark by element id anywhere in this subtree.
    pub fn find_mark(&self, element_id: &str) -> Option<&Mark> {
        self.children.iter().find_map(|child| match child {
            Node::Mark(m) if m.element_id == Some(element_id) => Some(m),
            Node::Mark(_) => None,
            Node::Group(g) => g.find_mark(element_id),
        })
    }

    /// Mutable variant of [`Group::find_mark`].
    pub fn find_mark_mut(&mut self, element_id: &str) -> Option<&mut Mark> {
        self.children.iter_mut().find_map(|child| match child {
            Node::Mark(m) if m.element_id == Some(element_id) => Some(m),
            Node::Mark(_) => None,
            Node::Group(g) => g.find_mark_mut(element_id),
        })
    }

    /// Iterates direct child groups.
    pub fn groups(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|child| match child {
            Node::Group(g) => Some(g),
            Node::Mark(_) => None,
        })
    }

    /// Iterates direct child marks.
    pub fn marks(&self) -> impl Iterator<Item = &Mark> {
        self.children.iter().filter_map(|child| match child {
            Node::Mark(m) => Some(m),
            Node::Group(_) => None,
        })
    }

    /// Counts marks in this subtree.
    pub fn mark_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Node::Mark(_) => 1,
                Node::Group(g) => g.mark_count(),
            })
            .sum()
    }

    /// Visits every mark in this subtree with the accumulated offset of its owning group.
    ///
    /// `origin` is the offset of `self`'s parent coordinate system.
    pub fn visit_marks(&self, origin: Vec2, f: &mut dyn FnMut(&Mark, Vec2)) {
        let offset = origin + self.translate;
        for child in &self.children {
            match child {
                Node::Mark(m) => f(m, offset),
                Node::Group(g) => g.visit_marks(offset, f),
            }
        }
    }
}

/// A sized, painted drawing surface holding the root group.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    /// Width in scene units.
    pub width: f64,
    /// Height in scene units.
    pub height: f64,
    /// Background paint.
    pub background: Brush,
    /// Class name of the surface element.
    pub class: Option<&'static str>,
    /// Root group.
    pub root: Group,
}

impl Surface {
    /// Creates a surface with an empty root group.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: Brush::Solid(peniko::Color::TRANSPARENT),
            class: None,
            root: Group::new(),
        }
    }

    /// Sets the background paint.
    pub fn with_background(mut self, background: impl Into<Brush>) -> Self {
        self.background = background.into();
        self
    }

    /// Sets the class name.
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Returns the surface rectangle.
    pub fn view_box(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Returns the topmost interactive mark whose bounds contain `point` (surface coordinates),
    /// together with its bounds in surface coordinates.
    ///
    /// Topmost means highest `z_index`, then latest in document order.
    pub fn hit_test(&self, point: Point) -> Option<(&Mark, Rect)> {
        let mut best = None;
        hit_group(&self.root, Vec2::ZERO, point, &mut best);
        best
    }
}

fn hit_group<'a>(
    group: &'a Group,
    origin: Vec2,
    point: Point,
    best: &mut Option<(&'a Mark, Rect)>,
) {
    let offset = origin + group.translate;
    for child in &group.children {
        let mark = match child {
            Node::Group(g) => {
                hit_group(g, offset, point, best);
                continue;
            }
            Node::Mark(m) => m,
        };
        if !mark.interactive {
            continue;
        }
        let Some(bounds) = mark.payload.bounds() else {
            continue;
        };
        let bounds = bounds + offset;
        if !bounds.contains(point) {
            continue;
        }
        if best.is_none_or(|(b, _)| mark.z_index >= b.z_index) {
            *best = Some((mark, bounds));
        }
    }
}
