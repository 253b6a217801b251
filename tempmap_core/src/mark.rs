// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks: stable-identity drawing primitives.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};
use smallvec::SmallVec;

/// A stable mark identifier.
///
/// Ids are chosen by the generator (axis, legend, series) so that the same logical mark keeps
/// the same id across renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Wraps a raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives an id for a keyed data row within a namespace.
    ///
    /// The namespace occupies the top 16 bits, the row key the lower 48.
    pub const fn for_row(namespace: u16, row_key: u64) -> Self {
        Self(((namespace as u64) << 48) | (row_key & 0x0000_ffff_ffff_ffff))
    }
}

/// The primitive kind of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned rectangle.
    Rect,
    /// A single line of text.
    Text,
    /// An arbitrary path.
    Path,
}

/// Horizontal text anchor (SVG `text-anchor`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor point.
    Start,
    /// Text is centered on the anchor point.
    Middle,
    /// Text ends at the anchor point.
    End,
}

/// Vertical text baseline (SVG `dominant-baseline`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Alphabetic baseline.
    Alphabetic,
    /// Vertical middle.
    Middle,
    /// Hanging baseline (text hangs below the anchor).
    Hanging,
    /// Ideographic baseline.
    Ideographic,
}

/// `data-*` attributes attached to a mark, as `(name, value)` pairs without the `data-` prefix.
pub type DataAttrs = SmallVec<[(&'static str, String); 3]>;

/// Rectangle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Geometry in the coordinates of the owning group.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// Text payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in the coordinates of the owning group.
    pub pos: Point,
    /// Unshaped text content.
    pub text: String,
    /// Font size in scene units.
    pub font_size: f64,
    /// Rotation in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Path payload.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Path geometry in the coordinates of the owning group.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0` disables stroking.
    pub stroke_width: f64,
}

/// A resolved mark payload.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// Rectangle.
    Rect(RectPayload),
    /// Text.
    Text(TextPayload),
    /// Path.
    Path(PathPayload),
}

impl MarkPayload {
    /// Returns the payload kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Text(_) => MarkKind::Text,
            Self::Path(_) => MarkKind::Path,
        }
    }

    /// Returns geometric bounds for rects and paths.
    ///
    /// Text bounds depend on font metrics and are not known here.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

/// A drawing primitive with stable identity and DOM-style metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable id.
    pub id: MarkId,
    /// Paint order within the owning group; ties keep insertion order.
    pub z_index: i32,
    /// Element id (e.g. `"title"`), unique within a document.
    pub element_id: Option<&'static str>,
    /// Class name (e.g. `"cell"`).
    pub class: Option<&'static str>,
    /// Whether pointer enter/leave events are routed for this mark.
    pub interactive: bool,
    /// `data-*` attributes for inspection.
    pub data: DataAttrs,
    /// Resolved geometry and paint.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark with the given id. The kind defaults to [`MarkKind::Rect`].
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder::new(id)
    }

    /// Returns the mark kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Looks up a `data-*` attribute by name (without the prefix).
    pub fn data_attr(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the text payload, if this is a text mark.
    pub fn as_text(&self) -> Option<&TextPayload> {
        match &self.payload {
            MarkPayload::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the rect payload, if this is a rect mark.
    pub fn as_rect(&self) -> Option<&RectPayload> {
        match &self.payload {
            MarkPayload::Rect(r) => Some(r),
            _ => None,
        }
    }
}

/// Builder for [`Mark`].
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    kind: MarkKind,
    z_index: i32,
    element_id: Option<&'static str>,
    class: Option<&'static str>,
    interactive: bool,
    data: DataAttrs,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    text: String,
    font_size: f64,
    angle: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
    path: BezPath,
    fill: Brush,
    stroke: Brush,
    stroke_width: f64,
}

impl MarkBuilder {
    fn new(id: MarkId) -> Self {
        Self {
            id,
            kind: MarkKind::Rect,
            z_index: 0,
            element_id: None,
            class: None,
            interactive: false,
            data: DataAttrs::new(),
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
            text: String::new(),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            path: BezPath::new(),
            fill: Brush::Solid(Color::BLACK),
            stroke: Brush::Solid(Color::TRANSPARENT),
            stroke_width: 0.0,
        }
    }

    /// Makes this a rectangle mark.
    pub fn rect(mut self) -> Self {
        self.kind = MarkKind::Rect;
        self
    }

    /// Makes this a text mark.
    pub fn text(mut self) -> Self {
        self.kind = MarkKind::Text;
        self
    }

    /// Makes this a path mark.
    pub fn path(mut self) -> Self {
        self.kind = MarkKind::Path;
        self
    }

    /// Sets the paint order.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the element id.
    pub fn element_id(mut self, element_id: &'static str) -> Self {
        self.element_id = Some(element_id);
        self
    }

    /// Sets the class name.
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Marks this mark as a pointer-event target.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Appends a `data-*` attribute.
    pub fn data(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.data.push((name, value.into()));
        self
    }

    /// Sets x (rect origin or text anchor).
    pub fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Sets y (rect origin or text anchor).
    pub fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Sets the rect width.
    pub fn w(mut self, w: f64) -> Self {
        self.w = w;
        self
    }

    /// Sets the rect height.
    pub fn h(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Sets the text content.
    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the font size.
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the text rotation in degrees.
    pub fn angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the text anchor.
    pub fn text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Shorthand for [`TextAnchor::Middle`].
    pub fn text_anchor_middle(self) -> Self {
        self.text_anchor(TextAnchor::Middle)
    }

    /// Sets the text baseline.
    pub fn text_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the path geometry.
    pub fn shape(mut self, path: BezPath) -> Self {
        self.path = path;
        self
    }

    /// Sets a solid fill color.
    pub fn fill(self, color: Color) -> Self {
        self.fill_brush(Brush::Solid(color))
    }

    /// Sets the fill paint.
    pub fn fill_brush(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the stroke paint.
    pub fn stroke_brush(mut self, stroke: impl Into<Brush>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Sets the stroke width.
    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        let payload = match self.kind {
            MarkKind::Rect => MarkPayload::Rect(RectPayload {
                rect: Rect::new(self.x, self.y, self.x + self.w, self.y + self.h),
                fill: self.fill,
            }),
            MarkKind::Text => MarkPayload::Text(TextPayload {
                pos: Point::new(self.x, self.y),
                text: self.text,
                font_size: self.font_size,
                angle: self.angle,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill,
            }),
            MarkKind::Path => MarkPayload::Path(PathPayload {
                path: self.path,
                fill: self.fill,
                stroke: self.stroke,
                stroke_width: self.stroke_width,
            }),
        };
        Mark {
            id: self.id,
            z_index: self.z_index,
            element_id: self.element_id,
            class: self.class,
            interactive: self.interactive,
            data: self.data,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn rect_builder_resolves_geometry() {
        let mark = Mark::builder(MarkId::from_raw(7))
            .rect()
            .x(10.0)
            .y(20.0)
            .w(5.0)
            .h(4.0)
            .build();
        assert_eq!(mark.kind(), MarkKind::Rect);
        assert_eq!(mark.payload.bounds(), Some(Rect::new(10.0, 20.0, 15.0, 24.0)));
    }

    #[test]
    fn data_attrs_keep_insertion_order_and_lookup() {
        let mark = Mark::builder(MarkId::from_raw(1))
            .data("month", "0")
            .data("year", "2000")
            .data("temp", "9.2")
            .build();
        let names: std::vec::Vec<_> = mark.data.iter().map(|(k, _)| *k).collect();
        assert_eq!(names, ["month", "year", "temp"]);
        assert_eq!(mark.data_attr("year"), Some("2000"));
        assert_eq!(mark.data_attr("missing"), None);
    }

    #[test]
    fn text_marks_have_no_geometric_bounds() {
        let mark = Mark::builder(MarkId::from_raw(2))
            .text()
            .content("MONTH")
            .angle(-90.0)
            .build();
        assert!(mark.payload.bounds().is_none());
        assert_eq!(mark.as_text().map(|t| t.text.as_str()), Some("MONTH"));
    }

    #[test]
    fn row_ids_are_namespaced() {
        let a = MarkId::for_row(1, 42);
        let b = MarkId::for_row(2, 42);
        assert_ne!(a, b);
        assert_eq!(a, MarkId::for_row(1, 42));
    }
}
