// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization of the scene graph.
//!
//! Groups become `<g>` elements with their translation; within a group, children are painted in
//! `(z_index, document order)` order, with nested groups at z `0`.

use kurbo::Vec2;
use peniko::Brush;
use tempmap_core::{Group, Mark, MarkPayload, Node, Surface, TextAnchor, TextBaseline};

/// Serializes `surface` as a standalone SVG document.
pub fn to_svg_document(surface: &Surface) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    write_surface(&mut out, surface, true);
    out
}

/// Serializes `surface` as an `<svg>` element (for embedding in HTML).
pub fn to_svg_element(surface: &Surface) -> String {
    let mut out = String::new();
    write_surface(&mut out, surface, false);
    out
}

fn write_surface(out: &mut String, surface: &Surface, standalone: bool) {
    out.push_str("<svg");
    if standalone {
        out.push_str(r#" xmlns="http://www.w3.org/2000/svg""#);
    }
    if let Some(class) = surface.class {
        out.push_str(&format!(r#" class="{}""#, escape_xml(class)));
    }
    let view_box = surface.view_box();
    out.push_str(&format!(
        r#" width="{}" height="{}" viewBox="{} {} {} {}""#,
        surface.width,
        surface.height,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height()
    ));
    let (background, _) = svg_paint(&surface.background);
    out.push_str(&format!(r#" style="background: {background}">"#));
    out.push('\n');

    out.push_str(&format!(
        r#"<rect class="background" x="0" y="0" width="{}" height="{}""#,
        surface.width, surface.height
    ));
    write_paint_attr(out, "fill", &surface.background);
    out.push_str("/>\n");

    write_children(out, &surface.root);
    out.push_str("</svg>\n");
}

fn write_group(out: &mut String, group: &Group) {
    out.push_str("<g");
    if let Some(id) = group.element_id {
        out.push_str(&format!(r#" id="{}""#, escape_xml(id)));
    }
    if let Some(class) = group.class {
        out.push_str(&format!(r#" class="{}""#, escape_xml(class)));
    }
    if group.translate != Vec2::ZERO {
        out.push_str(&format!(
            r#" transform="translate({} {})""#,
            group.translate.x, group.translate.y
        ));
    }
    out.push_str(">\n");
    write_children(out, group);
    out.push_str("</g>\n");
}

fn write_children(out: &mut String, group: &Group) {
    let mut order: Vec<(i32, &Node)> = group
        .children
        .iter()
        .map(|child| match child {
            Node::Group(_) => (0, child),
            Node::Mark(m) => (m.z_index, child),
        })
        .collect();
    order.sort_by_key(|(z, _)| *z);

    for (_, child) in order {
        match child {
            Node::Group(g) => write_group(out, g),
            Node::Mark(m) => write_mark(out, m),
        }
    }
}

fn write_mark(out: &mut String, mark: &Mark) {
    match &mark.payload {
        MarkPayload::Rect(r) => {
            out.push_str("<rect");
            write_identity(out, mark);
            out.push_str(&format!(
                r#" x="{}" y="{}" width="{}" height="{}""#,
                r.rect.x0,
                r.rect.y0,
                r.rect.width(),
                r.rect.height(),
            ));
            write_paint_attr(out, "fill", &r.fill);
            out.push_str("/>\n");
        }
        MarkPayload::Text(t) => {
            let baseline = match t.baseline {
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Hanging => "hanging",
                TextBaseline::Ideographic => "ideographic",
            };
            out.push_str("<text");
            write_identity(out, mark);
            out.push_str(&format!(
                r#" x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                t.pos.x, t.pos.y, t.font_size, baseline
            ));
            if t.angle != 0.0 {
                out.push_str(&format!(
                    r#" transform="rotate({} {} {})""#,
                    t.angle, t.pos.x, t.pos.y
                ));
            }
            out.push_str(match t.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            write_paint_attr(out, "fill", &t.fill);
            out.push('>');
            out.push_str(&escape_xml(&t.text));
            out.push_str("</text>\n");
        }
        MarkPayload::Path(p) => {
            let d = p.path.to_svg();
            out.push_str("<path");
            write_identity(out, mark);
            out.push_str(&format!(r#" d="{d}""#));
            write_paint_attr(out, "fill", &p.fill);
            if p.stroke_width > 0.0 {
                write_paint_attr(out, "stroke", &p.stroke);
                out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
            }
            out.push_str("/>\n");
        }
    }
}

/// Writes `id`, `class`, and `data-*` attributes.
fn write_identity(out: &mut String, mark: &Mark) {
    if let Some(id) = mark.element_id {
        out.push_str(&format!(r#" id="{}""#, escape_xml(id)));
    }
    if let Some(class) = mark.class {
        out.push_str(&format!(r#" class="{}""#, escape_xml(class)));
    }
    for (name, value) in &mark.data {
        out.push_str(&format!(r#" data-{name}="{}""#, escape_xml(value)));
    }
}

/// Returns a CSS color for `brush` and, if not opaque, its opacity.
pub(crate) fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

/// Escapes text for XML/HTML content and attribute values.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
