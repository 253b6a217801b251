// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML page export.
//!
//! The page carries the heading, the inline SVG, and the shared `#tooltip` element. A small
//! inline script wires cell `mouseenter`/`mouseleave` to the tooltip with the same offsets and
//! text formats as [`crate::interaction::Tooltip`].

use peniko::Brush;
use tempmap_charts::MONTH_NAMES;
use tempmap_core::Mark;

use crate::error::ChartError;
use crate::interaction::{TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y, TOOLTIP_TRANSFORM, Tooltip};
use crate::peripherals::TITLE;
use crate::render::Chart;
use crate::scaffold::Slot;
use crate::svg::{escape_xml, svg_paint, to_svg_element};
use crate::theme::Theme;

/// Renders the full chart page.
pub fn chart_page(chart: &Chart) -> String {
    let theme = &chart.theme;
    let mut body = String::new();
    for slot in [Slot::Title, Slot::Description] {
        if let Some(mark) = chart.document.text(slot) {
            body.push_str(&heading_element(slot, mark));
        }
    }
    body.push_str(&to_svg_element(&chart.document.surface));
    body.push_str(&tooltip_element(chart.tooltip()));

    let mut out = page_head(TITLE, theme);
    out.push_str("<div id=\"wrapper\">\n");
    out.push_str(&body);
    out.push_str("</div>\n");
    out.push_str(&hover_script());
    out.push_str("</body>\n</html>\n");
    out
}

/// Renders a page that reports `error` in place of the chart.
pub fn error_page(error: &ChartError) -> String {
    let theme = Theme::default();
    let mut out = page_head(TITLE, &theme);
    out.push_str(&format!(
        "<div id=\"wrapper\">\n<div id=\"error\" class=\"error\" data-kind=\"{}\">\n\
         <h1>Chart unavailable</h1>\n<p>{}</p>\n</div>\n</div>\n",
        error.kind(),
        escape_xml(&error.to_string())
    ));
    out.push_str("</body>\n</html>\n");
    out
}

fn page_head(title: &str, theme: &Theme) -> String {
    let (background, _) = svg_paint(&Brush::Solid(theme.background));
    let (foreground, _) = svg_paint(&Brush::Solid(theme.foreground));
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n\
         body {{ font-family: sans-serif; color: {foreground}; background: #2b1d18; }}\n\
         #wrapper {{ display: flex; flex-direction: column; align-items: center; }}\n\
         #title, #description {{ margin: 4px 0; text-align: center; }}\n\
         .svg {{ background: {background}; }}\n\
         #tooltip {{ position: absolute; pointer-events: none; padding: 6px 10px; \
         background: rgba(0, 0, 0, 0.8); border-radius: 4px; text-align: center; }}\n\
         #tooltip span {{ display: block; }}\n\
         .error {{ padding: 2em; text-align: center; }}\n\
         </style>\n</head>\n<body>\n",
        title = escape_xml(title),
    )
}

fn heading_element(slot: Slot, mark: &Mark) -> String {
    let tag = match slot {
        Slot::Title => "h1",
        _ => "h2",
    };
    let Some(text) = mark.as_text() else {
        return String::new();
    };
    let (fill, _) = svg_paint(&text.fill);
    format!(
        "<{tag} id=\"{id}\" style=\"color: {fill}; font-size: {size}px\">{content}</{tag}>\n",
        id = slot.name(),
        size = text.font_size,
        content = escape_xml(&text.text),
    )
}

fn tooltip_element(tooltip: &Tooltip) -> String {
    let data_year = tooltip
        .data_year
        .map(|y| format!(" data-year=\"{y}\""))
        .unwrap_or_default();
    format!(
        "<div id=\"tooltip\"{data_year} style=\"opacity: {opacity}; left: {left}px; top: {top}px; \
         transform: {transform}\">\n<span id=\"time\">{time}</span>\n<span id=\"temp\">{temp}</span>\n</div>\n",
        opacity = tooltip.opacity,
        left = tooltip.left,
        top = tooltip.top,
        transform = tooltip.transform,
        time = escape_xml(&tooltip.time),
        temp = escape_xml(&tooltip.temp),
    )
}

fn hover_script() -> String {
    let months = MONTH_NAMES
        .iter()
        .map(|m| format!("'{m}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "<script>\n\
         const MONTHS = [{months}];\n\
         const tooltip = document.getElementById('tooltip');\n\
         document.querySelectorAll('.cell').forEach((cell) => {{\n\
         \x20 cell.addEventListener('mouseenter', (e) => {{\n\
         \x20   tooltip.style.opacity = 1;\n\
         \x20   tooltip.style.left = (e.pageX + ({dx})) + 'px';\n\
         \x20   tooltip.style.top = (e.pageY + ({dy})) + 'px';\n\
         \x20   tooltip.style.transform = '{transform}';\n\
         \x20   tooltip.setAttribute('data-year', cell.dataset.year);\n\
         \x20   document.getElementById('time').textContent =\n\
         \x20     MONTHS[Number(cell.dataset.month)] + ' ' + cell.dataset.year;\n\
         \x20   document.getElementById('temp').textContent = cell.dataset.temp + '°C';\n\
         \x20 }});\n\
         \x20 cell.addEventListener('mouseleave', () => {{\n\
         \x20   tooltip.style.opacity = 0;\n\
         \x20 }});\n\
         }});\n\
         </script>\n",
        dx = TOOLTIP_OFFSET_X,
        dy = TOOLTIP_OFFSET_Y,
        transform = TOOLTIP_TRANSFORM,
    )
}
