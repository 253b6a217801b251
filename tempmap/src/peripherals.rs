// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guides: axes, axis labels, title, description, and the color legend.

use kurbo::Point;
use tempmap_charts::{AxisSpec, AxisStyle, ColorLegendSpec, StrokeStyle, TitleSpec, format_fixed};
use tempmap_core::{Group, Mark, MarkId};

use crate::dataset::{Dataset, month_label};
use crate::dimensions::ChartDimensions;
use crate::error::{ChartError, Result};
use crate::scaffold::{ChartDocument, Slot, ids};
use crate::scales::HeatmapScales;
use crate::theme::Theme;

/// Chart title text.
pub const TITLE: &str = "Monthly Global Temperatures";
/// Y axis label text.
pub const Y_AXIS_LABEL: &str = "MONTH";
/// X axis label text.
pub const X_AXIS_LABEL: &str = "YEAR";
/// Number of legend swatches.
pub const LEGEND_CELLS: usize = 5;

/// Draws every guide into its scaffold slot.
pub fn render_peripherals(
    doc: &mut ChartDocument,
    dataset: &Dataset,
    scales: &HeatmapScales,
    dims: &ChartDimensions,
    theme: &Theme,
) -> Result<()> {
    let axis_style = AxisStyle {
        rule: StrokeStyle::solid(theme.foreground, 1.0),
        label_fill: theme.foreground.into(),
        label_font_size: theme.tick_font_size,
        title_fill: theme.foreground.into(),
        title_font_size: theme.axis_title_font_size,
    };

    let y_axis = AxisSpec::left(ids::Y_AXIS, (dims.bounded_height, 0.0))
        .with_band_ticks(&scales.month, 0_u8..12, month_label)
        .with_style(axis_style.clone())
        .with_title(Y_AXIS_LABEL, dims.margin.left - 20.0);
    attach_axis(doc, Slot::YAxis, Slot::YAxisLabel, &y_axis)?;

    let x_axis = AxisSpec::bottom(ids::X_AXIS, (0.0, dims.bounded_width))
        .with_band_ticks(&scales.year, scales.year_ticks.iter().copied(), |y| {
            y.to_string()
        })
        .with_style(axis_style)
        .with_title(X_AXIS_LABEL, dims.margin.bottom / 2.0);
    attach_axis(doc, Slot::XAxis, Slot::XAxisLabel, &x_axis)?;

    let description = dataset
        .description()
        .ok_or_else(|| ChartError::Validation("the dataset has no records".into()))?;
    let heading = TitleSpec::new(MarkId::from_raw(ids::TITLE), TITLE)
        .with_subtitle(description)
        .with_subtitle_gap(5.0)
        .with_font_size(theme.title_font_size)
        .with_subtitle_font_size(theme.description_font_size)
        .with_fill(theme.foreground)
        .marks(Point::new(dims.width / 2.0, 10.0));
    for (slot, mark) in [Slot::Title, Slot::Description].into_iter().zip(heading) {
        fill(doc, slot, mark)?;
    }

    let legend = ColorLegendSpec::from_sequential(ids::LEGEND, &scales.color, LEGEND_CELLS, |v| {
        format_fixed(v, 1)
    })
    .with_swatch_size(dims.legend_width / LEGEND_CELLS as f64, 15.0)
    .with_swatch_padding(5.0)
    .with_font_size(theme.legend_font_size)
    .with_text_fill(theme.foreground);
    slot_group(doc, Slot::Legend)?.extend_marks(legend.marks(0.0, 0.0));

    Ok(())
}

fn attach_axis(
    doc: &mut ChartDocument,
    group: Slot,
    label: Slot,
    axis: &AxisSpec,
) -> Result<()> {
    slot_group(doc, group)?.extend_marks(axis.marks());
    if let Some(title) = axis.title_mark() {
        fill(doc, label, title)?;
    }
    Ok(())
}

fn slot_group(doc: &mut ChartDocument, slot: Slot) -> Result<&mut Group> {
    doc.group_mut(slot)
        .ok_or_else(|| ChartError::Validation(format!("scaffold is missing `{}`", slot.name())))
}

fn fill(doc: &mut ChartDocument, slot: Slot, mark: Mark) -> Result<()> {
    if doc.fill_text(slot, mark) {
        Ok(())
    } else {
        Err(ChartError::Validation(format!(
            "scaffold is missing `{}`",
            slot.name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use tempmap_core::{MarkKind, TextAnchor};

    use super::*;
    use crate::dataset::TemperatureRecord;

    fn rendered() -> (ChartDocument, ChartDimensions) {
        let ds = Dataset {
            base_temperature: 8.66,
            records: (1990..=2011)
                .map(|year| TemperatureRecord {
                    year,
                    month: 0,
                    variance: f64::from(year - 2000) / 10.0,
                })
                .collect(),
        };
        let dims = ChartDimensions::new(1000.0, 500.0);
        let theme = Theme::default();
        let scales = HeatmapScales::build(&ds, &dims).expect("scales");
        let mut doc = ChartDocument::scaffold(&dims, &theme);
        render_peripherals(&mut doc, &ds, &scales, &dims, &theme).expect("guides");
        (doc, dims)
    }

    fn texts(doc: &ChartDocument, slot: Slot) -> Vec<String> {
        doc.group(slot)
            .expect("slot")
            .marks()
            .filter_map(|m| m.as_text())
            .filter(|t| !t.text.is_empty() && t.angle == 0.0)
            .map(|t| t.text.clone())
            .collect()
    }

    #[test]
    fn y_axis_labels_every_month_by_name() {
        let (doc, dims) = rendered();
        let labels = texts(&doc, Slot::YAxis);
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], "January");
        assert_eq!(labels[11], "December");

        let title = doc.text(Slot::YAxisLabel).and_then(|m| m.as_text()).expect("label");
        assert_eq!(title.text, "MONTH");
        assert_eq!(title.angle, -90.0);
        assert_eq!((title.pos.x, title.pos.y), (-70.0, dims.bounded_height / 2.0));
        assert_eq!(title.font_size, 16.0);
    }

    #[test]
    fn x_axis_ticks_only_decades() {
        let (doc, dims) = rendered();
        let labels: Vec<String> = texts(&doc, Slot::XAxis)
            .into_iter()
            .filter(|t| t != "YEAR")
            .collect();
        assert_eq!(labels, ["1990", "2000", "2010"]);

        let title = doc.text(Slot::XAxisLabel).and_then(|m| m.as_text()).expect("label");
        assert_eq!(title.text, "YEAR");
        assert_eq!((title.pos.x, title.pos.y), (dims.bounded_width / 2.0, 60.0));
    }

    #[test]
    fn heading_reports_year_range_and_base() {
        let (doc, dims) = rendered();
        let title = doc.text(Slot::Title).and_then(|m| m.as_text()).expect("title");
        assert_eq!(title.text, TITLE);
        assert_eq!((title.pos.x, title.pos.y), (dims.width / 2.0, 10.0));
        assert_eq!(title.anchor, TextAnchor::Middle);

        let desc = doc.text(Slot::Description).and_then(|m| m.as_text()).expect("desc");
        assert_eq!(desc.text, "1990 - 2011: base temperature 8.66°C");
        assert_eq!(desc.pos.y, 15.0);
    }

    #[test]
    fn legend_has_five_swatches_with_one_decimal_labels() {
        let (doc, _) = rendered();
        let legend = doc.group(Slot::Legend).expect("legend");
        let swatches: Vec<_> = legend
            .marks()
            .filter(|m| m.kind() == MarkKind::Rect)
            .collect();
        assert_eq!(swatches.len(), 5);
        let first = swatches[0].payload.bounds().expect("bounds");
        assert_eq!((first.width(), first.height()), (40.0, 15.0));

        let labels: Vec<String> = legend
            .marks()
            .filter_map(|m| m.as_text())
            .map(|t| t.text.clone())
            .collect();
        assert_eq!(labels.len(), 5);
        assert_eq!(labels.first().map(String::as_str), Some("7.7"));
        assert_eq!(labels.last().map(String::as_str), Some("9.8"));
    }
}
