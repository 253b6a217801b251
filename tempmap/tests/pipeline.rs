// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end rendering: dataset in, scene graph, hover state, and exports out.

use kurbo::Point;
use tempmap::{
    Chart, ChartDimensions, ChartError, Dataset, HoverTransition, OutputFormat, PointerEvent,
    Slot, Tenths, export,
};
use tempmap_core::MarkKind;

fn scenario() -> Dataset {
    Dataset::from_json_slice(
        br#"{"baseTemperature": 8.66, "monthlyVariance": [{"year": 2000, "month": 1, "variance": 0.5}]}"#,
    )
    .expect("scenario dataset")
}

fn decades() -> Dataset {
    let mut records = Vec::new();
    for year in 1995..=2021 {
        for month in 1..=12 {
            let variance = f64::from((year - 2000) * 12 + month) / 100.0;
            records.push(format!(
                r#"{{"year": {year}, "month": {month}, "variance": {variance}}}"#
            ));
        }
    }
    let json = format!(
        r#"{{"baseTemperature": 8.66, "monthlyVariance": [{}]}}"#,
        records.join(",")
    );
    Dataset::from_json_slice(json.as_bytes()).expect("decades dataset")
}

fn dims() -> ChartDimensions {
    ChartDimensions::for_viewport(1280.0)
}

#[test]
fn single_record_scenario() {
    let dataset = scenario();
    assert_eq!(dataset.records[0].month, 0);

    let chart = Chart::render(&dataset, dims()).expect("chart");
    let (&id, datum) = chart.cells().iter().next().expect("one cell");
    assert_eq!(chart.cells().len(), 1);
    assert_eq!(datum.month, 0);
    assert_eq!(datum.year, 2000);
    assert_eq!(datum.temperature, Tenths(92));

    let cells = chart.document.group(Slot::Cells).expect("cells");
    let mark = cells.marks().find(|m| m.id == id).expect("cell mark");
    assert_eq!(mark.data_attr("temp"), Some("9.2"));

    let description = chart
        .document
        .text(Slot::Description)
        .and_then(|m| m.as_text())
        .expect("description");
    assert!(description
        .text
        .contains("2000 - 2000: base temperature 8.66°C"));
}

#[test]
fn empty_dataset_produces_no_chart() {
    let dataset =
        Dataset::from_json_slice(br#"{"baseTemperature": 8.66, "monthlyVariance": []}"#)
            .expect("parses");
    let err = Chart::render(&dataset, dims()).expect_err("no records");
    assert!(matches!(err, ChartError::Validation(_)), "{err}");
}

#[test]
fn repeated_cells_produce_no_chart() {
    let dataset = Dataset::from_json_slice(
        br#"{"baseTemperature": 8.66, "monthlyVariance": [
            {"year": 2000, "month": 1, "variance": 0.5},
            {"year": 2000, "month": 1, "variance": 0.7}
        ]}"#,
    )
    .expect("parses");
    let err = Chart::render(&dataset, dims()).expect_err("duplicate cell");
    assert!(matches!(err, ChartError::Validation(_)), "{err}");
}

#[test]
fn hovering_shows_and_hides_the_tooltip() {
    let dataset = scenario();
    let mut chart = Chart::render(&dataset, dims()).expect("chart");
    let (&id, datum) = chart.cells().iter().next().expect("one cell");
    let anchor = chart.cell_anchor(datum).expect("anchor");

    let event = PointerEvent {
        position: anchor,
        page: Point::new(400.0, 300.0),
    };
    assert!(chart.pointer_enter(id, &event));
    let tooltip = chart.tooltip();
    assert_eq!(tooltip.opacity, 1.0);
    assert_eq!(tooltip.time, "January 2000");
    assert_eq!(tooltip.temp, "9.2°C");
    assert_eq!(tooltip.data_year, Some(2000));
    assert_eq!((tooltip.left, tooltip.top), (395.0, 255.0));
    assert_eq!(tooltip.anchor, Some(anchor));

    assert!(chart.pointer_leave(id));
    assert_eq!(chart.tooltip().opacity, 0.0);
}

#[test]
fn pointer_move_emits_enter_and_leave_transitions() {
    let dataset = decades();
    let mut chart = Chart::render(&dataset, dims()).expect("chart");

    let pick = |chart: &Chart, year: i32, month: u8| {
        let (&id, datum) = chart
            .cells()
            .iter()
            .find(|(_, d)| d.year == year && d.month == month)
            .expect("cell");
        (id, chart.cell_anchor(datum).expect("anchor"))
    };
    let (a, a_center) = pick(&chart, 2000, 0);
    let (b, b_center) = pick(&chart, 2010, 6);

    assert_eq!(
        chart.pointer_move(&PointerEvent::at(a_center)),
        [HoverTransition::Enter(a)]
    );
    assert_eq!(chart.hovered(), Some(a));
    assert!(chart.pointer_move(&PointerEvent::at(a_center)).is_empty());
    assert_eq!(chart.tooltip().time, "January 2000");

    assert_eq!(
        chart.pointer_move(&PointerEvent::at(b_center)),
        [HoverTransition::Leave(a), HoverTransition::Enter(b)]
    );
    assert_eq!(chart.tooltip().time, "July 2010");

    assert_eq!(
        chart.pointer_move(&PointerEvent::at(Point::new(1.0, 1.0))),
        [HoverTransition::Leave(b)]
    );
    assert!(!chart.tooltip().is_visible());
}

#[test]
fn scales_and_cells_honor_domain_invariants() {
    let dataset = decades();
    let chart = Chart::render(&dataset, dims()).expect("chart");

    assert!(dataset.records.iter().all(|r| r.month <= 11));

    let years = chart.scales.year.domain();
    assert_eq!(years.first(), Some(&1995));
    assert_eq!(years.len(), 27);
    assert_eq!(chart.scales.year_ticks, [2000, 2010, 2020]);

    let (lo, hi) = chart.scales.color.domain();
    for datum in chart.cells().values() {
        let t = datum.temperature.celsius();
        assert!(lo <= t && t <= hi, "{t} outside [{lo}, {hi}]");
    }
    assert_eq!(chart.cells().len(), dataset.records.len());

    let cells = chart.document.group(Slot::Cells).expect("cells");
    assert!(cells.marks().all(|m| m.kind() == MarkKind::Rect && m.interactive));
}

#[test]
fn rendering_is_idempotent() {
    let dataset = decades();
    let a = Chart::render(&dataset, dims()).expect("first");
    let b = Chart::render(&dataset, dims()).expect("second");
    assert_eq!(a.document, b.document);
    assert_eq!(a.cells(), b.cells());
}

#[test]
fn exports_carry_ids_and_inspection_attributes() {
    let chart = Chart::render(&scenario(), dims()).expect("chart");

    let page = export(&chart, OutputFormat::Html);
    for needle in [
        r#"id="title""#,
        r#"id="description""#,
        r#"id="x-axis""#,
        r#"id="y-axis""#,
        r#"id="legend""#,
        r#"id="tooltip""#,
        r#"class="cell""#,
        r#"data-month="0""#,
        r#"data-year="2000""#,
        r#"data-temp="9.2""#,
        "Monthly Global Temperatures",
    ] {
        assert!(page.contains(needle), "missing {needle}");
    }

    let svg = export(&chart, OutputFormat::Svg);
    assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    assert!(svg.contains(r#"id="y-axis-label""#));
    assert!(!svg.contains("<script"));

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chart.svg");
    std::fs::write(&path, &svg).expect("write");
    assert_eq!(std::fs::read_to_string(&path).expect("read"), svg);
}
