// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Heat-map cells: one interactive rect per record.

use std::collections::HashMap;

use kurbo::Rect;
use tempmap_charts::RectMarkSpec;
use tempmap_core::{Group, MarkId};

use crate::dataset::{Dataset, TemperatureRecord, Tenths};
use crate::scaffold::ids;
use crate::scales::HeatmapScales;

/// What a cell mark represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellDatum {
    /// Month index, `0..=11`.
    pub month: u8,
    /// Year.
    pub year: i32,
    /// Rounded temperature.
    pub temperature: Tenths,
}

/// Cell metadata keyed by mark id.
pub type CellIndex = HashMap<MarkId, CellDatum>;

/// Stable mark id of the cell for `(year, month)`.
pub fn cell_id(year: i32, month: u8) -> MarkId {
    let key = (u64::from(year.cast_unsigned()) << 8) | u64::from(month);
    MarkId::for_row(ids::CELL_NAMESPACE, key)
}

/// Appends one cell per record (in record order) to `cells` and returns their metadata.
///
/// Records whose year or month is outside the scales' domains are skipped.
pub fn render_cells(dataset: &Dataset, scales: &HeatmapScales, cells: &mut Group) -> CellIndex {
    let band_w = scales.year.band_width();
    let band_h = scales.month.band_width();
    let mut index = CellIndex::with_capacity(dataset.records.len());

    for record in &dataset.records {
        let Some((x, y)) = cell_origin(scales, record) else {
            continue;
        };
        let datum = CellDatum {
            month: record.month,
            year: record.year,
            temperature: dataset.rounded_temperature(record),
        };
        let id = cell_id(record.year, record.month);
        cells.push_mark(
            RectMarkSpec::new(id, Rect::new(x, y, x + band_w, y + band_h))
                .with_fill(scales.fill(datum.temperature))
                .with_class("cell")
                .with_interactive(true)
                .with_data("month", datum.month.to_string())
                .with_data("year", datum.year.to_string())
                .with_data("temp", datum.temperature.to_string())
                .mark(),
        );
        index.insert(id, datum);
    }
    index
}

fn cell_origin(scales: &HeatmapScales, record: &TemperatureRecord) -> Option<(f64, f64)> {
    Some((
        scales.year.map(record.year)?,
        scales.month.map(record.month)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::ChartDimensions;

    fn sample() -> Dataset {
        Dataset {
            base_temperature: 8.66,
            records: vec![
                TemperatureRecord {
                    year: 2000,
                    month: 0,
                    variance: 0.5,
                },
                TemperatureRecord {
                    year: 2001,
                    month: 6,
                    variance: -1.0,
                },
            ],
        }
    }

    #[test]
    fn one_cell_per_record_with_inspection_attributes() {
        let ds = sample();
        let dims = ChartDimensions::new(800.0, 500.0);
        let scales = HeatmapScales::build(&ds, &dims).expect("scales");
        let mut cells = Group::new();
        let index = render_cells(&ds, &scales, &mut cells);

        assert_eq!(cells.mark_count(), 2);
        assert_eq!(index.len(), 2);

        let first = cells.marks().next().expect("first cell");
        assert_eq!(first.class, Some("cell"));
        assert!(first.interactive);
        assert_eq!(first.data_attr("month"), Some("0"));
        assert_eq!(first.data_attr("year"), Some("2000"));
        assert_eq!(first.data_attr("temp"), Some("9.2"));

        let rect = first.as_rect().expect("rect").rect;
        assert_eq!(rect.x0, scales.year.map(2000).expect("year"));
        assert_eq!(rect.y0, scales.month.map(0).expect("month"));
        assert!((rect.width() - scales.year.band_width()).abs() < 1e-9);
        assert!((rect.height() - scales.month.band_width()).abs() < 1e-9);
    }

    #[test]
    fn cell_ids_are_unique_per_year_and_month() {
        assert_ne!(cell_id(2000, 0), cell_id(2000, 1));
        assert_ne!(cell_id(2000, 0), cell_id(2001, 0));
        assert_eq!(cell_id(1753, 11), cell_id(1753, 11));
    }
}
