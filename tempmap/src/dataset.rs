// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The temperature dataset: wire shape, parsed records, and derived values.
//!
//! The feed is `{ "baseTemperature": number, "monthlyVariance": [{ year, month, variance }] }`
//! with 1-based months. Parsing normalizes months to `0..=11`; every other derived value
//! (temperature, year domain, color extent) is a pure function of a record and the base.

use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ChartError, Result};

/// A temperature rounded to one decimal, stored as whole tenths of a degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tenths(pub i32);

impl Tenths {
    /// Rounds `celsius` to one decimal, half away from zero.
    pub fn from_celsius(celsius: f64) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "dataset temperatures are small and finite"
        )]
        let tenths = (celsius * 10.0).round() as i32;
        Self(tenths)
    }

    /// Returns the value in degrees.
    pub fn celsius(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for Tenths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{}", abs / 10, abs % 10)
    }
}

/// One month of one year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureRecord {
    /// Calendar year.
    pub year: i32,
    /// Month index, `0` (January) to `11` (December).
    pub month: u8,
    /// Deviation from the base temperature, °C.
    pub variance: f64,
}

impl TemperatureRecord {
    /// Absolute temperature for this record given the dataset base.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        self.variance + base_temperature
    }

    /// Absolute temperature rounded to one decimal.
    pub fn rounded_temperature(&self, base_temperature: f64) -> Tenths {
        Tenths::from_celsius(self.temperature(base_temperature))
    }
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    year: i32,
    month: i64,
    variance: f64,
}

/// The loaded dataset. Read-only after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    /// Base temperature, °C.
    pub base_temperature: f64,
    /// Records in feed order.
    pub records: Vec<TemperatureRecord>,
}

impl Dataset {
    /// Parses the feed JSON.
    ///
    /// Invalid JSON or a wrong top-level shape is [`ChartError::DataUnavailable`]; a malformed
    /// record is [`ChartError::Validation`]. An empty record list is accepted here and rejected
    /// by [`Dataset::validate`].
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| ChartError::DataUnavailable(format!("invalid JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Parses an already-decoded JSON document.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut root) = value else {
            return Err(ChartError::DataUnavailable(
                "expected a JSON object at the top level".into(),
            ));
        };
        let base_temperature = root
            .get("baseTemperature")
            .and_then(Value::as_f64)
            .ok_or_else(|| {
                ChartError::DataUnavailable("`baseTemperature` is missing or not a number".into())
            })?;
        let Some(Value::Array(raw)) = root.remove("monthlyVariance") else {
            return Err(ChartError::DataUnavailable(
                "`monthlyVariance` is missing or not an array".into(),
            ));
        };
        if !base_temperature.is_finite() {
            return Err(ChartError::Validation(
                "`baseTemperature` is not finite".into(),
            ));
        }

        let records = raw
            .into_iter()
            .enumerate()
            .map(|(i, v)| parse_record(i, v))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            base_temperature,
            records,
        })
    }

    /// Checks that the records can be charted: at least one record and no repeated
    /// `(year, month)` cell.
    pub fn validate(&self) -> Result<()> {
        if self.records.is_empty() {
            return Err(ChartError::Validation("the dataset has no records".into()));
        }
        let mut seen = HashSet::with_capacity(self.records.len());
        for r in &self.records {
            if !seen.insert((r.year, r.month)) {
                return Err(ChartError::Validation(format!(
                    "duplicate record for {} {}",
                    month_label(r.month),
                    r.year
                )));
            }
        }
        Ok(())
    }

    /// Rounded temperature of `record` under this dataset's base.
    pub fn rounded_temperature(&self, record: &TemperatureRecord) -> Tenths {
        record.rounded_temperature(self.base_temperature)
    }

    /// Distinct years in first-occurrence order.
    pub fn years(&self) -> Vec<i32> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.year)
            .filter(|y| seen.insert(*y))
            .collect()
    }

    /// Smallest and largest year, or `None` for an empty dataset.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Smallest and largest rounded temperature, or `None` for an empty dataset.
    pub fn temperature_extent(&self) -> Option<(Tenths, Tenths)> {
        let temps = self.records.iter().map(|r| self.rounded_temperature(r));
        let min = temps.clone().min()?;
        let max = temps.max()?;
        Some((min, max))
    }

    /// The chart description: `"{min_year} - {max_year}: base temperature {base}°C"`.
    pub fn description(&self) -> Option<String> {
        let (min, max) = self.year_range()?;
        Some(format!(
            "{min} - {max}: base temperature {}°C",
            self.base_temperature
        ))
    }
}

fn parse_record(index: usize, value: Value) -> Result<TemperatureRecord> {
    let raw: RawRecord = serde_json::from_value(value)
        .map_err(|e| ChartError::Validation(format!("record {index}: {e}")))?;
    let month = u8::try_from(raw.month)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| {
            ChartError::Validation(format!(
                "record {index}: month {} is outside 1..=12",
                raw.month
            ))
        })?;
    if !raw.variance.is_finite() {
        return Err(ChartError::Validation(format!(
            "record {index}: variance is not finite"
        )));
    }
    Ok(TemperatureRecord {
        year: raw.year,
        month: month - 1,
        variance: raw.variance,
    })
}

/// Full month name for a 0-based month index (`"January"` for `0`).
///
/// Indices past December fall back to the number itself.
pub fn month_label(month: u8) -> String {
    tempmap_charts::month_name(month).map_or_else(|| month.to_string(), str::to_owned)
}
