// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for guide labels.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats `v` with exactly `decimals` fractional digits.
///
/// Rounds half away from zero (`0.25` → `"0.3"`), and never prints a negative zero.
pub fn format_fixed(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let scale = (0..decimals).fold(1.0_f64, |acc, _| acc * 10.0);
    let mut rounded = (v * scale).round() / scale;
    if rounded == 0.0 {
        rounded = 0.0;
    }
    format!("{rounded:.decimals$}")
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn pads_and_rounds_to_requested_precision() {
        assert_eq!(format_fixed(8.66, 1), "8.7");
        assert_eq!(format_fixed(2.0, 1), "2.0");
        assert_eq!(format_fixed(0.25, 1), "0.3");
        assert_eq!(format_fixed(-0.04, 1), "0.0");
        assert_eq!(format_fixed(13.888, 2), "13.89");
        assert_eq!(format_fixed(7.5, 0), "8");
    }
}
