// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential color scales.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A piecewise-linear color ramp over evenly spaced sRGB stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorRamp {
    stops: &'static [[u8; 3]],
}

impl ColorRamp {
    /// The viridis colormap (perceptually uniform), sampled at ten evenly spaced stops.
    pub const VIRIDIS: Self = Self {
        stops: &[
            [0x44, 0x01, 0x54],
            [0x48, 0x28, 0x78],
            [0x3e, 0x4a, 0x89],
            [0x31, 0x68, 0x8e],
            [0x26, 0x82, 0x8e],
            [0x1f, 0x9e, 0x89],
            [0x35, 0xb7, 0x79],
            [0x6d, 0xcd, 0x59],
            [0xb4, 0xde, 0x2c],
            [0xfd, 0xe7, 0x25],
        ],
    };

    /// Creates a ramp from explicit stops. An empty slice samples as black.
    pub const fn from_stops(stops: &'static [[u8; 3]]) -> Self {
        Self { stops }
    }

    /// Samples the ramp at `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> Color {
        let n = self.stops.len();
        match n {
            0 => return Color::BLACK,
            1 => return rgb(self.stops[0]),
            _ => {}
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let pos = t * (n - 1) as f64;
        let i = index_below(pos).min(n - 2);
        let f = pos - i as f64;
        let [r0, g0, b0] = self.stops[i];
        let [r1, g1, b1] = self.stops[i + 1];
        Color::from_rgb8(lerp_u8(r0, r1, f), lerp_u8(g0, g1, f), lerp_u8(b0, b1, f))
    }
}

/// A continuous scale from a numeric domain to colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleSequential {
    domain: (f64, f64),
    ramp: ColorRamp,
}

impl ScaleSequential {
    /// Creates a scale over `domain` using `ramp`.
    pub fn new(domain: (f64, f64), ramp: ColorRamp) -> Self {
        Self { domain, ramp }
    }

    /// Creates a viridis scale over `domain`.
    pub fn viridis(domain: (f64, f64)) -> Self {
        Self::new(domain, ColorRamp::VIRIDIS)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the normalized position of `v` in the domain.
    ///
    /// A degenerate domain normalizes every value to `0`.
    pub fn normalize(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        if d1 == d0 { 0.0 } else { (v - d0) / (d1 - d0) }
    }

    /// Maps a domain value to a color.
    pub fn map(&self, v: f64) -> Color {
        self.ramp.sample(self.normalize(v))
    }

    /// Returns `count` evenly spaced values from the domain start to the domain end, inclusive.
    pub fn cell_values(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        match count {
            0 => Vec::new(),
            1 => alloc::vec![d0],
            _ => {
                let step = (d1 - d0) / (count - 1) as f64;
                (0..count).map(|i| d0 + step * i as f64).collect()
            }
        }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgb8(r, g, b)
}

fn index_below(pos: f64) -> usize {
    let v = pos.floor().clamp(0.0, 255.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "value is clamped to a small non-negative range"
    )]
    {
        v as usize
    }
}

fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let v = (f64::from(a) + (f64::from(b) - f64::from(a)) * t)
        .round()
        .clamp(0.0, 255.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the u8 range")]
    {
        v as u8
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn rgba(c: Color) -> (u8, u8, u8) {
        let c = c.to_rgba8();
        (c.r, c.g, c.b)
    }

    #[test]
    fn viridis_endpoints_match_stops() {
        let s = ScaleSequential::viridis((1.7, 13.9));
        assert_eq!(rgba(s.map(1.7)), (0x44, 0x01, 0x54));
        assert_eq!(rgba(s.map(13.9)), (0xfd, 0xe7, 0x25));
    }

    #[test]
    fn out_of_domain_values_clamp() {
        let s = ScaleSequential::viridis((0.0, 1.0));
        assert_eq!(rgba(s.map(-5.0)), rgba(s.map(0.0)));
        assert_eq!(rgba(s.map(5.0)), rgba(s.map(1.0)));
    }

    #[test]
    fn midpoints_interpolate_between_stops() {
        let ramp = ColorRamp::from_stops(&[[0, 0, 0], [200, 100, 50]]);
        assert_eq!(rgba(ramp.sample(0.5)), (100, 50, 25));
    }

    #[test]
    fn degenerate_domain_maps_to_ramp_start() {
        let s = ScaleSequential::viridis((9.2, 9.2));
        assert_eq!(s.normalize(9.2), 0.0);
        assert_eq!(rgba(s.map(9.2)), (0x44, 0x01, 0x54));
    }

    #[test]
    fn cell_values_span_domain_inclusively() {
        let s = ScaleSequential::viridis((2.0, 10.0));
        assert_eq!(s.cell_values(5), [2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(s.cell_values(1), [2.0]);
        assert!(s.cell_values(0).is_empty());
    }
}
