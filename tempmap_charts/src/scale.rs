// Copyright 2025 the Tempmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Band scales.
//!
//! [`ScaleBand`] maps band indices into a continuous range using the conventional band-scale
//! definition (padding expressed as a fraction of the step, leftover outer space split evenly).
//! [`ScaleOrdinalBand`] adds a keyed, ordered domain on top of it.

extern crate alloc;

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

/// A discrete band scale over `count` bands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`, without padding.
    ///
    /// A reversed range (`range.1 < range.0`) reverses the band order: index `0` maps to the
    /// band nearest `range.0`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Sets inner and outer padding as fractions of the step.
    ///
    /// Inner padding is clamped to `[0, 1]`; outer padding to `>= 0`.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Sets inner and outer padding to the same fraction.
    pub fn with_uniform_padding(self, padding: f64) -> Self {
        self.with_padding(padding, padding)
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let (lo, hi) = self.ordered_range();
        let n = self.count as f64;
        let denom = (n - self.padding_inner + 2.0 * self.padding_outer).max(1.0);
        (hi - lo) / denom
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Returns the range-space start of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (lo, hi) = self.ordered_range();
        let n = self.count as f64;
        let step = self.step();
        let start = lo + (hi - lo - step * (n - self.padding_inner)) * 0.5;
        let slot = if self.is_reversed() {
            self.count.saturating_sub(1).saturating_sub(index)
        } else {
            index
        };
        start + step * slot as f64
    }

    /// Returns the range-space center of the band at `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.x(index) + 0.5 * self.band_width()
    }

    fn is_reversed(&self) -> bool {
        self.range.1 < self.range.0
    }

    fn ordered_range(&self) -> (f64, f64) {
        let (r0, r1) = self.range;
        if r1 < r0 { (r1, r0) } else { (r0, r1) }
    }
}

/// A band scale over an ordered set of distinct keys.
///
/// The domain keeps first-occurrence order; repeated keys are dropped.
#[derive(Clone, Debug)]
pub struct ScaleOrdinalBand<K> {
    domain: Vec<K>,
    index: HashMap<K, usize>,
    band: ScaleBand,
}

impl<K: Copy + Eq + Hash> ScaleOrdinalBand<K> {
    /// Creates a band scale over the distinct keys of `domain`, mapped into `range`.
    pub fn new(domain: impl IntoIterator<Item = K>, range: (f64, f64)) -> Self {
        let mut keys = Vec::new();
        let mut index = HashMap::new();
        for key in domain {
            index.entry(key).or_insert_with(|| {
                keys.push(key);
                keys.len() - 1
            });
        }
        let band = ScaleBand::new(range, keys.len());
        Self {
            domain: keys,
            index,
            band,
        }
    }

    /// Sets inner and outer padding to the same fraction of the step.
    pub fn with_uniform_padding(mut self, padding: f64) -> Self {
        self.band = self.band.with_uniform_padding(padding);
        self
    }

    /// Sets inner and outer padding separately.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.band = self.band.with_padding(inner, outer);
        self
    }

    /// Returns the band start for `key`, or `None` if it is not in the domain.
    pub fn map(&self, key: K) -> Option<f64> {
        self.index_of(key).map(|i| self.band.x(i))
    }

    /// Returns the band center for `key`, or `None` if it is not in the domain.
    pub fn center(&self, key: K) -> Option<f64> {
        self.index_of(key).map(|i| self.band.center(i))
    }

    /// Returns the position of `key` in the domain.
    pub fn index_of(&self, key: K) -> Option<usize> {
        self.index.get(&key).copied()
    }

    /// Returns the distinct keys in domain order.
    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        self.band.band_width()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b) < 1e-9 && (b - a) < 1e-9
    }

    #[test]
    fn unpadded_bands_tile_the_range() {
        let s = ScaleBand::new((0.0, 120.0), 3);
        assert!(close(s.step(), 40.0));
        assert!(close(s.band_width(), 40.0));
        assert!(close(s.x(0), 0.0));
        assert!(close(s.x(1), 40.0));
        assert!(close(s.x(2), 80.0));
    }

    #[test]
    fn outer_padding_is_symmetric() {
        let s = ScaleBand::new((0.0, 120.0), 3).with_uniform_padding(0.15);
        let step = s.step();
        assert!(close(step, 120.0 / 3.15));
        assert!(close(s.band_width(), step * 0.85));
        assert!(close(s.x(0), 0.15 * step));
        assert!(close(s.x(2) + s.band_width(), 120.0 - 0.15 * step));
    }

    #[test]
    fn reversed_range_puts_first_band_at_range_start() {
        let s = ScaleBand::new((100.0, 0.0), 4);
        assert!(close(s.x(0), 75.0));
        assert!(close(s.x(3), 0.0));
        assert!(s.x(0) > s.x(1));
    }

    #[test]
    fn ordinal_domain_drops_repeats_and_keeps_order() {
        let s = ScaleOrdinalBand::new([1990, 1990, 1991, 1989, 1991], (0.0, 30.0));
        assert_eq!(s.domain(), &[1990, 1991, 1989]);
        assert!(close(s.map(1990).expect("in domain"), 0.0));
        assert!(close(s.map(1989).expect("in domain"), 20.0));
        assert!(s.map(2000).is_none());
        assert!(close(s.center(1991).expect("in domain"), 15.0));
    }

    #[test]
    fn empty_domain_has_no_bands() {
        let s = ScaleOrdinalBand::<i32>::new([], (0.0, 30.0));
        assert!(s.domain().is_empty());
        assert!(s.map(0).is_none());
    }
}
