// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate mapping scales.
//!
//! The chart views need only two mappings: a linear scale for values and a
//! band scale for category positions. Both are plain arithmetic with guards
//! for degenerate domains, so the views stay total over degenerate data.

extern crate alloc;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-width domain maps everything to the range start.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

/// A discrete band scale for categorical positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    /// Creates a new band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the x-position for the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }

    /// Returns the center x-position of the band at `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.x(index) + self.band_width() * 0.5
    }
}

/// Infers a `(min, max)` domain over an iterator of values.
///
/// Non-finite values are ignored. Returns `None` when no finite values are
/// present.
pub fn infer_domain<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn linear_maps_endpoints_to_range() {
        let s = LinearScale::new((0.0, 10.0), (100.0, 0.0));
        assert_eq!(s.map(0.0), 100.0);
        assert_eq!(s.map(10.0), 0.0);
        assert_eq!(s.map(5.0), 50.0);
    }

    #[test]
    fn degenerate_domains_map_to_the_range_start() {
        let s = LinearScale::new((3.0, 3.0), (0.0, 50.0));
        assert_eq!(s.map(3.0), 0.0);
        assert_eq!(s.map(100.0), 0.0);
    }

    #[test]
    fn band_positions_are_monotonic() {
        let band = BandScale::new((0.0, 120.0), 4);
        assert!(band.x(0) < band.x(1));
        assert!(band.x(1) < band.x(2));
        assert!(band.center(0) > band.x(0));
    }

    #[test]
    fn domain_inference_skips_non_finite_values() {
        let domain = infer_domain(vec![1.0, f64::NAN, 3.0, f64::INFINITY]);
        assert_eq!(domain, Some((1.0, 3.0)));
        assert_eq!(infer_domain(vec![f64::NAN]), None);
        assert_eq!(infer_domain(Vec::new()), None);
    }
}
