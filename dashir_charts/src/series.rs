// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series detection and deterministic category coloring.

extern crate alloc;

use alloc::vec::Vec;

use dashir_core::DataPoint;
use peniko::Color;
use peniko::color::palette::css;

/// Default category palette, mirroring the dashboard theme slots
/// (primary, info, success, warning, accent, error).
const DEFAULT_COLORS: [Color; 6] = [
    css::ROYAL_BLUE,
    css::STEEL_BLUE,
    css::MEDIUM_SEA_GREEN,
    css::GOLDENROD,
    css::MEDIUM_PURPLE,
    css::INDIAN_RED,
];

/// Which detected data series a mark belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesSlot {
    /// The always-present primary series (`value`).
    Primary,
    /// The optional secondary series (`value2`).
    Secondary,
}

impl SeriesSlot {
    /// The palette index assigned to this slot.
    pub fn palette_index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Secondary => 1,
        }
    }
}

/// The derived shape of a point sequence.
///
/// Secondary-series presence is a property of the whole sequence: if any
/// point carries `value2`, the secondary series exists for all of them, and
/// points without `value2` simply contribute no datum to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesShape {
    /// True iff at least one point has a defined `value2`.
    pub has_secondary: bool,
}

impl SeriesShape {
    /// Derives the shape of `points`. An empty sequence is valid and has no
    /// secondary series.
    pub fn adapt(points: &[DataPoint]) -> Self {
        Self {
            has_secondary: points.iter().any(|p| p.value2.is_some()),
        }
    }

    /// Number of detected series (1 or 2).
    pub fn series_count(&self) -> usize {
        if self.has_secondary { 2 } else { 1 }
    }

    /// The series slots present, in draw order.
    pub fn slots(&self) -> &'static [SeriesSlot] {
        if self.has_secondary {
            &[SeriesSlot::Primary, SeriesSlot::Secondary]
        } else {
            &[SeriesSlot::Primary]
        }
    }
}

/// A fixed, ordered color palette cycled by category index.
///
/// `color(i)` depends only on `i` and the palette length, never on the data,
/// so color assignment is repeatable across renders and mode switches.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from an ordered color list.
    ///
    /// An empty list falls back to the default palette so `color` is total.
    pub fn new(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            Self::default()
        } else {
            Self { colors }
        }
    }

    /// Returns the color for category index `i`, cycling modulo the palette
    /// length.
    pub fn color(&self, i: usize) -> Color {
        self.colors[i % self.colors.len()]
    }

    /// Returns the palette length.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true when the palette has no colors. Construction falls back
    /// to the default palette, so this never holds in practice.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color assigned to a series slot.
    pub fn slot_color(&self, slot: SeriesSlot) -> Color {
        self.color(slot.palette_index())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn any_point_with_value2_makes_the_secondary_series_present() {
        let points = vec![
            DataPoint::new("a", 1.0),
            DataPoint::new("b", 2.0).with_value2(5.0),
        ];
        assert!(SeriesShape::adapt(&points).has_secondary);
        assert_eq!(SeriesShape::adapt(&points).series_count(), 2);
    }

    #[test]
    fn no_value2_means_a_single_series() {
        let points = vec![DataPoint::new("a", 1.0)];
        assert!(!SeriesShape::adapt(&points).has_secondary);
    }

    #[test]
    fn empty_input_is_valid() {
        let shape = SeriesShape::adapt(&[]);
        assert!(!shape.has_secondary);
        assert_eq!(shape.slots(), &[SeriesSlot::Primary]);
    }

    #[test]
    fn coloring_cycles_modulo_the_palette_length() {
        let palette = Palette::default();
        let p = palette.len();
        for i in 0..(2 * p) {
            assert_eq!(palette.color(i), palette.color(i + p));
        }
    }

    #[test]
    fn empty_palettes_fall_back_to_the_default() {
        let palette = Palette::new(vec![]);
        assert_eq!(palette.len(), Palette::default().len());
    }
}
