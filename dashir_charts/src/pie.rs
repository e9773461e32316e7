// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pie render strategy.
//!
//! A proportional encoding supports exactly one measure, so this strategy
//! reads `value` only and ignores `value2` entirely.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, TAU};

use dashir_core::DataPoint;
use dashir_core::format::format_percent;
use kurbo::{BezPath, Circle, Point, Rect, Shape};
use peniko::Color;

use crate::chart::LegendEntry;
use crate::series::Palette;

/// Curve flattening tolerance for wedge outlines.
const WEDGE_TOLERANCE: f64 = 0.1;

/// One pie wedge.
#[derive(Clone, Debug, PartialEq)]
pub struct Wedge {
    /// Category label.
    pub label: String,
    /// The encoded primary value.
    pub value: f64,
    /// `value / sum(values)`, or `0.0` when the total is not positive.
    pub fraction: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians. Equal to `start_angle` for a zero-extent wedge.
    pub end_angle: f64,
    /// Fill color, assigned by category index.
    pub color: Color,
    /// Wedge outline in plot coordinates.
    pub path: BezPath,
}

impl Wedge {
    /// The wedge label with its whole-percent share, e.g. `"a: 25%"`.
    pub fn percent_label(&self) -> String {
        alloc::format!(
            "{}: {}",
            self.label,
            format_percent(self.fraction * 100.0, 0)
        )
    }
}

/// A rendered pie chart: one wedge per point, sized by the point's share of
/// the total.
#[derive(Clone, Debug, PartialEq)]
pub struct PieChartView {
    /// Wedge center in plot coordinates.
    pub center: Point,
    /// Outer radius in plot coordinates.
    pub radius: f64,
    /// Wedges in input order.
    pub wedges: Vec<Wedge>,
}

impl PieChartView {
    /// Builds the pie view of `points` into `plot`.
    ///
    /// A zero (or non-finite) value still occupies a wedge of zero angular
    /// extent; a zero total short-circuits every fraction to `0.0`, so no
    /// division happens on degenerate input.
    pub(crate) fn build(points: &[DataPoint], plot: Rect, palette: &Palette) -> Self {
        let center = plot.center();
        let radius = plot.width().min(plot.height()) / 3.0;
        let circle = Circle::new(center, radius);

        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        let total: f64 = points.iter().map(|p| finite(p.value)).sum();

        let mut angle = -FRAC_PI_2;
        let wedges = points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let fraction = if total > 0.0 {
                    finite(point.value) / total
                } else {
                    0.0
                };
                let sweep = fraction * TAU;
                let start_angle = angle;
                angle += sweep;
                Wedge {
                    label: point.label.clone(),
                    value: point.value,
                    fraction,
                    start_angle,
                    end_angle: angle,
                    color: palette.color(i),
                    path: circle
                        .segment(0.0, start_angle, sweep)
                        .path_elements(WEDGE_TOLERANCE)
                        .collect(),
                }
            })
            .collect();

        Self {
            center,
            radius,
            wedges,
        }
    }

    /// Legend entries, one per wedge.
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.wedges
            .iter()
            .map(|w| LegendEntry {
                label: w.label.clone(),
                color: w.color,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn plot() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 300.0)
    }

    fn build(points: &[DataPoint]) -> PieChartView {
        PieChartView::build(points, plot(), &Palette::default())
    }

    #[test]
    fn fractions_are_value_over_total() {
        let points = vec![DataPoint::new("a", 1.0), DataPoint::new("b", 3.0)];
        let view = build(&points);
        assert_eq!(view.wedges[0].fraction, 0.25);
        assert_eq!(view.wedges[1].fraction, 0.75);

        let sweep = view.wedges[1].end_angle - view.wedges[1].start_angle;
        assert!((sweep - 0.75 * TAU).abs() < 1e-12);
    }

    #[test]
    fn zero_sum_input_renders_zero_extent_wedges() {
        let points = vec![DataPoint::new("a", 0.0), DataPoint::new("b", 0.0)];
        let view = build(&points);
        assert_eq!(view.wedges.len(), 2);
        for wedge in &view.wedges {
            assert_eq!(wedge.fraction, 0.0);
            assert_eq!(wedge.start_angle, wedge.end_angle);
        }
    }

    #[test]
    fn a_zero_value_wedge_is_kept_with_zero_extent() {
        let points = vec![DataPoint::new("a", 0.0), DataPoint::new("b", 2.0)];
        let view = build(&points);
        assert_eq!(view.wedges.len(), 2);
        assert_eq!(view.wedges[0].fraction, 0.0);
        assert_eq!(view.wedges[0].start_angle, view.wedges[0].end_angle);
        assert_eq!(view.wedges[1].fraction, 1.0);
    }

    #[test]
    fn value2_is_ignored_entirely() {
        let with = vec![
            DataPoint::new("a", 1.0).with_value2(100.0),
            DataPoint::new("b", 3.0),
        ];
        let without = vec![DataPoint::new("a", 1.0), DataPoint::new("b", 3.0)];
        let a = build(&with);
        let b = build(&without);
        assert_eq!(a.wedges[0].fraction, b.wedges[0].fraction);
        assert_eq!(a.wedges[1].fraction, b.wedges[1].fraction);
    }

    #[test]
    fn wedge_colors_cycle_the_palette_by_index() {
        let palette = Palette::default();
        let points: Vec<DataPoint> = (0..(palette.len() + 2))
            .map(|i| DataPoint::new(alloc::format!("p{i}"), 1.0))
            .collect();
        let view = PieChartView::build(&points, plot(), &palette);
        for (i, wedge) in view.wedges.iter().enumerate() {
            assert_eq!(wedge.color, palette.color(i % palette.len()));
        }
    }

    #[test]
    fn percent_labels_round_to_whole_percents() {
        let points = vec![DataPoint::new("a", 1.0), DataPoint::new("b", 3.0)];
        let view = build(&points);
        assert_eq!(view.wedges[0].percent_label(), "a: 25%");
        assert_eq!(view.wedges[1].percent_label(), "b: 75%");
    }
}
