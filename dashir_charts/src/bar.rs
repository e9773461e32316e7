// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bar render strategy.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use dashir_core::DataPoint;
use kurbo::Rect;
use peniko::Color;

use crate::chart::{ChartSpec, LegendEntry};
use crate::scale::{BandScale, LinearScale, infer_domain};
use crate::series::{SeriesShape, SeriesSlot};

/// One vertical bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarMark {
    /// Category label of the point this bar encodes.
    pub label: String,
    /// Which series the bar belongs to.
    pub slot: SeriesSlot,
    /// Fill color.
    pub color: Color,
    /// Bar geometry in plot coordinates.
    pub rect: Rect,
}

/// A rendered bar chart: grouped vertical bars, one group per point, one bar
/// per detected series.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartView {
    /// Bars in draw order (grouped by point, primary before secondary).
    pub bars: Vec<BarMark>,
    /// Series legend entries.
    pub legend: Vec<LegendEntry>,
    /// Value domain the bar heights were scaled with (always includes the
    /// zero baseline).
    pub y_domain: (f64, f64),
}

impl BarChartView {
    /// Builds the bar view of `points` into `plot`.
    ///
    /// A point without a secondary datum contributes no secondary bar; its
    /// group simply has one bar. Non-finite values are skipped.
    pub(crate) fn build(
        spec: &ChartSpec,
        points: &[DataPoint],
        shape: SeriesShape,
        plot: Rect,
    ) -> Self {
        let slots = shape.slots();
        let band = BandScale::new((plot.x0, plot.x1), points.len());
        let slot_width = band.band_width() / slots.len() as f64;

        let mut values: Vec<f64> = points.iter().map(|p| p.value).collect();
        if shape.has_secondary {
            values.extend(points.iter().filter_map(|p| p.value2));
        }
        values.push(0.0);
        let y_domain = infer_domain(values).unwrap_or((0.0, 1.0));
        let y_scale = LinearScale::new(y_domain, (plot.y1, plot.y0));
        let baseline = y_scale.map(0.0);

        let mut bars = Vec::new();
        for (i, point) in points.iter().enumerate() {
            for (si, &slot) in slots.iter().enumerate() {
                let value = match slot {
                    SeriesSlot::Primary => Some(point.value),
                    SeriesSlot::Secondary => point.value2,
                };
                let Some(value) = value.filter(|v| v.is_finite()) else {
                    continue;
                };
                let x0 = band.x(i) + slot_width * si as f64;
                let y = y_scale.map(value);
                bars.push(BarMark {
                    label: point.label.clone(),
                    slot,
                    color: spec.palette.slot_color(slot),
                    rect: Rect::new(x0, y.min(baseline), x0 + slot_width, y.max(baseline)),
                });
            }
        }

        Self {
            bars,
            legend: spec.series_legend(shape),
            y_domain,
        }
    }
}
