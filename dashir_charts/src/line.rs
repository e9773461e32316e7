// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The line render strategy.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use dashir_core::DataPoint;
use kurbo::{BezPath, Point, Rect};
use peniko::Color;

use crate::chart::{ChartSpec, LegendEntry};
use crate::scale::{BandScale, LinearScale, infer_domain};
use crate::series::{SeriesShape, SeriesSlot};

/// One polyline series.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    /// Which series this polyline encodes.
    pub slot: SeriesSlot,
    /// Series label (from the chart spec).
    pub label: String,
    /// Stroke color.
    pub color: Color,
    /// The polyline in plot coordinates; a missing datum breaks the path.
    pub path: BezPath,
    /// Marker positions, one per present datum.
    pub markers: Vec<Point>,
}

/// A rendered line chart: one polyline per detected series, vertices in
/// input sequence order.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChartView {
    /// Polylines in slot order.
    pub series: Vec<LineSeries>,
    /// Series legend entries.
    pub legend: Vec<LegendEntry>,
    /// Value domain the y positions were scaled with.
    pub y_domain: (f64, f64),
}

impl LineChartView {
    /// Builds the line view of `points` into `plot`.
    ///
    /// Vertices follow the input order; the data is never re-sorted. A point
    /// without a datum for a series leaves a gap in that series' path.
    pub(crate) fn build(
        spec: &ChartSpec,
        points: &[DataPoint],
        shape: SeriesShape,
        plot: Rect,
    ) -> Self {
        let band = BandScale::new((plot.x0, plot.x1), points.len());

        let mut values: Vec<f64> = points.iter().map(|p| p.value).collect();
        if shape.has_secondary {
            values.extend(points.iter().filter_map(|p| p.value2));
        }
        let y_domain = infer_domain(values).unwrap_or((0.0, 1.0));
        let y_scale = LinearScale::new(y_domain, (plot.y1, plot.y0));

        let legend = spec.series_legend(shape);
        let series = shape
            .slots()
            .iter()
            .zip(&legend)
            .map(|(&slot, entry)| {
                let mut path = BezPath::new();
                let mut markers = Vec::new();
                let mut in_run = false;
                for (i, point) in points.iter().enumerate() {
                    let value = match slot {
                        SeriesSlot::Primary => Some(point.value),
                        SeriesSlot::Secondary => point.value2,
                    };
                    let Some(value) = value.filter(|v| v.is_finite()) else {
                        in_run = false;
                        continue;
                    };
                    let at = Point::new(band.center(i), y_scale.map(value));
                    if in_run {
                        path.line_to(at);
                    } else {
                        path.move_to(at);
                        in_run = true;
                    }
                    markers.push(at);
                }
                LineSeries {
                    slot,
                    label: entry.label.clone(),
                    color: entry.color,
                    path,
                    markers,
                }
            })
            .collect();

        Self {
            series,
            legend,
            y_domain,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::PathEl;

    use super::*;

    fn plot() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 300.0)
    }

    fn build(points: &[DataPoint]) -> LineChartView {
        let spec = ChartSpec::new();
        LineChartView::build(&spec, points, SeriesShape::adapt(points), plot())
    }

    #[test]
    fn vertices_follow_input_order_not_value_order() {
        let points = vec![
            DataPoint::new("z", 3.0),
            DataPoint::new("a", 1.0),
            DataPoint::new("m", 2.0),
        ];
        let view = build(&points);
        let markers = &view.series[0].markers;
        assert_eq!(markers.len(), 3);
        assert!(markers[0].x < markers[1].x, "input order drives x positions");
        assert!(markers[1].x < markers[2].x, "input order drives x positions");
    }

    #[test]
    fn a_missing_secondary_datum_breaks_the_path() {
        let points = vec![
            DataPoint::new("a", 1.0).with_value2(1.0),
            DataPoint::new("b", 2.0),
            DataPoint::new("c", 3.0).with_value2(3.0),
        ];
        let view = build(&points);
        let secondary = &view.series[1];
        assert_eq!(secondary.markers.len(), 2);

        let move_count = secondary
            .path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count();
        assert_eq!(move_count, 2, "the gap starts a second subpath");
    }

    #[test]
    fn single_series_input_renders_one_polyline() {
        let points = vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)];
        let view = build(&points);
        assert_eq!(view.series.len(), 1);
        assert_eq!(view.series[0].slot, SeriesSlot::Primary);
    }

    #[test]
    fn empty_input_renders_empty_series() {
        let view = build(&[]);
        assert_eq!(view.series.len(), 1);
        assert!(view.series[0].markers.is_empty());
        assert!(view.series[0].path.elements().is_empty());
    }
}
