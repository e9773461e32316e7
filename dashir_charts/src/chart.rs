// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition and mode dispatch.
//!
//! [`ChartSpec`] owns the per-chart configuration (series labels, height
//! hint, palette) and dispatches one render strategy per [`ChartMode`].
//! Rendering is a pure derivation from `(points, mode, plot)`; switching
//! modes selects a strategy and nothing else, so round-tripping modes over
//! identical data reproduces identical views.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use dashir_core::DataPoint;
use kurbo::Rect;
use peniko::Color;

use crate::bar::BarChartView;
use crate::line::LineChartView;
use crate::mode::{ChartMode, ModeSelector};
use crate::pie::PieChartView;
use crate::series::{Palette, SeriesShape, SeriesSlot};

/// Default primary-series label.
const DEFAULT_VALUE_LABEL: &str = "Value";
/// Default secondary-series label, used when none is configured.
const DEFAULT_VALUE2_LABEL: &str = "Value 2";
/// Default plot height hint in pixels.
const DEFAULT_HEIGHT: f64 = 300.0;

/// One legend entry: a series or category label plus its color token.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Display label.
    pub label: String,
    /// Swatch color.
    pub color: Color,
}

/// Configuration for one chart surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    /// Label for the primary series.
    pub value_label: String,
    /// Label for the secondary series, when one is rendered.
    pub value2_label: Option<String>,
    /// Plot height hint in pixels.
    pub height: f64,
    /// Category/series palette.
    pub palette: Palette,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            value_label: String::from(DEFAULT_VALUE_LABEL),
            value2_label: None,
            height: DEFAULT_HEIGHT,
            palette: Palette::default(),
        }
    }
}

impl ChartSpec {
    /// Creates a spec with default labels, height, and palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the primary-series label.
    pub fn with_value_label(mut self, label: impl Into<String>) -> Self {
        self.value_label = label.into();
        self
    }

    /// Sets the secondary-series label.
    pub fn with_value2_label(mut self, label: impl Into<String>) -> Self {
        self.value2_label = Some(label.into());
        self
    }

    /// Sets the plot height hint.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Builds a plot rectangle from the height hint and a caller width.
    pub fn plot(&self, width: f64) -> Rect {
        Rect::new(0.0, 0.0, width.max(0.0), self.height.max(0.0))
    }

    /// Renders `points` with the given mode into `plot`.
    pub fn view(&self, points: &[DataPoint], mode: ChartMode, plot: Rect) -> ChartView {
        let shape = SeriesShape::adapt(points);
        match mode {
            ChartMode::Bar => ChartView::Bar(BarChartView::build(self, points, shape, plot)),
            ChartMode::Line => ChartView::Line(LineChartView::build(self, points, shape, plot)),
            ChartMode::Pie => ChartView::Pie(PieChartView::build(points, plot, &self.palette)),
        }
    }

    /// Legend entries for the detected series, in slot order.
    pub(crate) fn series_legend(&self, shape: SeriesShape) -> Vec<LegendEntry> {
        shape
            .slots()
            .iter()
            .map(|&slot| LegendEntry {
                label: match slot {
                    SeriesSlot::Primary => self.value_label.clone(),
                    SeriesSlot::Secondary => self
                        .value2_label
                        .clone()
                        .unwrap_or_else(|| String::from(DEFAULT_VALUE2_LABEL)),
                },
                color: self.palette.slot_color(slot),
            })
            .collect()
    }
}

/// A rendered chart: one variant per mode, each holding only the geometry
/// its encoding needs.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartView {
    /// Grouped categorical bars.
    Bar(BarChartView),
    /// Connected point sequences.
    Line(LineChartView),
    /// Proportional wedges.
    Pie(PieChartView),
}

impl ChartView {
    /// The mode this view was rendered with.
    pub fn mode(&self) -> ChartMode {
        match self {
            Self::Bar(_) => ChartMode::Bar,
            Self::Line(_) => ChartMode::Line,
            Self::Pie(_) => ChartMode::Pie,
        }
    }

    /// Legend entries for this view.
    pub fn legend(&self) -> Vec<LegendEntry> {
        match self {
            Self::Bar(v) => v.legend.clone(),
            Self::Line(v) => v.legend.clone(),
            Self::Pie(v) => v.legend(),
        }
    }
}

/// Owns the mutable mode state of one chart surface for its lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSession {
    spec: ChartSpec,
    selector: ModeSelector,
}

impl ChartSession {
    /// Creates a session from a spec and a mode selector.
    pub fn new(spec: ChartSpec, selector: ModeSelector) -> Self {
        Self { spec, selector }
    }

    /// Returns the chart spec.
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Returns the active mode.
    pub fn mode(&self) -> ChartMode {
        self.selector.mode()
    }

    /// Handles a mode-select event. No-op when the selector is fixed.
    pub fn select(&mut self, mode: ChartMode) {
        self.selector.select(mode);
    }

    /// Renders the current view of `points` into `plot`.
    pub fn view(&self, points: &[DataPoint], plot: Rect) -> ChartView {
        self.spec.view(points, self.mode(), plot)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn points() -> Vec<DataPoint> {
        vec![
            DataPoint::new("a", 1.0).with_value2(4.0),
            DataPoint::new("b", 3.0),
            DataPoint::new("c", 2.0).with_value2(1.0),
        ]
    }

    fn plot() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 300.0)
    }

    #[test]
    fn mode_round_trip_reproduces_identical_views() {
        let spec = ChartSpec::new().with_value2_label("Target");
        let pts = points();

        let bar0 = spec.view(&pts, ChartMode::Bar, plot());
        let _line = spec.view(&pts, ChartMode::Line, plot());
        let bar1 = spec.view(&pts, ChartMode::Bar, plot());
        let pie0 = spec.view(&pts, ChartMode::Pie, plot());
        let bar2 = spec.view(&pts, ChartMode::Bar, plot());
        let pie1 = spec.view(&pts, ChartMode::Pie, plot());

        assert_eq!(bar0, bar1);
        assert_eq!(bar0, bar2);
        assert_eq!(pie0, pie1);
    }

    #[test]
    fn session_select_switches_the_rendered_strategy() {
        let mut session = ChartSession::new(ChartSpec::new(), ModeSelector::new(ChartMode::Bar));
        assert_eq!(session.view(&points(), plot()).mode(), ChartMode::Bar);

        session.select(ChartMode::Pie);
        assert_eq!(session.view(&points(), plot()).mode(), ChartMode::Pie);
    }

    #[test]
    fn fixed_sessions_keep_their_initial_mode() {
        let mut session = ChartSession::new(ChartSpec::new(), ModeSelector::fixed(ChartMode::Line));
        session.select(ChartMode::Bar);
        assert_eq!(session.view(&points(), plot()).mode(), ChartMode::Line);
    }

    #[test]
    fn series_legend_uses_the_configured_labels() {
        let spec = ChartSpec::new()
            .with_value_label("Visits")
            .with_value2_label("Target");
        let legend = spec.series_legend(SeriesShape::adapt(&points()));
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[0].label, "Visits");
        assert_eq!(legend[1].label, "Target");
        assert_eq!(legend[0].color, spec.palette.color(0));
        assert_eq!(legend[1].color, spec.palette.color(1));
    }
}
