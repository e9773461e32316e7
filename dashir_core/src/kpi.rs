// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! KPI tile presentation model.

extern crate alloc;

use alloc::string::String;

use peniko::Color;
use peniko::color::palette::css;

use crate::format::{format_number, format_percent};

/// Direction of a KPI's period-over-period change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Trend {
    /// Improved since the previous period.
    Up,
    /// Worsened since the previous period.
    Down,
    /// No meaningful change.
    #[default]
    Flat,
}

impl Trend {
    /// The arrow glyph shown next to the change figure.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "\u{2191}",
            Self::Down => "\u{2193}",
            Self::Flat => "\u{2192}",
        }
    }

    /// The color token for the change figure.
    pub fn color(self) -> Color {
        match self {
            Self::Up => css::MEDIUM_SEA_GREEN,
            Self::Down => css::INDIAN_RED,
            Self::Flat => css::SLATE_GRAY,
        }
    }
}

/// One KPI metric tile: label, value, optional unit suffix, and an optional
/// period-over-period change.
#[derive(Clone, Debug, PartialEq)]
pub struct KpiTile {
    /// Metric label.
    pub label: String,
    /// Metric value.
    pub value: f64,
    /// Unit suffix appended after the value (e.g. `"%"`, `"req/s"`).
    pub suffix: Option<String>,
    /// Change versus the previous period, in percent.
    pub change_percent: Option<f64>,
    /// Direction of the change.
    pub trend: Trend,
}

impl KpiTile {
    /// Creates a tile with no suffix and no change figure.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            suffix: None,
            change_percent: None,
            trend: Trend::Flat,
        }
    }

    /// Sets the unit suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Sets the period-over-period change and its direction.
    pub fn with_change(mut self, change_percent: f64, trend: Trend) -> Self {
        self.change_percent = Some(change_percent);
        self.trend = trend;
        self
    }

    /// The formatted main value (thousands-grouped).
    pub fn value_text(&self) -> String {
        format_number(self.value)
    }

    /// The formatted change figure, if a change is set.
    ///
    /// The sign is dropped; direction is conveyed by [`Trend::arrow`].
    pub fn change_text(&self) -> Option<String> {
        self.change_percent.map(|p| format_percent(p.abs(), 1))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn value_text_groups_thousands() {
        let tile = KpiTile::new("Daily visits", 1_234_567.0);
        assert_eq!(tile.value_text(), "1,234,567");
    }

    #[test]
    fn change_text_drops_the_sign() {
        let tile = KpiTile::new("Error rate", 0.8).with_change(-12.5, Trend::Down);
        assert_eq!(tile.change_text().as_deref(), Some("12.5%"));
        assert_eq!(tile.trend.arrow(), "\u{2193}");
    }

    #[test]
    fn change_text_is_absent_without_a_change() {
        assert_eq!(KpiTile::new("Uptime", 99.9).change_text(), None);
    }
}
