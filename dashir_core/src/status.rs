// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Status badge presentation lookup.
//!
//! Dashboards show entity states as color-coded badges. The mapping from a
//! semantic state to a label and color token is a fixed lookup table; callers
//! may override the label but not the color assignment.

extern crate alloc;

use alloc::string::String;

use peniko::Color;
use peniko::color::palette::css;

/// Base color token for "good" states.
const SUCCESS: Color = css::MEDIUM_SEA_GREEN;
/// Base color token for "attention" states.
const WARNING: Color = css::GOLDENROD;
/// Base color token for failure states.
const ERROR: Color = css::INDIAN_RED;
/// Base color token for informational states.
const INFO: Color = css::STEEL_BLUE;
/// Base color token for inactive states.
const MUTED: Color = css::SLATE_GRAY;

/// A semantic entity state shown as a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// Operating normally.
    Healthy,
    /// Needs attention.
    Warning,
    /// Failed.
    Error,
    /// Waiting to start.
    Pending,
    /// Running behind schedule.
    Delayed,
    /// Currently running.
    Active,
    /// Suspended by an operator.
    Paused,
    /// Finished.
    Completed,
}

impl Status {
    /// All states, in display order.
    pub const ALL: [Self; 8] = [
        Self::Healthy,
        Self::Warning,
        Self::Error,
        Self::Pending,
        Self::Delayed,
        Self::Active,
        Self::Paused,
        Self::Completed,
    ];

    /// The default badge label for this state.
    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Pending => "Pending",
            Self::Delayed => "Delayed",
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
        }
    }

    /// The base color token for this state.
    ///
    /// Several states intentionally share a token (`Delayed` reads as a
    /// warning, `Completed` as informational).
    pub fn color(self) -> Color {
        match self {
            Self::Healthy | Self::Active => SUCCESS,
            Self::Warning | Self::Delayed => WARNING,
            Self::Error => ERROR,
            Self::Pending | Self::Completed => INFO,
            Self::Paused => MUTED,
        }
    }

    /// Builds a badge with the default label.
    pub fn badge(self) -> Badge {
        Badge::new(self, self.label())
    }

    /// Builds a badge with a caller-supplied label.
    pub fn badge_labeled(self, label: impl Into<String>) -> Badge {
        Badge::new(self, label)
    }
}

/// A resolved status badge: label text plus the derived paint tokens.
#[derive(Clone, Debug, PartialEq)]
pub struct Badge {
    /// Display label.
    pub label: String,
    /// Text and dot-indicator color.
    pub color: Color,
    /// Whether the dot indicator is shown.
    pub show_dot: bool,
}

impl Badge {
    fn new(status: Status, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: status.color(),
            show_dot: true,
        }
    }

    /// Hides the dot indicator.
    pub fn without_dot(mut self) -> Self {
        self.show_dot = false;
        self
    }

    /// The badge background fill: the base color at 10% alpha.
    pub fn fill(&self) -> Color {
        self.color.with_alpha(0.1)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn every_status_resolves_to_a_badge() {
        for status in Status::ALL {
            let badge = status.badge();
            assert_eq!(badge.label, status.label());
            assert_eq!(badge.color, status.color());
        }
    }

    #[test]
    fn badge_fill_is_base_color_at_ten_percent() {
        let badge = Status::Healthy.badge();
        let fill = badge.fill();
        assert_eq!(fill.components[3], 0.1);
        assert_eq!(fill.components[..3], badge.color.components[..3]);
    }

    #[test]
    fn custom_labels_keep_the_color_assignment() {
        let badge = Status::Delayed.badge_labeled("SLA breach");
        assert_eq!(badge.label, "SLA breach");
        assert_eq!(badge.color, Status::Warning.color());
    }
}
