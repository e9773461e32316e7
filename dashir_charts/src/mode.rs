// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart mode selection state.

/// A visual encoding for one chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartMode {
    /// Grouped categorical bars.
    Bar,
    /// Connected point sequences.
    Line,
    /// Proportional wedges.
    Pie,
}

impl ChartMode {
    /// All modes, in switcher display order.
    pub const ALL: [Self; 3] = [Self::Bar, Self::Line, Self::Pie];

    /// The switcher button label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::Line => "Line",
            Self::Pie => "Pie",
        }
    }
}

/// The mode-switch state of one chart surface.
///
/// A trivial selector: any mode is reachable from any other in one step,
/// and the choice never depends on the data. When switching is disabled the
/// selector keeps its initial mode for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSelector {
    mode: ChartMode,
    switchable: bool,
}

impl ModeSelector {
    /// Creates a switchable selector starting at `mode`.
    pub fn new(mode: ChartMode) -> Self {
        Self {
            mode,
            switchable: true,
        }
    }

    /// Creates a selector fixed at `mode` for the session.
    pub fn fixed(mode: ChartMode) -> Self {
        Self {
            mode,
            switchable: false,
        }
    }

    /// Returns the active mode.
    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    /// Returns true when mode switching is allowed.
    pub fn is_switchable(&self) -> bool {
        self.switchable
    }

    /// Handles a mode-select event. No-op when switching is disabled.
    pub fn select(&mut self, mode: ChartMode) {
        if self.switchable {
            self.mode = mode;
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn every_mode_is_reachable_in_one_step() {
        for from in ChartMode::ALL {
            for to in ChartMode::ALL {
                let mut selector = ModeSelector::new(from);
                selector.select(to);
                assert_eq!(selector.mode(), to);
            }
        }
    }

    #[test]
    fn fixed_selectors_ignore_select_events() {
        let mut selector = ModeSelector::fixed(ChartMode::Line);
        selector.select(ChartMode::Pie);
        selector.select(ChartMode::Bar);
        assert_eq!(selector.mode(), ChartMode::Line);
    }
}
