// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session state for one table view.

extern crate alloc;

use dashir_core::Row;

use crate::collation::Collation;
use crate::sort::SortState;
use crate::table::{TableSpec, TableView};

/// Owns the mutable sort state of one table view for its lifetime.
///
/// The session is the boundary where activation events are validated:
/// events for unknown or non-sortable columns are dropped before the
/// transition function runs, so the sort state never changes for them.
#[derive(Debug)]
pub struct TableSession {
    spec: TableSpec,
    sort: SortState,
    collation: Collation,
}

impl TableSession {
    /// Creates a session starting in the unsorted state.
    pub fn new(spec: TableSpec, collation: Collation) -> Self {
        Self {
            spec,
            sort: SortState::Unsorted,
            collation,
        }
    }

    /// Returns the table spec.
    pub fn spec(&self) -> &TableSpec {
        &self.spec
    }

    /// Returns the current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Handles a column-activate event.
    ///
    /// No-op for unknown keys and for columns declared non-sortable.
    pub fn activate(&mut self, key: &str) {
        if self.spec.is_sortable(key) {
            self.sort.activate(key);
        }
    }

    /// Renders the current view of `rows`.
    pub fn view(&self, rows: &[Row]) -> TableView {
        self.spec.view(rows, &self.sort, &self.collation)
    }
}
