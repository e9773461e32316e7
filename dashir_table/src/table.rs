// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The table render pipeline.
//!
//! [`TableSpec::view`] is a pure derivation from `(columns, rows, sort
//! state)` to a materialized [`TableView`]: header cells with sort
//! indicators, body rows in display order with per-cell text, or a single
//! placeholder row when the input is empty. Inputs are never mutated; the
//! row order is derived through an index sort.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use dashir_core::Row;
use smallvec::SmallVec;

use crate::collation::Collation;
use crate::column::{Align, Column};
use crate::sort::{SortOrder, SortState};

/// Default empty-state message.
const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// A table description: ordered columns plus the empty-state message.
#[derive(Debug)]
pub struct TableSpec {
    columns: Vec<Column>,
    empty_message: String,
}

impl TableSpec {
    /// Creates a spec over the given columns with the default empty-state
    /// message.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            empty_message: String::from(DEFAULT_EMPTY_MESSAGE),
        }
    }

    /// Sets the empty-state message.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Returns the column descriptors in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns true when a column with `key` exists and is sortable.
    pub fn is_sortable(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key == key && c.sortable)
    }

    /// Renders a materialized view of `rows` under the given sort state.
    pub fn view(&self, rows: &[Row], sort: &SortState, collation: &Collation) -> TableView {
        let header = self
            .columns
            .iter()
            .map(|c| Cell {
                text: c.label.clone(),
                align: c.align,
                sortable: c.sortable,
                sort: sort.order_for(&c.key),
            })
            .collect();

        let body = if rows.is_empty() {
            TableBody::Empty {
                message: self.empty_message.clone(),
                span: self.columns.len(),
            }
        } else {
            let order = self.display_order(rows, sort, collation);
            TableBody::Rows(
                order
                    .into_iter()
                    .map(|ri| self.body_row(&rows[ri]))
                    .collect(),
            )
        };

        TableView { header, body }
    }

    /// Computes the display order of row indices.
    ///
    /// The sort is stable, so rows with equal keys keep their input order.
    /// Direction flips the defined-value comparison only; rows without a
    /// value for the sort key stay after all defined values either way.
    fn display_order(&self, rows: &[Row], sort: &SortState, collation: &Collation) -> Vec<usize> {
        let mut order: Vec<usize> = (0..rows.len()).collect();
        if let SortState::Sorted { key, order: dir } = sort {
            order.sort_by(|&ia, &ib| {
                let a = rows[ia].get(key).filter(|v| !v.is_null());
                let b = rows[ib].get(key).filter(|v| !v.is_null());
                let cmp = collation.compare_values(a, b);
                match dir {
                    SortOrder::Desc if a.is_some() && b.is_some() => cmp.reverse(),
                    _ => cmp,
                }
            });
        }
        order
    }

    fn body_row(&self, row: &Row) -> BodyRow {
        let cells = self
            .columns
            .iter()
            .map(|c| {
                let value = row.get(&c.key);
                let text = match &c.render {
                    Some(render) => render(value, row),
                    None => value.map(ToString::to_string).unwrap_or_default(),
                };
                Cell {
                    text,
                    align: c.align,
                    sortable: false,
                    sort: None,
                }
            })
            .collect();
        BodyRow { cells }
    }
}

/// One rendered cell: display text plus the presentation hints a frontend
/// needs to paint it.
///
/// Header cells additionally carry `sortable` and the active sort order for
/// indicator rendering; on body cells both are inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Display text.
    pub text: String,
    /// Alignment inherited from the column.
    pub align: Align,
    /// Whether activating this cell sorts the column.
    pub sortable: bool,
    /// Active sort order, when this column drives the current sort.
    pub sort: Option<SortOrder>,
}

/// One rendered body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    /// Cells aligned to the spec's columns.
    pub cells: SmallVec<[Cell; 8]>,
}

/// The rendered table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Data rows in display order.
    Rows(Vec<BodyRow>),
    /// The zero-row placeholder.
    Empty {
        /// Configured empty-state message.
        message: String,
        /// Number of columns the placeholder spans.
        span: usize,
    },
}

/// A materialized table view: header cells plus body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Header cells in column order.
    pub header: Vec<Cell>,
    /// Body rows or the empty placeholder.
    pub body: TableBody,
}

impl TableView {
    /// Returns the body rows, or an empty slice for the placeholder state.
    pub fn rows(&self) -> &[BodyRow] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Empty { .. } => &[],
        }
    }
}
