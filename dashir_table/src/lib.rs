// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sortable table rendering for dashir.
//!
//! This crate provides:
//! - a locale-aware, null-tolerant value comparator ([`Collation`]),
//! - the per-column sort cycle state machine ([`SortState`]), and
//! - a pure render pipeline ([`TableSpec`]) producing materialized
//!   [`TableView`]s, with [`TableSession`] owning the mutable sort state.
//!
//! Rendering is a pure derivation: given `(columns, rows, sort state)` the
//! pipeline always produces the same view and never mutates its inputs. The
//! only mutation points are the activation events handled by
//! [`TableSession`].

#![no_std]

extern crate alloc;

mod collation;
mod column;
mod session;
mod sort;
mod table;

pub use collation::{Collation, CollationError};
pub use column::{Align, CellRender, Column};
pub use session::TableSession;
pub use sort::{SortOrder, SortState};
pub use table::{BodyRow, Cell, TableBody, TableSpec, TableView};
