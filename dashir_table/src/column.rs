// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column descriptors.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use dashir_core::{Row, Value};

/// Cell alignment within a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    /// Left-aligned (the default).
    #[default]
    Left,
    /// Center-aligned.
    Center,
    /// Right-aligned.
    Right,
}

/// A caller-supplied cell renderer.
///
/// Invoked with the field value (if present) and the whole row; returns the
/// cell display text.
pub type CellRender = Box<dyn Fn(Option<&Value>, &Row) -> String>;

/// Describes one table column.
///
/// `key` selects the row field the column reads. Key uniqueness is the
/// caller's responsibility; duplicate keys produce undefined column identity
/// but never a crash.
pub struct Column {
    /// Row field this column reads.
    pub key: String,
    /// Display header label.
    pub label: String,
    /// Cell alignment.
    pub align: Align,
    /// Whether activation events sort this column.
    pub sortable: bool,
    /// Optional custom cell renderer; when absent, cells use the default
    /// stringifier (null/missing renders as the empty string).
    pub render: Option<CellRender>,
}

impl Column {
    /// Creates a left-aligned, sortable column with no custom renderer.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            align: Align::Left,
            sortable: true,
            render: None,
        }
    }

    /// Sets the cell alignment.
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Enables or disables sorting for this column.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets a custom cell renderer.
    pub fn with_render(
        mut self,
        render: impl Fn(Option<&Value>, &Row) -> String + 'static,
    ) -> Self {
        self.render = Some(Box::new(render));
        self
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}
