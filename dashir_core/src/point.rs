// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The uniform chart data point.

extern crate alloc;

use alloc::string::String;

/// One chart data point: a category label, a primary value, and an optional
/// secondary value.
///
/// Whether a point sequence carries a secondary series is a property of the
/// whole sequence, derived per render (see `dashir_charts`); a point without
/// `value2` in such a sequence means "no datum here", not an error.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// Category label.
    pub label: String,
    /// Primary value.
    pub value: f64,
    /// Optional secondary value.
    pub value2: Option<f64>,
}

impl DataPoint {
    /// Creates a point with no secondary value.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            value2: None,
        }
    }

    /// Sets the secondary value.
    pub fn with_value2(mut self, value2: f64) -> Self {
        self.value2 = Some(value2);
        self
    }
}
