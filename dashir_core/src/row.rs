// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open string-keyed row records.

extern crate alloc;

use alloc::string::String;

use hashbrown::HashMap;

use crate::Value;

/// One open, string-keyed record representing a single table row.
///
/// Rows are opaque to the pipelines except for the fields referenced by
/// active column keys; [`Row::get`] returns `None` for absent fields, which
/// downstream code treats the same as an explicit [`Value::Null`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Returns the field for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn missing_fields_read_as_none() {
        let row = Row::new().with("name", "alice").with("age", 30);
        assert_eq!(row.get("name"), Some(&Value::from("alice")));
        assert_eq!(row.get("email"), None);
    }

    #[test]
    fn insert_replaces_existing_fields() {
        let mut row = Row::new().with("n", 1);
        row.insert("n", 2);
        assert_eq!(row.get("n"), Some(&Value::Num(2.0)));
        assert_eq!(row.len(), 1);
    }
}
