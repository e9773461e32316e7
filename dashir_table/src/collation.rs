// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locale-aware, null-tolerant value comparison.

extern crate alloc;

use alloc::string::ToString;
use core::cmp::Ordering;
use core::fmt;

use dashir_core::Value;
use icu_collator::{Collator, CollatorOptions, Numeric};
use icu_locid::Locale;

/// Errors returned when building a [`Collation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollationError {
    /// Collation data for the requested locale was unavailable.
    UnsupportedLocale,
}

/// A locale-aware comparator over optional [`Value`]s.
///
/// Comparison is total and antisymmetric:
/// - two missing/null values are equal;
/// - a missing/null value sorts after any defined value;
/// - defined values are compared by their display strings using ICU
///   collation with numeric ordering on, so `"item2"` sorts before
///   `"item10"`.
///
/// The collator is built once per table session and reused for every
/// comparison; individual comparisons have no side effects.
pub struct Collation {
    collator: Collator,
}

impl Collation {
    /// Builds a collation for the given locale.
    pub fn try_new(locale: Locale) -> Result<Self, CollationError> {
        let mut options = CollatorOptions::new();
        options.numeric = Some(Numeric::On);
        let collator = Collator::try_new(&locale.into(), options)
            .map_err(|_| CollationError::UnsupportedLocale)?;
        Ok(Self { collator })
    }

    /// Builds a collation for the root (locale-independent) locale.
    pub fn try_root() -> Result<Self, CollationError> {
        Self::try_new(Locale::default())
    }

    /// Compares two optional values.
    ///
    /// `None` and `Some(Value::Null)` are both "no value".
    pub fn compare_values(&self, a: Option<&Value>, b: Option<&Value>) -> Ordering {
        let a = a.filter(|v| !v.is_null());
        let b = b.filter(|v| !v.is_null());
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => self.collator.compare(&a.to_string(), &b.to_string()),
        }
    }
}

impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn collation() -> Collation {
        Collation::try_root().expect("root collation data is compiled in")
    }

    #[test]
    fn numeric_substrings_order_numerically() {
        let c = collation();
        let a = Value::from("item2");
        let b = Value::from("item10");
        assert_eq!(c.compare_values(Some(&a), Some(&b)), Ordering::Less);
        assert_eq!(c.compare_values(Some(&b), Some(&a)), Ordering::Greater);
    }

    #[test]
    fn numbers_compare_through_their_display_strings() {
        let c = collation();
        let a = Value::Num(9.0);
        let b = Value::Num(11.0);
        assert_eq!(c.compare_values(Some(&a), Some(&b)), Ordering::Less);
    }

    #[test]
    fn equal_inputs_compare_equal() {
        let c = collation();
        let a = Value::from("alpha");
        let b = Value::from("alpha");
        assert_eq!(c.compare_values(Some(&a), Some(&b)), Ordering::Equal);
        assert_eq!(c.compare_values(None, None), Ordering::Equal);
    }

    #[test]
    fn missing_and_null_sort_after_defined_values() {
        let c = collation();
        let v = Value::from("zzz");
        let null = Value::Null;
        assert_eq!(c.compare_values(None, Some(&v)), Ordering::Greater);
        assert_eq!(c.compare_values(Some(&v), None), Ordering::Less);
        assert_eq!(c.compare_values(Some(&null), Some(&v)), Ordering::Greater);
        assert_eq!(c.compare_values(Some(&null), None), Ordering::Equal);
    }
}
