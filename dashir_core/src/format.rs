// Copyright 2025 the Dashir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display formatting for numbers and percentages.
//!
//! These are plain-string formatters with a fixed contract (grouping by 3,
//! `.` decimal point); they carry no locale data.

extern crate alloc;

use alloc::string::String;
use alloc::string::ToString;

/// Formats a number with thousands grouping.
///
/// The fractional part, if any, is left untouched. Values that print in
/// exponent form are returned as-is.
pub fn format_number(n: f64) -> String {
    let text = n.to_string();
    if text.contains(['e', 'E']) {
        return text;
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3);
    grouped.push_str(sign);
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Formats a percentage with a fixed number of fraction digits.
pub fn format_percent(n: f64, digits: usize) -> String {
    alloc::format!("{n:.digits$}%")
}
