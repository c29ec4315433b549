// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit conversion helpers

use thiserror::Error;

/// Binary byte multiplier suffixes, in increasing order of magnitude
pub const BYTE_SUFFIXES: [&str; 8] = ["kib", "mib", "gib", "tib", "pib", "eib", "zib", "yib"];

/// Errors from byte multiplier conversion
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("unknown multiplier suffix")]
    UnknownSuffix,
    #[error("unknown target multiplier")]
    UnknownTarget,
}

/// Convert a binary byte value across multipliers.
///
/// `suffix` is the current multiplier for the value, `to` the target one;
/// `None` means plain bytes. Suffixes are case-insensitive.
pub fn convert_bbyte(value: f64, suffix: Option<&str>, to: Option<&str>) -> Result<f64, ConvertError> {
    let exponent = suffix_exponent(suffix).ok_or(ConvertError::UnknownSuffix)?;
    let target_exponent = suffix_exponent(to).ok_or(ConvertError::UnknownTarget)?;
    let multiplier = 2f64.powi(10 * exponent);
    let divider = 2f64.powi(10 * target_exponent);
    Ok(value * multiplier / divider)
}

fn suffix_exponent(suffix: Option<&str>) -> Option<i32> {
    let Some(suffix) = suffix else {
        return Some(0);
    };
    let suffix = suffix.to_lowercase();
    BYTE_SUFFIXES
        .iter()
        .position(|known| *known == suffix)
        .map(|index| index as i32 + 1)
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
