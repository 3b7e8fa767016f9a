// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Fixed-point rendering and numeric token parsing

use super::error::{FormulaError, Result};

/// Number of fractional digits shown for every result
pub const DEFAULT_PRECISION: usize = 4;

/// Render `value` with exactly four fractional digits.
pub fn format_fixed(value: f64) -> String {
    format_fixed_with(value, DEFAULT_PRECISION)
}

/// Render `value` with exactly `precision` fractional digits.
///
/// Finite values use Rust's correctly rounded formatting, which breaks exact
/// binary ties to even like C's `printf("%.*f")`. Non-finite values are
/// spelled the way a C++ stream prints them: `nan`, `-nan`, `inf`, `-inf`.
pub fn format_fixed_with(value: f64, precision: usize) -> String {
    if value.is_nan() {
        if value.is_sign_negative() {
            "-nan".to_string()
        } else {
            "nan".to_string()
        }
    } else if value.is_infinite() {
        if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        }
    } else {
        format!("{value:.precision$}")
    }
}

/// Parse one whitespace-free token as a finite real number.
pub fn parse_value(token: &str) -> Result<f64> {
    match token.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormulaError::invalid_number(token.trim())),
    }
}

/// Parse every token, stopping at the first one that is not a number.
pub fn parse_values<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<f64>> {
    tokens.iter().map(|t| parse_value(t.as_ref())).collect()
}
