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

//! Error code system in the style of the Rust compiler (E0001, E0002, ...)
//!
//! Codes are rendered as `LF0001`, `LF0051`, ... and grouped into ranges by
//! category.

use std::fmt;

/// Error categories for organizing error codes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Registry lookup and registration errors (LF0001-LF0050)
    Registry,
    /// Input errors (LF0051-LF0100)
    Input,
    /// System and configuration errors (LF0101-LF0150)
    System,
}

/// Error code following the compiler pattern (LF0001, LF0002, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    pub code: u16,
}

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self { code }
    }

    /// Get the full error code string (e.g., "LF0001")
    pub fn code_str(&self) -> String {
        format!("LF{:04}", self.code)
    }

    /// Get error information from the registry
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_REGISTRY.get_error_info(self)
    }

    pub fn category(&self) -> ErrorCategory {
        match self.code {
            1..=50 => ErrorCategory::Registry,
            51..=100 => ErrorCategory::Input,
            _ => ErrorCategory::System,
        }
    }

    /// Get human-readable description for this error code
    pub fn description(&self) -> &'static str {
        self.info().title
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LF{:04}", self.code)
    }
}

/// Error information attached to every code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    pub code: u16,
    pub title: &'static str,
    pub description: &'static str,
    /// Suggested fix
    pub help: &'static str,
}

impl ErrorInfo {
    pub const fn new(
        code: u16,
        title: &'static str,
        description: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            code,
            title,
            description,
            help,
        }
    }
}

/// Central error registry containing all error definitions
pub struct ErrorRegistry;

impl ErrorRegistry {
    pub fn get_error_info(&self, error_code: &ErrorCode) -> &'static ErrorInfo {
        match error_code.code {
            1 => &LF0001_INFO,
            2 => &LF0002_INFO,
            3 => &LF0003_INFO,
            51 => &LF0051_INFO,
            52 => &LF0052_INFO,
            101 => &LF0101_INFO,
            102 => &LF0102_INFO,
            _ => &UNKNOWN_ERROR_INFO,
        }
    }
}

pub static ERROR_REGISTRY: ErrorRegistry = ErrorRegistry;

// Registry errors (LF0001-LF0050)

/// Unknown formula selector
pub const LF0001: ErrorCode = ErrorCode::new(1);
/// Formula registered twice
pub const LF0002: ErrorCode = ErrorCode::new(2);
/// Unknown formula group name
pub const LF0003: ErrorCode = ErrorCode::new(3);

// Input errors (LF0051-LF0100)

/// Wrong number of input values
pub const LF0051: ErrorCode = ErrorCode::new(51);
/// Input token is not a real number
pub const LF0052: ErrorCode = ErrorCode::new(52);

// System errors (LF0101-LF0150)

/// I/O failure on the console streams
pub const LF0101: ErrorCode = ErrorCode::new(101);
/// Configuration could not be loaded
pub const LF0102: ErrorCode = ErrorCode::new(102);

static LF0001_INFO: ErrorInfo = ErrorInfo::new(
    1,
    "Unknown formula",
    "The selector does not name any formula in the catalogue.",
    "Run `linear-formulas list` to see the available selectors.",
);

static LF0002_INFO: ErrorInfo = ErrorInfo::new(
    2,
    "Duplicate formula",
    "A formula with the same selector is already registered.",
    "Each selector may be registered only once.",
);

static LF0003_INFO: ErrorInfo = ErrorInfo::new(
    3,
    "Unknown formula group",
    "The group name does not match any group in the catalogue.",
    "Use one of: example, expressions, ab, z, t, y, s, r, q, w, p, v.",
);

static LF0051_INFO: ErrorInfo = ErrorInfo::new(
    51,
    "Wrong number of inputs",
    "The formula expects a different number of input values.",
    "Supply exactly one value per declared variable (x, y, z).",
);

static LF0052_INFO: ErrorInfo = ErrorInfo::new(
    52,
    "Invalid number",
    "An input token could not be parsed as a finite real number.",
    "Use decimal notation such as 1, -2.5 or 3e-2.",
);

static LF0101_INFO: ErrorInfo = ErrorInfo::new(
    101,
    "I/O error",
    "Reading from or writing to the console failed.",
    "Check that standard input and output are available.",
);

static LF0102_INFO: ErrorInfo = ErrorInfo::new(
    102,
    "Configuration error",
    "The configuration file could not be read or parsed.",
    "Fix the TOML syntax or remove the file to use defaults.",
);

static UNKNOWN_ERROR_INFO: ErrorInfo = ErrorInfo::new(
    0,
    "Unknown error",
    "No documentation is available for this error code.",
    "",
);
