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

//! Core error types with error codes
//!
//! Math domain problems (log of a non-positive number, division by zero, ...)
//! are not errors here: they surface as NaN or infinity in the evaluated
//! values.

use thiserror::Error;

pub use super::error_code::*;

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, FormulaError>;

/// Main error type with error codes
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormulaError {
    /// Registry lookup or registration failed
    #[error("{error_code}: {message}")]
    RegistryError {
        error_code: ErrorCode,
        message: String,
        selector: Option<u32>,
    },

    /// Caller supplied unusable input
    #[error("{error_code}: {message}")]
    InputError {
        error_code: ErrorCode,
        message: String,
        token: Option<String>,
    },

    /// Console or configuration failure
    #[error("{error_code}: {message}")]
    SystemError {
        error_code: ErrorCode,
        message: String,
    },
}

impl FormulaError {
    pub fn unknown_formula(selector: u32) -> Self {
        Self::RegistryError {
            error_code: LF0001,
            message: format!("Unknown formula: {selector}"),
            selector: Some(selector),
        }
    }

    pub fn unknown_exercise(exercise: u32) -> Self {
        Self::RegistryError {
            error_code: LF0001,
            message: format!("Unknown exercise: {exercise}"),
            selector: None,
        }
    }

    pub fn unknown_group(name: &str, valid: &[String]) -> Self {
        Self::RegistryError {
            error_code: LF0003,
            message: format!(
                "Unknown formula group: {name} (expected one of {})",
                valid.join(", ")
            ),
            selector: None,
        }
    }

    pub fn duplicate_formula(selector: u32) -> Self {
        Self::RegistryError {
            error_code: LF0002,
            message: format!("Formula {selector} is already registered"),
            selector: Some(selector),
        }
    }

    pub fn arity_mismatch(selector: u32, expected: usize, actual: usize) -> Self {
        Self::InputError {
            error_code: LF0051,
            message: format!("Formula {selector} expects {expected} input value(s), got {actual}"),
            token: None,
        }
    }

    pub fn invalid_number(token: impl Into<String>) -> Self {
        let token = token.into();
        Self::InputError {
            error_code: LF0052,
            message: format!("'{token}' is not a real number"),
            token: Some(token),
        }
    }

    pub fn io_error(message: impl Into<String>) -> Self {
        Self::SystemError {
            error_code: LF0101,
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::SystemError {
            error_code: LF0102,
            message: message.into(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &ErrorCode {
        match self {
            Self::RegistryError { error_code, .. } => error_code,
            Self::InputError { error_code, .. } => error_code,
            Self::SystemError { error_code, .. } => error_code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::RegistryError { message, .. } => message,
            Self::InputError { message, .. } => message,
            Self::SystemError { message, .. } => message,
        }
    }

    /// Help text for the error code
    pub fn help(&self) -> &'static str {
        self.error_code().info().help
    }
}

impl From<std::io::Error> for FormulaError {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_includes_code() {
        let err = FormulaError::unknown_formula(40);
        assert_eq!(err.to_string(), "LF0001: Unknown formula: 40");
        assert_eq!(err.error_code(), &LF0001);
    }

    #[test]
    fn test_arity_mismatch_message() {
        let err = FormulaError::arity_mismatch(3, 3, 2);
        assert_eq!(
            err.to_string(),
            "LF0051: Formula 3 expects 3 input value(s), got 2"
        );
        assert_eq!(err.error_code().category(), ErrorCategory::Input);
    }

    #[test]
    fn test_invalid_number_keeps_token() {
        let err = FormulaError::invalid_number("abc");
        match &err {
            FormulaError::InputError { token, .. } => assert_eq!(token.as_deref(), Some("abc")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!err.help().is_empty());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: FormulaError = io.into();
        assert_eq!(err.error_code(), &LF0101);
        assert_eq!(err.message(), "pipe closed");
    }
}
