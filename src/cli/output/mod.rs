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


//! Output formatting for CLI commands

mod json;
mod pretty;
mod raw;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{DEFAULT_PRECISION, Evaluation, FormulaError};
use crate::registry::FormulaMetadata;

pub use json::JsonFormatter;
pub use pretty::PrettyFormatter;
pub use raw::RawFormatter;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored output with titles and tables (default)
    #[default]
    Pretty,
    /// JSON structured output for tooling
    Json,
    /// Bare `name = value` lines
    Raw,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Raw => write!(f, "raw"),
            OutputFormat::Pretty => write!(f, "pretty"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub trait OutputFormatter {
    /// Render the outputs of one evaluation
    fn format_evaluation(&self, evaluation: &Evaluation) -> Result<String, FormatError>;
    /// Render the formula catalogue
    fn format_catalogue(&self, formulas: &[&FormulaMetadata]) -> Result<String, FormatError>;
    /// Render a user-facing error
    fn format_error(&self, error: &FormulaError) -> String;
}

pub struct FormatterFactory {
    no_color: bool,
    precision: usize,
}

impl FormatterFactory {
    pub fn new(no_color: bool) -> Self {
        Self {
            no_color,
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn create_formatter(&self, format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new(self.precision)),
            OutputFormat::Raw => Box::new(RawFormatter::new(self.precision)),
            OutputFormat::Pretty => Box::new(PrettyFormatter::new(!self.no_color, self.precision)),
        }
    }
}

impl Default for FormatterFactory {
    fn default() -> Self {
        Self::new(false)
    }
}
