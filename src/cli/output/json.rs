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


//! JSON output formatter

use serde::Serialize;

use super::{FormatError, OutputFormatter};
use crate::core::{Evaluation, FormulaError};
use crate::registry::FormulaMetadata;

pub struct JsonFormatter {
    precision: usize,
}

impl JsonFormatter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

#[derive(Serialize)]
struct JsonEvaluationResult<'a> {
    selector: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    exercise: Option<u32>,
    title: &'a str,
    inputs: Vec<JsonBinding<'a>>,
    outputs: Vec<JsonOutput<'a>>,
}

#[derive(Serialize)]
struct JsonBinding<'a> {
    name: &'a str,
    value: f64,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    name: &'a str,
    expression: &'a str,
    /// `null` for NaN and infinities
    value: Option<f64>,
    display: String,
}

#[derive(Serialize)]
struct JsonErrorResult {
    error: JsonError,
}

#[derive(Serialize)]
struct JsonError {
    code: String,
    message: String,
    help: &'static str,
}

impl OutputFormatter for JsonFormatter {
    fn format_evaluation(&self, evaluation: &Evaluation) -> Result<String, FormatError> {
        let result = JsonEvaluationResult {
            selector: evaluation.selector,
            exercise: evaluation.exercise,
            title: &evaluation.title,
            inputs: evaluation
                .inputs
                .iter()
                .map(|binding| JsonBinding {
                    name: &binding.name,
                    value: binding.value,
                })
                .collect(),
            outputs: evaluation
                .outputs
                .iter()
                .map(|output| JsonOutput {
                    name: &output.name,
                    expression: &output.expression,
                    value: output.value.is_finite().then_some(output.value),
                    display: output.fixed(self.precision),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&result)?)
    }

    fn format_catalogue(&self, formulas: &[&FormulaMetadata]) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(formulas)?)
    }

    fn format_error(&self, error: &FormulaError) -> String {
        let result = JsonErrorResult {
            error: JsonError {
                code: error.error_code().code_str(),
                message: error.message().to_string(),
                help: error.help(),
            },
        };
        serde_json::to_string_pretty(&result).unwrap_or_else(|_| error.to_string())
    }
}
