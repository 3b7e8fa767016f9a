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


//! Raw output formatter for plain text output

use super::{FormatError, OutputFormatter};
use crate::core::{Evaluation, FormulaError};
use crate::registry::FormulaMetadata;

pub struct RawFormatter {
    precision: usize,
}

impl RawFormatter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl OutputFormatter for RawFormatter {
    fn format_evaluation(&self, evaluation: &Evaluation) -> Result<String, FormatError> {
        let lines: Vec<String> = evaluation
            .outputs
            .iter()
            .map(|output| format!("{} = {}", output.name, output.fixed(self.precision)))
            .collect();
        Ok(lines.join("\n"))
    }

    fn format_catalogue(&self, formulas: &[&FormulaMetadata]) -> Result<String, FormatError> {
        let lines: Vec<String> = formulas
            .iter()
            .map(|metadata| format!("{}\t{}\t{}", metadata.selector, metadata.group, metadata.title))
            .collect();
        Ok(lines.join("\n"))
    }

    fn format_error(&self, error: &FormulaError) -> String {
        format!("error: {error}")
    }
}
