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


//! Pretty output formatter with colors and symbols

use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL};

use super::{FormatError, OutputFormatter};
use crate::core::{Evaluation, FormulaError};
use crate::registry::FormulaMetadata;

pub struct PrettyFormatter {
    colored: bool,
    precision: usize,
}

impl PrettyFormatter {
    pub fn new(colored: bool, precision: usize) -> Self {
        Self { colored, precision }
    }

    fn colorize(&self, text: &str, color: colored::Color) -> String {
        if self.colored {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn error_icon(&self) -> String {
        if self.colored {
            "❌".to_string()
        } else {
            "[ERROR]".to_string()
        }
    }
}

impl OutputFormatter for PrettyFormatter {
    fn format_evaluation(&self, evaluation: &Evaluation) -> Result<String, FormatError> {
        let mut result = String::new();
        result.push_str(&self.bold(&evaluation.title));
        result.push('\n');

        for output in &evaluation.outputs {
            let color = if output.value.is_finite() {
                colored::Color::Yellow
            } else {
                colored::Color::Red
            };
            result.push_str(&format!(
                "{} = {}\n",
                self.colorize(&output.name, colored::Color::Green),
                self.colorize(&output.fixed(self.precision), color)
            ));
        }

        Ok(result.trim_end().to_string())
    }

    fn format_catalogue(&self, formulas: &[&FormulaMetadata]) -> Result<String, FormatError> {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["#", "Exercise", "Group", "Title", "Inputs", "Outputs"]);

        for metadata in formulas {
            let exercise = metadata
                .exercise
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string());
            let inputs = if metadata.variables.is_empty() {
                "-".to_string()
            } else {
                metadata.variables.join(", ")
            };
            let outputs: Vec<&str> = metadata.outputs.iter().map(|o| o.name.as_str()).collect();

            table.add_row(vec![
                metadata.selector.to_string(),
                exercise,
                metadata.group.to_string(),
                metadata.title.clone(),
                inputs,
                outputs.join(", "),
            ]);
        }

        Ok(format!(
            "{} ({} found)\n{table}",
            self.bold("Formulas"),
            formulas.len()
        ))
    }

    fn format_error(&self, error: &FormulaError) -> String {
        format!(
            "{} {}\n   {}",
            self.error_icon(),
            self.colorize(&error.to_string(), colored::Color::Red),
            self.colorize(error.help(), colored::Color::Cyan)
        )
    }
}
