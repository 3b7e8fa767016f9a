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

//! Formula registry
//!
//! Every menu entry is a pure function from its input tuple to one or more
//! values, registered together with the metadata the menu and the output
//! formatters need (title, variable names, expression text).

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use log::{debug, warn};
use serde::Serialize;

use crate::core::{Binding, Evaluation, FormulaError, Inputs, Output, Result, Values};

pub mod builder;
pub mod defaults;
pub mod demos;
pub mod pairs;
pub mod single;
pub mod ternary;
pub mod two_variable;

#[cfg(test)]
mod tests;

/// Pure formula implementation
pub type FormulaFn = fn(&Inputs) -> Values;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaGroup {
    /// Fixed-constant example program
    Example,
    /// Fixed-constant expression showcase
    Expressions,
    /// Pair of results a and b
    AB,
    Z,
    T,
    Y,
    S,
    R,
    Q,
    W,
    P,
    V,
}

impl FormulaGroup {
    pub const ALL: [FormulaGroup; 12] = [
        FormulaGroup::Example,
        FormulaGroup::Expressions,
        FormulaGroup::AB,
        FormulaGroup::Z,
        FormulaGroup::T,
        FormulaGroup::Y,
        FormulaGroup::S,
        FormulaGroup::R,
        FormulaGroup::Q,
        FormulaGroup::W,
        FormulaGroup::P,
        FormulaGroup::V,
    ];
}

impl fmt::Display for FormulaGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormulaGroup::Example => "example",
            FormulaGroup::Expressions => "expressions",
            FormulaGroup::AB => "ab",
            FormulaGroup::Z => "z",
            FormulaGroup::T => "t",
            FormulaGroup::Y => "y",
            FormulaGroup::S => "s",
            FormulaGroup::R => "r",
            FormulaGroup::Q => "q",
            FormulaGroup::W => "w",
            FormulaGroup::P => "p",
            FormulaGroup::V => "v",
        };
        write!(f, "{name}")
    }
}

impl FromStr for FormulaGroup {
    type Err = FormulaError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        FormulaGroup::ALL
            .into_iter()
            .find(|group| group.to_string() == wanted)
            .ok_or_else(|| {
                let valid: Vec<String> =
                    FormulaGroup::ALL.iter().map(|g| g.to_string()).collect();
                FormulaError::unknown_group(s.trim(), &valid)
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputMetadata {
    pub name: String,
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaMetadata {
    /// Menu number
    pub selector: u32,
    /// Exercise number (1..37) for the formulas that read user input
    pub exercise: Option<u32>,
    pub group: FormulaGroup,
    pub title: String,
    /// Names of the input variables, in the order they are read
    pub variables: Vec<String>,
    pub outputs: Vec<OutputMetadata>,
}

impl FormulaMetadata {
    pub fn arity(&self) -> usize {
        self.variables.len()
    }

    /// Prompt shown before reading the inputs, e.g. `Enter x, y, z: `
    pub fn prompt(&self) -> Option<String> {
        if self.variables.is_empty() {
            None
        } else {
            Some(format!("Enter {}: ", self.variables.join(", ")))
        }
    }
}

/// Formula registry keyed by menu selector
pub struct FormulaRegistry {
    formulas: IndexMap<u32, (FormulaFn, FormulaMetadata)>,
}

impl FormulaRegistry {
    pub fn new() -> Self {
        Self {
            formulas: IndexMap::new(),
        }
    }

    pub fn register_formula(&mut self, function: FormulaFn, metadata: FormulaMetadata) -> Result<()> {
        let selector = metadata.selector;
        if self.formulas.contains_key(&selector) {
            return Err(FormulaError::duplicate_formula(selector));
        }

        debug!("registered formula {selector}: {}", metadata.title);
        self.formulas.insert(selector, (function, metadata));
        self.formulas.sort_keys();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    pub fn contains(&self, selector: u32) -> bool {
        self.formulas.contains_key(&selector)
    }

    pub fn get_formula_metadata(&self, selector: u32) -> Option<&FormulaMetadata> {
        self.formulas.get(&selector).map(|(_, metadata)| metadata)
    }

    pub fn get_by_exercise(&self, exercise: u32) -> Option<&FormulaMetadata> {
        self.formulas
            .values()
            .map(|(_, metadata)| metadata)
            .find(|metadata| metadata.exercise == Some(exercise))
    }

    /// Highest registered selector, the top entry of the menu
    pub fn max_selector(&self) -> u32 {
        self.formulas.keys().copied().max().unwrap_or(0)
    }

    /// All formulas in selector order
    pub fn list_formulas(&self) -> Vec<&FormulaMetadata> {
        self.formulas.values().map(|(_, metadata)| metadata).collect()
    }

    pub fn list_formulas_by_group(&self, group: FormulaGroup) -> Vec<&FormulaMetadata> {
        self.list_formulas()
            .into_iter()
            .filter(|metadata| metadata.group == group)
            .collect()
    }

    /// Evaluate the formula behind a menu selector.
    ///
    /// Out-of-domain arguments are not rejected; they propagate as NaN or
    /// infinity in the returned outputs.
    pub fn evaluate(&self, selector: u32, inputs: &[f64]) -> Result<Evaluation> {
        let (function, metadata) = self
            .formulas
            .get(&selector)
            .ok_or_else(|| FormulaError::unknown_formula(selector))?;

        if inputs.len() != metadata.arity() {
            return Err(FormulaError::arity_mismatch(
                selector,
                metadata.arity(),
                inputs.len(),
            ));
        }

        debug!("evaluating formula {selector} with {inputs:?}");
        let values = function(&Inputs::new(inputs));
        debug_assert_eq!(
            values.len(),
            metadata.outputs.len(),
            "formula {selector} returned a different number of values than it declares"
        );

        let outputs: Vec<Output> = metadata
            .outputs
            .iter()
            .zip(values.iter())
            .map(|(output, value)| Output::new(&output.name, &output.expression, *value))
            .collect();

        let evaluation = Evaluation {
            selector,
            exercise: metadata.exercise,
            title: metadata.title.clone(),
            inputs: metadata
                .variables
                .iter()
                .zip(inputs)
                .map(|(name, value)| Binding {
                    name: name.clone(),
                    value: *value,
                })
                .collect(),
            outputs,
        };

        if !evaluation.is_finite() {
            warn!(
                "formula {selector} produced a non-finite result for inputs {inputs:?}"
            );
        }

        Ok(evaluation)
    }

    /// Evaluate by exercise number (1..37) instead of menu selector
    pub fn evaluate_exercise(&self, exercise: u32, inputs: &[f64]) -> Result<Evaluation> {
        let selector = self
            .get_by_exercise(exercise)
            .map(|metadata| metadata.selector)
            .ok_or_else(|| FormulaError::unknown_exercise(exercise))?;
        self.evaluate(selector, inputs)
    }
}

impl Default for FormulaRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry
            .register_default_formulas()
            .expect("Failed to register default formulas");
        registry
    }
}

/// Create a registry with the full formula catalogue
pub fn create_standard_registry() -> FormulaRegistry {
    FormulaRegistry::default()
}
