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

//! Input and output values of a formula evaluation

use serde::Serialize;
use smallvec::SmallVec;

use super::format::format_fixed_with;

/// Raw values returned by a formula implementation, in output order
pub type Values = SmallVec<[f64; 2]>;

/// Input tuple handed to a formula implementation.
///
/// The registry checks the arity before calling, so the accessors only fall
/// back to NaN for variables the formula did not declare.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inputs {
    values: SmallVec<[f64; 3]>,
}

impl Inputs {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: SmallVec::from_slice(values),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn x(&self) -> f64 {
        self.get(0)
    }

    pub fn y(&self) -> f64 {
        self.get(1)
    }

    pub fn z(&self) -> f64 {
        self.get(2)
    }

    fn get(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(f64::NAN)
    }
}

/// A named variable and the value it was bound to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binding {
    pub name: String,
    pub value: f64,
}

/// One named result of an evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Output {
    pub name: String,
    /// Expression text the value was computed from
    pub expression: String,
    pub value: f64,
}

impl Output {
    pub fn new(name: impl Into<String>, expression: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            expression: expression.into(),
            value,
        }
    }

    /// Fixed-point rendering with `precision` fractional digits
    pub fn fixed(&self, precision: usize) -> String {
        format_fixed_with(self.value, precision)
    }
}

/// Result of evaluating one formula
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub selector: u32,
    pub exercise: Option<u32>,
    pub title: String,
    pub inputs: Vec<Binding>,
    pub outputs: Vec<Output>,
}

impl Evaluation {
    /// True when every output is a finite number
    pub fn is_finite(&self) -> bool {
        self.outputs.iter().all(|o| o.value.is_finite())
    }

    pub fn output(&self, name: &str) -> Option<&Output> {
        self.outputs.iter().find(|o| o.name == name)
    }

    /// Output values in order
    pub fn values(&self) -> Vec<f64> {
        self.outputs.iter().map(|o| o.value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_accessors() {
        let inputs = Inputs::new(&[1.0, 2.0, 3.0]);
        assert_eq!(inputs.len(), 3);
        assert_eq!((inputs.x(), inputs.y(), inputs.z()), (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_missing_variable_is_nan() {
        let inputs = Inputs::new(&[4.0]);
        assert_eq!(inputs.x(), 4.0);
        assert!(inputs.y().is_nan());
        assert!(Inputs::default().is_empty());
    }

    #[test]
    fn test_evaluation_lookup() {
        let evaluation = Evaluation {
            selector: 7,
            exercise: Some(5),
            title: "Compute z (variant b)".to_string(),
            inputs: vec![],
            outputs: vec![
                Output::new("z", "sqrt(x^2 + y^2) / (1 + exp(-x))", 4.762_878),
                Output::new("w", "1 / 0", f64::INFINITY),
            ],
        };
        assert_eq!(evaluation.output("z").map(|o| o.fixed(4)), Some("4.7629".to_string()));
        assert!(evaluation.output("q").is_none());
        assert!(!evaluation.is_finite());
        assert_eq!(evaluation.values().len(), 2);
    }
}
