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

//! Single-variable formulas for `y`

use smallvec::smallvec;

use super::{FormulaGroup, FormulaRegistry};
use crate::core::{Inputs, Result, Values};
use crate::register_formula;

impl FormulaRegistry {
    pub fn register_single_variable_formulas(&mut self) -> Result<()> {
        register_formula!(
            self,
            selector: 13,
            exercise: 11,
            group: FormulaGroup::Y,
            title: "Compute y (a)",
            inputs: ["x"],
            outputs: ["y" => "sin(x) + cos(x)^2 / (1 + exp(-x))"],
            implementation: |v: &Inputs| -> Values {
                let x = v.x();
                smallvec![x.sin() + x.cos().powf(2.0) / (1.0 + (-x).exp())]
            }
        )?;

        register_formula!(
            self,
            selector: 14,
            exercise: 12,
            group: FormulaGroup::Y,
            title: "Compute y (b)",
            inputs: ["x"],
            outputs: ["y" => "ln(x + 1) + atan(x) - sqrt(x)"],
            implementation: |v: &Inputs| -> Values {
                let x = v.x();
                smallvec![(x + 1.0).ln() + x.atan() - x.sqrt()]
            }
        )?;

        register_formula!(
            self,
            selector: 15,
            exercise: 13,
            group: FormulaGroup::Y,
            title: "Compute y (c)",
            inputs: ["x"],
            outputs: ["y" => "exp(x) / (1 + x^2) + |x - 5|"],
            implementation: |v: &Inputs| -> Values {
                let x = v.x();
                smallvec![x.exp() / (1.0 + x.powf(2.0)) + (x - 5.0).abs()]
            }
        )?;

        // log10(x + 1) is zero at x = 0, so the second term becomes infinite there
        register_formula!(
            self,
            selector: 16,
            exercise: 14,
            group: FormulaGroup::Y,
            title: "Compute y (d)",
            inputs: ["x"],
            outputs: ["y" => "x^2 * sin(x) + cos(x) / log10(x + 1)"],
            implementation: |v: &Inputs| -> Values {
                let x = v.x();
                smallvec![x.powf(2.0) * x.sin() + x.cos() / (x + 1.0).log10()]
            }
        )
    }
}
