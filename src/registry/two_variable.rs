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

//! Two-variable formulas (`z` and `R` groups)
//!
//! The `z` group has no variant (a) in the exercise sheet, so its menu
//! titles start at (b).

use smallvec::smallvec;

use super::{FormulaGroup, FormulaRegistry};
use crate::core::{Inputs, Result, Values};
use crate::register_formula;

impl FormulaRegistry {
    pub fn register_two_variable_formulas(&mut self) -> Result<()> {
        self.register_z_formulas()?;
        self.register_r_formulas()?;
        Ok(())
    }

    fn register_z_formulas(&mut self) -> Result<()> {
        register_formula!(
            self,
            selector: 7,
            exercise: 5,
            group: FormulaGroup::Z,
            title: "Compute z (b)",
            inputs: ["x", "y"],
            outputs: ["z" => "sqrt(x^2 + y^2) / (1 + exp(-x))"],
            implementation: |v: &Inputs| -> Values {
                let (x, y) = (v.x(), v.y());
                smallvec![(x.powf(2.0) + y.powf(2.0)).sqrt() / (1.0 + (-x).exp())]
            }
        )?;

        register_formula!(
            self,
            selector: 8,
            exercise: 6,
            group: FormulaGroup::Z,
            title: "Compute z (c)",
            inputs: ["x", "y"],
            outputs: ["z" => "(sin(x) + cos(y)) / (1 + x^2)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y) = (v.x(), v.y());
                smallvec![(x.sin() + y.cos()) / (1.0 + x.powf(2.0))]
            }
        )?;

        register_formula!(
            self,
            selector: 9,
            exercise: 7,
            group: FormulaGroup::Z,
            title: "Compute z (d)",
            inputs: ["x", "y"],
            outputs: ["z" => "ln(x + y) + atan(x / y)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y) = (v.x(), v.y());
                smallvec![(x + y).ln() + (x / y).atan()]
            }
        )
    }

    fn register_r_formulas(&mut self) -> Result<()> {
        register_formula!(
            self,
            selector: 21,
            exercise: 19,
            group: FormulaGroup::R,
            title: "Compute R (a)",
            inputs: ["x", "y"],
            outputs: ["R" => "x^2 + y^2 / (1 + sqrt(x + y))"],
            implementation: |v: &Inputs| -> Values {
                let (x, y) = (v.x(), v.y());
                smallvec![x.powf(2.0) + y.powf(2.0) / (1.0 + (x + y).sqrt())]
            }
        )?;

        register_formula!(
            self,
            selector: 22,
            exercise: 20,
            group: FormulaGroup::R,
            title: "Compute R (b)",
            inputs: ["x", "y"],
            outputs: ["R" => "exp(x) * sin(y) + ln(x + y) / cos(x)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y) = (v.x(), v.y());
                smallvec![x.exp() * y.sin() + (x + y).ln() / x.cos()]
            }
        )?;

        register_formula!(
            self,
            selector: 23,
            exercise: 21,
            group: FormulaGroup::R,
            title: "Compute R (c)",
            inputs: ["x", "y"],
            outputs: ["R" => "atan(x) + y^3 / (1 + |x - y|)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y) = (v.x(), v.y());
                smallvec![x.atan() + y.powf(3.0) / (1.0 + (x - y).abs())]
            }
        )?;

        register_formula!(
            self,
            selector: 24,
            exercise: 22,
            group: FormulaGroup::R,
            title: "Compute R (d)",
            inputs: ["x", "y"],
            outputs: ["R" => "sqrt(x * y) + log10(x + 1) - tan(y)"],
            implementation: |v: &Inputs| -> Values {
                let (x, y) = (v.x(), v.y());
                smallvec![(x * y).sqrt() + (x + 1.0).log10() - y.tan()]
            }
        )
    }
}
